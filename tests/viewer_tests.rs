use siteatlas::{
    core::map::MapEvent,
    layers::cluster::ClusterGroup,
    viewer::{PanelSide, SiteViewer, SITES_LAYER_ID},
    LayerTrait, SiteCollection, ViewerOptions,
};

/// Builds a site document with `count` sites spread across the world.
/// Every site gets a popup; every odd id also gets detail-map bounds.
fn site_document(count: usize) -> SiteCollection {
    let features: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let id = i as i64 + 1;
            let lat = -60.0 + (i as f64) * 7.0;
            let lon = -150.0 + (i as f64) * 13.0;
            let mut properties = serde_json::json!({
                "id": id,
                "img": "/assets/icons/town.png",
                "name": format!("Site {}", id),
                "popupContent": format!("<b>Site {}</b>", id),
            });
            if id % 2 == 1 {
                properties["map_bounds"] =
                    serde_json::json!([[lat, lon], [lat + 0.5, lon + 0.5]]);
            }
            serde_json::json!({
                "type": "Feature",
                "properties": properties,
                "geometry": { "type": "Point", "coordinates": [lon, lat] }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "FeatureCollection",
        "features": features
    }))
    .unwrap()
}

fn loaded_viewer(count: usize) -> SiteViewer {
    let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
    viewer.feed_sites(site_document(count));
    assert!(viewer.poll_sites());
    viewer
}

#[test]
fn marker_layer_matches_input_order() {
    let viewer = loaded_viewer(9);

    let layer = viewer.map().get_layer(SITES_LAYER_ID).unwrap();
    let clusters = layer.as_any().downcast_ref::<ClusterGroup>().unwrap();

    assert_eq!(clusters.len(), 9);
    let ids: Vec<&str> = clusters.markers().iter().map(|m| m.id()).collect();
    let expected: Vec<String> = (1..=9).map(|i| format!("site-{}", i)).collect();
    assert_eq!(ids, expected);
    assert!(clusters.markers().iter().all(|m| m.has_popup()));
}

#[test]
fn overlay_toggle_is_an_idempotent_round_trip() {
    let mut viewer = loaded_viewer(4);

    assert!(!viewer.is_overlay_shown(1));
    assert_eq!(viewer.toggle_detail_overlay(1), Some(true));
    assert_eq!(viewer.toggle_detail_overlay(1), Some(false));
    assert!(!viewer.is_overlay_shown(1));

    // The entry is cleared, not deleted
    assert_eq!(viewer.overlay_registry().get(&1), Some(&None));

    // And the overlay came off the map exactly once
    let removals = viewer
        .map_mut()
        .process_events()
        .into_iter()
        .filter(|e| {
            matches!(
                e,
                MapEvent::LayerRemoved { layer_id } if layer_id == "site-overlay-1"
            )
        })
        .count();
    assert_eq!(removals, 1);
}

#[test]
fn overlay_toggle_for_unknown_site_changes_nothing() {
    let mut viewer = loaded_viewer(4);
    let layers_before = viewer.map().list_layers();

    assert_eq!(viewer.toggle_detail_overlay(4242), None);

    assert!(viewer.overlay_registry().is_empty());
    assert_eq!(viewer.map().list_layers(), layers_before);
}

#[test]
fn overlay_toggle_without_detail_bounds_changes_nothing() {
    // Even ids carry no map_bounds in the fixture
    let mut viewer = loaded_viewer(4);
    assert_eq!(viewer.toggle_detail_overlay(2), None);
    assert!(viewer.overlay_registry().is_empty());
}

#[test]
fn overlays_are_tracked_per_site() {
    let mut viewer = loaded_viewer(6);

    assert_eq!(viewer.toggle_detail_overlay(1), Some(true));
    assert_eq!(viewer.toggle_detail_overlay(3), Some(true));
    assert_eq!(viewer.toggle_detail_overlay(1), Some(false));

    assert!(!viewer.is_overlay_shown(1));
    assert!(viewer.is_overlay_shown(3));
    assert!(viewer.map().has_layer("site-overlay-3"));
    assert!(!viewer.map().has_layer("site-overlay-1"));
}

#[test]
fn site_button_recenters_to_small_box() {
    let mut viewer = loaded_viewer(2);

    let bounds = SiteViewer::focus_bounds(10.0, 20.0);
    assert_eq!(bounds.south_west.lat, 10.0);
    assert_eq!(bounds.south_west.lng, 20.0);
    assert_eq!(bounds.north_east.lat, 10.01);
    assert_eq!(bounds.north_east.lng, 20.01);

    viewer.focus_site(10.0, 20.0);
    let viewport = viewer.map().viewport();
    assert!((viewport.center.lat - 10.005).abs() < 1e-9);
    assert!((viewport.center.lng - 20.005).abs() < 1e-9);
    // The box is tiny, so the view ends up at the zoom ceiling
    assert_eq!(viewport.zoom, viewer.options().max_zoom);
}

#[test]
fn panel_toggles_are_pure_visibility_flips() {
    let mut viewer = loaded_viewer(2);

    for side in [PanelSide::Left, PanelSide::Right] {
        let before = viewer.panel(side).is_visible();
        viewer.toggle_panel(side);
        assert_eq!(viewer.panel(side).is_visible(), !before);
        viewer.toggle_panel(side);
        assert_eq!(viewer.panel(side).is_visible(), before);
    }
}

#[test]
fn second_site_delivery_is_ignored() {
    let mut viewer = loaded_viewer(5);
    viewer.on_sites_loaded(site_document(1));
    assert_eq!(viewer.sites().unwrap().len(), 5);
}

#[test]
fn cluster_radius_comes_from_configuration() {
    let mut viewer = SiteViewer::new(ViewerOptions {
        cluster_radius: 40.0,
        ..Default::default()
    })
    .unwrap();
    viewer.feed_sites(site_document(3));
    viewer.poll_sites();

    let layer = viewer.map().get_layer(SITES_LAYER_ID).unwrap();
    let clusters = layer.as_any().downcast_ref::<ClusterGroup>().unwrap();
    assert_eq!(clusters.options().max_cluster_radius, 40.0);
}

#[test]
fn marker_layer_is_registered_as_toggleable() {
    let mut viewer = loaded_viewer(3);
    assert_eq!(
        viewer.toggleable_overlays(),
        &[(SITES_LAYER_ID.to_string(), "Sites".to_string())]
    );

    assert_eq!(viewer.toggle_overlay_layer(SITES_LAYER_ID), Some(false));
    assert_eq!(viewer.toggle_overlay_layer(SITES_LAYER_ID), Some(true));
    assert_eq!(viewer.toggle_overlay_layer("nope"), None);
}

#[cfg(feature = "tokio-runtime")]
mod fetch {
    use super::*;

    #[tokio::test]
    async fn failed_fetch_leaves_map_tile_only() {
        let mut viewer = SiteViewer::new(ViewerOptions {
            sites_endpoint: "not a url".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert!(viewer.start_loading());
        // Only the first call issues a request
        assert!(!viewer.start_loading());

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        viewer.poll_sites();

        assert!(viewer.sites().is_none());
        assert!(!viewer.map().has_layer(SITES_LAYER_ID));
        assert!(viewer.map().has_layer("base"));
        // Overlay toggling stays inoperable, silently
        assert_eq!(viewer.toggle_detail_overlay(1), None);
    }
}
