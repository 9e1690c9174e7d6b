use siteatlas::{SiteCollection, SiteViewer, ViewerOptions};
use siteatlas::viewer::{PanelSide, SITES_LAYER_ID};

const SAMPLE_SITES: &str = r#"
{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "id": 1,
                "img": "/assets/icons/town.png",
                "name": "Oakhold",
                "popupContent": "<b>Oakhold</b><br>Town",
                "map_bounds": [[10.0, 20.0], [10.5, 20.5]]
            },
            "geometry": { "type": "Point", "coordinates": [20.25, 10.25] }
        },
        {
            "type": "Feature",
            "properties": {
                "id": 2,
                "img": "/assets/icons/fortress.png",
                "name": "Gravelgate"
            },
            "geometry": { "type": "Point", "coordinates": [-31.0, 44.5] }
        },
        {
            "type": "Feature",
            "properties": {
                "id": 3,
                "img": "/assets/icons/cave.png",
                "name": "Echo Hollow",
                "map_bounds": [[-12.0, -60.0], [-11.5, -59.5]]
            },
            "geometry": { "type": "Point", "coordinates": [-59.75, -11.75] }
        }
    ]
}
"#;

/// Example of driving the viewer without any UI
#[tokio::main]
async fn main() -> siteatlas::Result<()> {
    #[cfg(feature = "debug")]
    env_logger::init();

    println!("🗺️ Siteatlas Headless Viewer");
    println!("============================");

    let mut viewer = SiteViewer::new(ViewerOptions::default())?;
    println!("✅ Viewer created:");
    println!("   Zoom: {}", viewer.map().viewport().zoom);
    println!("   Layers: {:?}", viewer.map().list_layers());

    // Feed the bundled document instead of fetching over HTTP
    viewer.feed_sites(SiteCollection::from_str(SAMPLE_SITES)?);
    viewer.poll_sites();
    println!(
        "✅ Loaded {} sites into layer '{}'",
        viewer.sites().map(|s| s.len()).unwrap_or(0),
        SITES_LAYER_ID
    );

    println!("\n🎯 Toggling things:");

    viewer.toggle_panel(PanelSide::Left);
    println!(
        "   Left panel visible: {}",
        viewer.panel(PanelSide::Left).is_visible()
    );

    match viewer.toggle_detail_overlay(1) {
        Some(true) => println!("   Detail overlay for site 1 is now shown"),
        Some(false) => println!("   Detail overlay for site 1 is now hidden"),
        None => println!("   Site 1 has no detail overlay"),
    }
    println!("   Layers: {:?}", viewer.map().list_layers());

    viewer.focus_site(10.25, 20.25);
    let viewport = viewer.map().viewport();
    println!(
        "   Focused site 1 - center {:.4}, {:.4} at zoom {:.1}",
        viewport.center.lat, viewport.center.lng, viewport.zoom
    );

    viewer.toggle_detail_overlay(1);
    println!("   Overlay off again, layers: {:?}", viewer.map().list_layers());

    println!("\n⚡ Map events this session:");
    for event in viewer.map_mut().process_events() {
        println!("   {:?}", event);
    }

    println!("\n✅ Headless viewer example completed successfully!");
    Ok(())
}
