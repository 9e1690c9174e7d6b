use crate::{
    core::{config::ViewerOptions, geo::LatLngBounds, map::Map},
    data::{icons::icon_for, loader::SiteLoader, sites::SiteCollection},
    layers::{
        cluster::{ClusterGroup, ClusterOptions},
        image::ImageOverlay,
        marker::Marker,
        tile::TileLayer,
    },
    prelude::HashMap,
    viewer::panels::{ControlPosition, PanelButton, PanelSide, PanelState},
    Result,
};

#[cfg(feature = "debug")]
use log::{info, warn};

/// Layer id of the clustered site marker group
pub const SITES_LAYER_ID: &str = "sites";

const BASE_LAYER_ID: &str = "base";

/// The viewer: map, configuration, site registry, overlay registry and
/// panel state. Initialization order is fixed: construct, attach the
/// base layer, fetch, populate.
pub struct SiteViewer {
    options: ViewerOptions,
    map: Map,
    loader: SiteLoader,
    sites: Option<SiteCollection>,
    /// Per-site detail overlays: the owned layer id while shown, an
    /// explicit `None` once toggled off again
    active_site_overlays: HashMap<i64, Option<String>>,
    left_panel: PanelState,
    right_panel: PanelState,
    buttons: Vec<PanelButton>,
    /// Named overlay layers offered for visibility toggling
    toggleable_overlays: Vec<(String, String)>,
}

impl SiteViewer {
    /// Builds the map at the configured default view and attaches the
    /// templated base tile layer. Sites are not loaded yet; call
    /// `start_loading` (or `feed_sites`) next, then drain `poll_sites`
    /// from the event loop.
    pub fn new(options: ViewerOptions) -> Result<Self> {
        let mut map = Map::new(
            options.initial_center,
            options.initial_zoom,
            options.view_size,
        );
        map.viewport_mut().set_zoom_limits(0.0, options.max_zoom);

        let base = TileLayer::templated(
            BASE_LAYER_ID.to_string(),
            "Base Tiles".to_string(),
            options.tile_template.clone(),
        )
        .with_max_zoom(options.max_zoom)
        .with_no_wrap(options.no_wrap)
        .with_attribution(options.attribution());
        map.add_layer(Box::new(base))?;

        let buttons = vec![
            PanelButton {
                icon: "fa-bars",
                tooltip: "Show list of sites",
                position: ControlPosition::TopLeft,
                panel: PanelSide::Left,
            },
            PanelButton {
                icon: "fa-question-circle",
                tooltip: "Show legend for the current overlay",
                position: ControlPosition::BottomRight,
                panel: PanelSide::Right,
            },
        ];

        Ok(Self {
            options,
            map,
            loader: SiteLoader::new(),
            sites: None,
            active_site_overlays: HashMap::default(),
            left_panel: PanelState::new(PanelSide::Left, "Sites"),
            right_panel: PanelState::new(PanelSide::Right, "Legend"),
            buttons,
            toggleable_overlays: Vec::new(),
        })
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn buttons(&self) -> &[PanelButton] {
        &self.buttons
    }

    /// Overlay layers registered for visibility toggling, as
    /// `(layer_id, display_name)` pairs
    pub fn toggleable_overlays(&self) -> &[(String, String)] {
        &self.toggleable_overlays
    }

    /// Issues the single startup fetch of the site document. Safe to call
    /// again; only the first call spawns a request.
    #[cfg(feature = "tokio-runtime")]
    pub fn start_loading(&mut self) -> bool {
        self.loader.start(self.options.sites_endpoint.clone())
    }

    /// Hands a site document to the loader without going through HTTP.
    /// Counts as the session's one fetch.
    pub fn feed_sites(&mut self, sites: SiteCollection) -> bool {
        self.loader.complete_with(Ok(sites))
    }

    /// Drains the loader. Returns `true` when the site registry got
    /// populated by this call. A failed fetch leaves the map tile-only
    /// and never surfaces an error to the view.
    pub fn poll_sites(&mut self) -> bool {
        match self.loader.try_take() {
            Some(Ok(sites)) => {
                self.on_sites_loaded(sites);
                true
            }
            Some(Err(_e)) => {
                #[cfg(feature = "debug")]
                warn!("Site list unavailable, map stays tile-only: {}", _e);
                false
            }
            None => false,
        }
    }

    /// Populates the site registry and builds the clustered marker layer.
    /// Runs at most once per session; later deliveries are ignored.
    pub fn on_sites_loaded(&mut self, sites: SiteCollection) {
        if self.sites.is_some() {
            return;
        }

        let mut clusters = ClusterGroup::new(
            SITES_LAYER_ID.to_string(),
            "Sites".to_string(),
            ClusterOptions {
                max_cluster_radius: self.options.cluster_radius,
            },
        );

        for site in sites.iter() {
            let icon = icon_for(&site.properties.img);
            let mut marker = Marker::new(
                format!("site-{}", site.id()),
                site.position(),
                icon.image_url,
            );
            if let Some(content) = &site.properties.popup_content {
                marker = marker.with_popup(content.clone());
            }
            clusters.add_marker(marker);
        }

        #[cfg(feature = "debug")]
        info!("Loaded {} sites into the marker layer", clusters.len());

        if self.map.add_layer(Box::new(clusters)).is_ok() {
            self.toggleable_overlays
                .push((SITES_LAYER_ID.to_string(), "Sites".to_string()));
        }
        self.sites = Some(sites);
    }

    pub fn sites(&self) -> Option<&SiteCollection> {
        self.sites.as_ref()
    }

    pub fn panel(&self, side: PanelSide) -> &PanelState {
        match side {
            PanelSide::Left => &self.left_panel,
            PanelSide::Right => &self.right_panel,
        }
    }

    /// Flips the named panel and returns its new visibility
    pub fn toggle_panel(&mut self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left_panel.toggle(),
            PanelSide::Right => self.right_panel.toggle(),
        }
    }

    /// Flips a registered overlay layer's visibility on the map
    pub fn toggle_overlay_layer(&mut self, layer_id: &str) -> Option<bool> {
        self.map.toggle_layer(layer_id)
    }

    /// Toggles the detail-map overlay for a site.
    ///
    /// Hidden to shown: the site is looked up in the registry (first id
    /// match wins) and, when it carries detail bounds, an image overlay
    /// anchored to them is added to the map and recorded as owned. Shown
    /// to hidden: the overlay is removed and the registry entry cleared
    /// to an explicit empty marker rather than deleted.
    ///
    /// Returns `Some(true)` when the overlay is now shown, `Some(false)`
    /// when it is now hidden, and `None` for the ignorable cases: sites
    /// not loaded yet, unknown id, or a site without detail bounds.
    pub fn toggle_detail_overlay(&mut self, site_id: i64) -> Option<bool> {
        if let Some(Some(layer_id)) = self.active_site_overlays.get(&site_id).cloned() {
            let _ = self.map.remove_layer(&layer_id);
            self.active_site_overlays.insert(site_id, None);
            return Some(false);
        }

        let site = self.sites.as_ref()?.find_by_id(site_id)?;
        let bounds = site.properties.detail_bounds()?;

        let layer_id = format!("site-overlay-{}", site_id);
        let overlay = ImageOverlay::new(
            layer_id.clone(),
            self.options.site_image_url(site_id),
            bounds,
        );
        if self.map.add_layer(Box::new(overlay)).is_err() {
            return None;
        }

        self.active_site_overlays.insert(site_id, Some(layer_id));
        Some(true)
    }

    pub fn is_overlay_shown(&self, site_id: i64) -> bool {
        matches!(self.active_site_overlays.get(&site_id), Some(Some(_)))
    }

    /// Raw overlay registry, for inspection
    pub fn overlay_registry(&self) -> &HashMap<i64, Option<String>> {
        &self.active_site_overlays
    }

    /// Bounding box a site button recenters to: a small box opening
    /// north-east from the site coordinates
    pub fn focus_bounds(lat: f64, lon: f64) -> LatLngBounds {
        LatLngBounds::from_coords(lat, lon, lat + 0.01, lon + 0.01)
    }

    /// Recenters and zooms the map to the box around a site's coordinates
    pub fn focus_site(&mut self, lat: f64, lon: f64) {
        let bounds = Self::focus_bounds(lat, lon);
        self.map.fit_bounds(&bounds);
    }

    /// Recenter variant taking the raw attribute strings a site button
    /// carries. Malformed values are ignored.
    pub fn focus_site_attrs(&mut self, lat: &str, lon: &str) {
        match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
            (Ok(lat), Ok(lon)) => self.focus_site(lat, lon),
            _ => {
                #[cfg(feature = "debug")]
                warn!("Ignoring site button with bad coordinates: {:?}, {:?}", lat, lon);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn sites_doc() -> SiteCollection {
        SiteCollection::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "id": 1,
                            "img": "/assets/icons/town.png",
                            "popupContent": "<b>Oakhold</b>",
                            "map_bounds": [[10.0, 20.0], [10.5, 20.5]]
                        },
                        "geometry": { "type": "Point", "coordinates": [20.25, 10.25] }
                    },
                    {
                        "type": "Feature",
                        "properties": {
                            "id": 2,
                            "img": "/assets/icons/cave.png"
                        },
                        "geometry": { "type": "Point", "coordinates": [-4.0, 61.0] }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn loaded_viewer() -> SiteViewer {
        let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        viewer.on_sites_loaded(sites_doc());
        viewer
    }

    #[test]
    fn test_initialize_attaches_base_layer() {
        let viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        assert!(viewer.map().has_layer("base"));
        assert!(viewer.sites().is_none());
        assert_eq!(viewer.map().viewport().zoom, 3.0);
    }

    #[test]
    fn test_sites_loaded_builds_marker_layer() {
        let viewer = loaded_viewer();
        assert!(viewer.map().has_layer(SITES_LAYER_ID));
        assert_eq!(viewer.sites().unwrap().len(), 2);
        assert_eq!(
            viewer.toggleable_overlays(),
            &[(SITES_LAYER_ID.to_string(), "Sites".to_string())]
        );
    }

    #[test]
    fn test_sites_loaded_runs_once() {
        let mut viewer = loaded_viewer();
        let mut second = sites_doc();
        second.features.truncate(1);
        viewer.on_sites_loaded(second);
        assert_eq!(viewer.sites().unwrap().len(), 2);
    }

    #[test]
    fn test_overlay_round_trip() {
        let mut viewer = loaded_viewer();

        assert_eq!(viewer.toggle_detail_overlay(1), Some(true));
        assert!(viewer.is_overlay_shown(1));
        assert!(viewer.map().has_layer("site-overlay-1"));

        assert_eq!(viewer.toggle_detail_overlay(1), Some(false));
        assert!(!viewer.is_overlay_shown(1));
        assert!(!viewer.map().has_layer("site-overlay-1"));
        // Cleared, not removed
        assert_eq!(viewer.overlay_registry().get(&1), Some(&None));
    }

    #[test]
    fn test_overlay_unknown_site_is_noop() {
        let mut viewer = loaded_viewer();
        assert_eq!(viewer.toggle_detail_overlay(999), None);
        assert!(viewer.overlay_registry().is_empty());
    }

    #[test]
    fn test_overlay_without_bounds_is_noop() {
        let mut viewer = loaded_viewer();
        assert_eq!(viewer.toggle_detail_overlay(2), None);
        assert!(viewer.overlay_registry().is_empty());
    }

    #[test]
    fn test_overlay_before_load_is_noop() {
        let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        assert_eq!(viewer.toggle_detail_overlay(1), None);
        assert!(viewer.overlay_registry().is_empty());
    }

    #[test]
    fn test_focus_bounds_shape() {
        let bounds = SiteViewer::focus_bounds(10.0, 20.0);
        assert_eq!(bounds.south_west, LatLng::new(10.0, 20.0));
        assert_eq!(bounds.north_east, LatLng::new(10.01, 20.01));
    }

    #[test]
    fn test_focus_site_attrs_ignores_garbage() {
        let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        let before = viewer.map().viewport().clone();
        viewer.focus_site_attrs("10.0", "not-a-number");
        assert_eq!(viewer.map().viewport(), &before);

        viewer.focus_site_attrs(" 10.0 ", " 20.0 ");
        assert!((viewer.map().viewport().center.lat - 10.005).abs() < 1e-9);
    }

    #[test]
    fn test_buttons_describe_both_panels() {
        let viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        let buttons = viewer.buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].panel, PanelSide::Left);
        assert_eq!(buttons[0].icon, "fa-bars");
        assert_eq!(buttons[1].panel, PanelSide::Right);
        assert_eq!(buttons[1].position, ControlPosition::BottomRight);
    }

    #[test]
    fn test_panel_toggles() {
        let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        assert!(viewer.toggle_panel(PanelSide::Left));
        assert!(!viewer.toggle_panel(PanelSide::Left));
        assert!(!viewer.panel(PanelSide::Left).is_visible());
        assert!(!viewer.panel(PanelSide::Right).is_visible());
    }

    #[test]
    fn test_feed_and_poll_sites() {
        let mut viewer = SiteViewer::new(ViewerOptions::default()).unwrap();
        assert!(viewer.feed_sites(sites_doc()));
        assert!(viewer.poll_sites());
        assert!(viewer.sites().is_some());
        // Drained; nothing further arrives
        assert!(!viewer.poll_sites());
    }
}
