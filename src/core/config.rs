//! Viewer configuration
//!
//! One configuration structure replaces the deployment-templated and the
//! static flavor of the original viewer setup: every templated value is a
//! field here, and `Default` carries the static defaults.

use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Initial map center
    pub initial_center: LatLng,
    /// Initial zoom level
    pub initial_zoom: f64,
    /// Pixel size of the map canvas
    pub view_size: Point,
    /// Maximum zoom level of the base tile layer
    pub max_zoom: f64,
    /// Do not repeat the world horizontally
    pub no_wrap: bool,
    /// Cluster radius in pixels for the site marker layer
    pub cluster_radius: f64,
    /// Attribution line; `{version}` is replaced with `version`
    pub attribution_template: String,
    /// Version string substituted into the attribution
    pub version: String,
    /// URL of the site-list document fetched once at startup
    pub sites_endpoint: String,
    /// Base tile URL template with `{z}`, `{x}` and `{y}` placeholders
    pub tile_template: String,
    /// Detail overlay image URL template with an `{id}` placeholder
    pub site_image_template: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            initial_center: LatLng::new(0.0, 0.0),
            initial_zoom: 3.0,
            view_size: Point::new(1024.0, 768.0),
            max_zoom: 7.0,
            no_wrap: true,
            cluster_radius: 80.0,
            attribution_template: "<a href='https://www.siteatlas.org/'>SiteAtlas {version}</a>"
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            sites_endpoint: "/js/sites.json".to_string(),
            tile_template: "/tiles/{z}/{x}/{y}.png".to_string(),
            site_image_template: "/sites/{id}.png".to_string(),
        }
    }
}

impl ViewerOptions {
    /// Attribution text with the version substituted in
    pub fn attribution(&self) -> String {
        self.attribution_template.replace("{version}", &self.version)
    }

    /// Overlay image URL for a site id
    pub fn site_image_url(&self, site_id: i64) -> String {
        self.site_image_template
            .replace("{id}", &site_id.to_string())
    }
}
