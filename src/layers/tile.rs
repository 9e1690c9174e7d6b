use crate::{
    core::geo::TileCoord,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// Anything that can produce a tile URL for a given coordinate
pub trait TileSource: Send + Sync {
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source that fills a `{z}/{x}/{y}` URL template
pub struct TemplateTileSource {
    template: String,
}

impl TemplateTileSource {
    pub fn new(template: String) -> Self {
        Self { template }
    }
}

impl TileSource for TemplateTileSource {
    fn url(&self, coord: TileCoord) -> String {
        self.template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

/// The base tile layer, addressed through a URL template and carrying
/// the attribution line shown for it
pub struct TileLayer {
    properties: LayerProperties,
    source: Box<dyn TileSource>,
    max_zoom: f64,
    no_wrap: bool,
    attribution: Option<String>,
}

impl TileLayer {
    pub fn new(id: String, name: String, source: Box<dyn TileSource>) -> Self {
        let properties = LayerProperties::new(id, name, LayerType::Tile);
        Self {
            properties,
            source,
            max_zoom: 18.0,
            no_wrap: false,
            attribution: None,
        }
    }

    pub fn templated(id: String, name: String, template: String) -> Self {
        Self::new(id, name, Box::new(TemplateTileSource::new(template)))
    }

    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn with_attribution(mut self, attribution: String) -> Self {
        self.attribution = Some(attribution);
        self
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// URL for a tile coordinate, or `None` when the coordinate lies
    /// outside the layer (beyond `max_zoom`, or out of range with
    /// `no_wrap` set). Without `no_wrap` the x axis wraps around.
    pub fn tile_url(&self, coord: TileCoord) -> Option<String> {
        if f64::from(coord.z) > self.max_zoom {
            return None;
        }

        let span = 2_u32.pow(coord.z as u32);
        if coord.y >= span {
            return None;
        }

        let coord = if coord.x < span {
            coord
        } else if self.no_wrap {
            return None;
        } else {
            TileCoord::new(coord.x % span, coord.y, coord.z)
        };

        Some(self.source.url(coord))
    }
}

impl LayerTrait for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "max_zoom": self.max_zoom,
            "no_wrap": self.no_wrap,
            "attribution": self.attribution,
        })
    }
}
