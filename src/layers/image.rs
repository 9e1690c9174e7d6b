use crate::{
    core::geo::LatLngBounds,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// An image anchored to a fixed geographic bounding box
pub struct ImageOverlay {
    properties: LayerProperties,
    url: String,
    bounds: LatLngBounds,
}

impl ImageOverlay {
    pub fn new(id: String, url: String, bounds: LatLngBounds) -> Self {
        let properties = LayerProperties::new(id, "Image Overlay".to_string(), LayerType::Image);
        Self {
            properties,
            url,
            bounds,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LayerTrait for ImageOverlay {
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

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(self.bounds.clone())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url,
            "bounds": {
                "south": self.bounds.south_west.lat,
                "west": self.bounds.south_west.lng,
                "north": self.bounds.north_east.lat,
                "east": self.bounds.north_east.lng,
            }
        })
    }
}
