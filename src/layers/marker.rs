use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// A point marker with an icon reference and an optional popup
pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    icon: String,
    popup_content: Option<String>,
}

impl Marker {
    pub fn new(id: String, position: LatLng, icon: String) -> Self {
        let properties = LayerProperties::new(id, "Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            icon,
            popup_content: None,
        }
    }

    pub fn with_popup(mut self, content: String) -> Self {
        self.popup_content = Some(content);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn popup_content(&self) -> Option<&str> {
        self.popup_content.as_deref()
    }

    pub fn has_popup(&self) -> bool {
        self.popup_content.is_some()
    }
}

impl LayerTrait for Marker {
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
        Some(LatLngBounds::new(self.position, self.position))
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": { "lat": self.position.lat, "lng": self.position.lng },
            "icon": self.icon,
            "popup": self.popup_content,
        })
    }
}
