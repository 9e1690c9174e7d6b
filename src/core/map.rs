use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    layers::{base::LayerTrait, manager::LayerManager},
    Result,
};
use std::collections::VecDeque;

/// Events emitted by map mutations, drained by the embedding application
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    ViewChanged { center: LatLng, zoom: f64 },
    LayerAdded { layer_id: String },
    LayerRemoved { layer_id: String },
}

/// The map itself: a viewport plus the registry of layers attached to it.
///
/// Rendering is delegated to whatever embeds the map; this type only keeps
/// the state that handlers mutate in response to user or network events.
pub struct Map {
    pub viewport: Viewport,
    layer_manager: LayerManager,
    events: VecDeque<MapEvent>,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            viewport: Viewport::new(center, zoom, size),
            layer_manager: LayerManager::new(),
            events: VecDeque::new(),
        }
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        let old_center = self.viewport.center;
        let old_zoom = self.viewport.zoom;

        self.viewport.set_view(center, zoom);

        if self.viewport.center != old_center || self.viewport.zoom != old_zoom {
            self.events.push_back(MapEvent::ViewChanged {
                center: self.viewport.center,
                zoom: self.viewport.zoom,
            });
        }
    }

    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let old_center = self.viewport.center;
        let old_zoom = self.viewport.zoom;

        self.viewport.fit_bounds(bounds);

        if self.viewport.center != old_center || self.viewport.zoom != old_zoom {
            self.events.push_back(MapEvent::ViewChanged {
                center: self.viewport.center,
                zoom: self.viewport.zoom,
            });
        }
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        self.layer_manager.add_layer(layer)?;
        self.events.push_back(MapEvent::LayerAdded { layer_id });
        Ok(())
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Result<()> {
        if self.layer_manager.remove_layer(layer_id)?.is_some() {
            self.events.push_back(MapEvent::LayerRemoved {
                layer_id: layer_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn has_layer(&self, layer_id: &str) -> bool {
        self.layer_manager.get_layer(layer_id).is_some()
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layer_manager.get_layer(layer_id)
    }

    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layer_manager.with_layer_mut(layer_id, f)
    }

    /// Flips a layer's visibility. Returns the new visibility, or `None`
    /// if no such layer is attached.
    pub fn toggle_layer(&mut self, layer_id: &str) -> Option<bool> {
        self.layer_manager.with_layer_mut(layer_id, |layer| {
            let visible = !layer.is_visible();
            layer.set_visible(visible);
            visible
        })
    }

    pub fn set_layer_visible(&mut self, layer_id: &str, visible: bool) -> bool {
        self.layer_manager
            .with_layer_mut(layer_id, |layer| layer.set_visible(visible))
            .is_some()
    }

    pub fn list_layers(&self) -> Vec<String> {
        self.layer_manager.list_layers()
    }

    pub fn layer_count(&self) -> usize {
        self.layer_manager.len()
    }

    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.events.drain(..).collect()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }
}
