use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::Marker,
    },
    prelude::HashMap,
};

/// Configuration for the marker cluster layer
#[derive(Debug, Clone)]
pub struct ClusterOptions {
    /// Maximum distance between markers sharing a cluster, in world pixels
    pub max_cluster_radius: f64,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: 80.0,
        }
    }
}

/// One rendered aggregation of markers at a given zoom level.
/// Indices point into the group's marker list.
#[derive(Debug, Clone)]
pub struct MarkerCluster {
    pub center: LatLng,
    pub marker_indices: Vec<usize>,
}

impl MarkerCluster {
    pub fn count(&self) -> usize {
        self.marker_indices.len()
    }

    pub fn is_single(&self) -> bool {
        self.marker_indices.len() == 1
    }
}

/// A marker layer that groups nearby markers into representative clusters.
///
/// Markers are kept in insertion order; clustering is recomputed per zoom
/// level from a pixel grid sized by `max_cluster_radius`.
pub struct ClusterGroup {
    properties: LayerProperties,
    options: ClusterOptions,
    markers: Vec<Marker>,
}

impl ClusterGroup {
    pub fn new(id: String, name: String, options: ClusterOptions) -> Self {
        let properties = LayerProperties::new(id, name, LayerType::Cluster);
        Self {
            properties,
            options,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    /// Groups markers into clusters for the given zoom level.
    ///
    /// Grid-based: markers falling into the same radius-sized world pixel
    /// cell share a cluster. Cluster order follows the first member's
    /// insertion order, and indices within a cluster stay ascending.
    pub fn clusters(&self, zoom: f64) -> Vec<MarkerCluster> {
        let grid_size = self.options.max_cluster_radius.max(1.0);

        let mut cells: HashMap<(i64, i64), Vec<usize>> = HashMap::default();
        let mut cell_order: Vec<(i64, i64)> = Vec::new();

        for (index, marker) in self.markers.iter().enumerate() {
            let px = marker.position().to_world_pixel(zoom);
            let cell = (
                (px.x / grid_size).floor() as i64,
                (px.y / grid_size).floor() as i64,
            );
            let entry = cells.entry(cell).or_default();
            if entry.is_empty() {
                cell_order.push(cell);
            }
            entry.push(index);
        }

        cell_order
            .into_iter()
            .filter_map(|cell| cells.remove(&cell))
            .map(|marker_indices| {
                let mut lat = 0.0;
                let mut lng = 0.0;
                for &index in &marker_indices {
                    let position = self.markers[index].position();
                    lat += position.lat;
                    lng += position.lng;
                }
                let count = marker_indices.len() as f64;
                MarkerCluster {
                    center: LatLng::new(lat / count, lng / count),
                    marker_indices,
                }
            })
            .collect()
    }
}

impl LayerTrait for ClusterGroup {
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
        let first = self.markers.first()?;
        let mut bounds = LatLngBounds::new(first.position(), first.position());
        for marker in &self.markers[1..] {
            bounds.extend(&marker.position());
        }
        Some(bounds)
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "max_cluster_radius": self.options.max_cluster_radius,
            "marker_count": self.markers.len(),
        })
    }
}
