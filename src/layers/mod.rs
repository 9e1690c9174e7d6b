pub mod base;
pub mod cluster;
pub mod image;
pub mod manager;
pub mod marker;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use cluster::{ClusterGroup, ClusterOptions};
pub use image::ImageOverlay;
pub use manager::LayerManager;
pub use marker::Marker;
pub use tile::{TemplateTileSource, TileLayer, TileSource};
