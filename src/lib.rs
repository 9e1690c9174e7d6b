//! # Siteatlas
//!
//! A Rust-native viewer core for tiled world atlases, inspired by Leaflet.
//!
//! The crate bootstraps a map with a templated base tile layer, loads a
//! site-list document once at startup, renders the sites as a clustered
//! marker layer and toggles per-site detail overlays on request. Layer
//! state is headless; an optional `egui` feature draws panels and buttons.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
#[cfg(feature = "egui")]
pub mod ui;
pub mod viewer;

// Re-export public API
pub use crate::core::{
    config::ViewerOptions,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::Map,
    viewport::Viewport,
};

pub use crate::layers::{
    base::LayerTrait, cluster::ClusterGroup, image::ImageOverlay, marker::Marker, tile::TileLayer,
};

pub use crate::data::{
    loader::SiteLoader,
    sites::{SiteCollection, SiteFeature},
};

pub use crate::viewer::{PanelSide, SiteViewer};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
