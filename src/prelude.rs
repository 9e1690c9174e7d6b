//! Prelude module for common siteatlas types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use siteatlas::prelude::*;`

pub use crate::core::{
    config::ViewerOptions,
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    map::{Map, MapEvent},
    viewport::Viewport,
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    cluster::{ClusterGroup, ClusterOptions},
    image::ImageOverlay,
    manager::LayerManager,
    marker::Marker,
    tile::{TemplateTileSource, TileLayer, TileSource},
};

pub use crate::data::{
    icons::icon_for,
    loader::SiteLoader,
    sites::{SiteCollection, SiteFeature, SiteGeometry, SiteProperties},
};

pub use crate::viewer::{PanelSide, PanelState, SiteViewer};

#[cfg(feature = "egui")]
pub use crate::ui::{controls::ViewerButton, panel::SidePanelView};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
