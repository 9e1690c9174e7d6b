//! The map view controller
//!
//! Owns the map, the viewer configuration, the loaded site registry and
//! the per-site overlay registry, plus the visibility state of the two
//! side panels. Everything the UI surface calls goes through here.

pub mod controller;
pub mod panels;

pub use controller::{SiteViewer, SITES_LAYER_ID};
pub use panels::{ControlPosition, PanelButton, PanelSide, PanelState};
