//! egui rendering for the viewer chrome
//!
//! All state lives in the `viewer` module; this module only draws it.
//! Enabled with the `egui` feature.

pub mod controls;
pub mod panel;

pub use controls::{AttributionLine, ViewerButton};
pub use panel::SidePanelView;
