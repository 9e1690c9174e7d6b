/// The two collapsible side panels of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSide {
    Left,
    Right,
}

/// Visibility state of one side panel. Panels start hidden and every
/// toggle flips the state, so two toggles restore the original view.
#[derive(Debug, Clone)]
pub struct PanelState {
    side: PanelSide,
    title: String,
    visible: bool,
}

impl PanelState {
    pub fn new(side: PanelSide, title: impl Into<String>) -> Self {
        Self {
            side,
            title: title.into(),
            visible: false,
        }
    }

    pub fn side(&self) -> PanelSide {
        self.side
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and returns the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

/// Screen corner a control button is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    BottomRight,
}

/// A panel toggle button: icon name, hover tooltip and screen position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub position: ControlPosition,
    pub panel: PanelSide,
}
