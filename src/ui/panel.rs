use crate::viewer::panels::{PanelSide, PanelState};
use egui::{Context, Ui};

/// Draws one collapsible side panel from its viewer-held state
pub struct SidePanelView {
    id: String,
    width: f32,
}

impl SidePanelView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: 260.0,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Shows the panel when its state says visible; the closure fills the
    /// panel body below the title
    pub fn show(
        &self,
        ctx: &Context,
        state: &PanelState,
        add_contents: impl FnOnce(&mut Ui),
    ) {
        let panel = match state.side() {
            PanelSide::Left => egui::SidePanel::left(self.id.clone()),
            PanelSide::Right => egui::SidePanel::right(self.id.clone()),
        };

        panel
            .resizable(false)
            .default_width(self.width)
            .show_animated(ctx, state.is_visible(), |ui| {
                ui.heading(state.title());
                ui.separator();
                add_contents(ui);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let state = PanelState::new(PanelSide::Left, "Sites");
        let view = SidePanelView::new("sidebar-left");

        let ctx = Context::default();
        let mut body_ran = false;
        ctx.run(egui::RawInput::default(), |ctx| {
            view.show(ctx, &state, |_ui| {
                body_ran = true;
            });
        });
        assert!(!body_ran);
    }

    #[test]
    fn test_visible_panel_draws_body() {
        let mut state = PanelState::new(PanelSide::Right, "Legend");
        state.toggle();
        let view = SidePanelView::new("sidebar-right").with_width(200.0);

        let ctx = Context::default();
        let mut body_ran = false;
        ctx.run(egui::RawInput::default(), |ctx| {
            view.show(ctx, &state, |_ui| {
                body_ran = true;
            });
        });
        assert!(body_ran);
    }
}
