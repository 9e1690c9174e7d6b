use crate::viewer::panels::{ControlPosition, PanelButton};
use egui::{Align2, Color32, FontId, Rect, Response, Sense, Ui, Vec2};

/// Glyph drawn for an icon reference
fn glyph_for(icon: &str) -> &'static str {
    match icon {
        "fa-bars" => "☰",
        "fa-question-circle" => "?",
        _ => "·",
    }
}

/// A corner-pinned map control button
pub struct ViewerButton {
    label: String,
    tooltip: String,
    position: ControlPosition,
    size: Vec2,
    margin: f32,
}

impl ViewerButton {
    pub fn new(
        label: impl Into<String>,
        tooltip: impl Into<String>,
        position: ControlPosition,
    ) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
            position,
            size: Vec2::new(30.0, 30.0),
            margin: 10.0,
        }
    }

    pub fn for_panel_button(button: &PanelButton) -> Self {
        Self::new(glyph_for(button.icon), button.tooltip, button.position)
    }

    fn anchor_rect(&self, container: Rect) -> Rect {
        let pos = match self.position {
            ControlPosition::TopLeft => container.min + Vec2::new(self.margin, self.margin),
            ControlPosition::BottomRight => {
                container.max - Vec2::new(self.margin + self.size.x, self.margin + self.size.y)
            }
        };
        Rect::from_min_size(pos, self.size)
    }

    pub fn render(&self, ui: &mut Ui, container: Rect) -> Response {
        let rect = self.anchor_rect(container);
        let response = ui.allocate_rect(rect, Sense::click());

        let bg_color = if response.hovered() {
            Color32::from_gray(230)
        } else {
            Color32::WHITE
        };

        ui.painter().rect_filled(rect, 4.0, bg_color);
        ui.painter()
            .rect_stroke(rect, 4.0, (1.0, Color32::GRAY));
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            &self.label,
            FontId::default(),
            Color32::BLACK,
        );

        response.on_hover_text(&self.tooltip)
    }
}

/// Attribution line pinned to the bottom-left corner
pub struct AttributionLine {
    text: String,
}

impl AttributionLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn render(&self, ui: &mut Ui, container: Rect) {
        let pos = container.min + Vec2::new(6.0, container.height() - 6.0);
        ui.painter().text(
            pos,
            Align2::LEFT_BOTTOM,
            &self.text,
            FontId::proportional(10.0),
            Color32::DARK_GRAY,
        );
    }
}
