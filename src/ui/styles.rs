use eframe::egui::{Frame, Margin, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders the dashboard title using the configured heading colour and size.
    fn label_title(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_title(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.heading_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }
}

/// Rounded translucent box used behind the title and the chart.
pub fn overlay_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.overlay)
        .corner_radius(UI_CONFIG.overlay_corner_radius)
        .inner_margin(Margin::same(UI_CONFIG.overlay_padding))
}
