use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub text: Color32,
    pub heading: Color32,
    /// Translucent boxes behind the heading and the chart
    pub overlay: Color32,
    /// Shown when the background image is unavailable
    pub fallback_background: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub heading_size: f32,
    pub overlay_corner_radius: f32,
    pub overlay_padding: i8,
    /// Chart box size relative to the window
    pub chart_width_pct: f32,
    pub chart_height_pct: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        text: Color32::WHITE,
        heading: Color32::YELLOW,
        overlay: Color32::from_black_alpha(128),
        fallback_background: Color32::BLACK,
    },
    heading_size: 32.0,
    overlay_corner_radius: 10.0,
    overlay_padding: 20,
    chart_width_pct: 0.9,
    chart_height_pct: 0.7,
};
