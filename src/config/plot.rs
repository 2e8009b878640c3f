//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Main WACC line
    pub line_color: Color32,
    pub line_width: f32,
    /// Interpolated points inserted between two data points of the smoothed line
    pub spline_samples_per_segment: usize,
    /// Per-point markers along the line
    pub marker_color: Color32,
    pub marker_radius: f32,
    /// Highlighted latest point (inner disc + outer ring)
    pub highlight_color: Color32,
    pub highlight_radius: f32,
    pub highlight_outline_color: Color32,
    pub highlight_outline_width: f32,
    /// Value label under the highlighted point
    pub highlight_label_color: Color32,
    pub highlight_label_size: f32,
    /// Fraction of the y span the label sits below its point
    pub highlight_label_offset_pct: f64,
    /// Translucent fill behind the plot area
    pub plot_background: Color32,
    /// Padding added around the visible data, as a fraction of its span
    pub bounds_padding_pct: f64,
    /// Padding used when the visible data has zero span (x in days, y in %)
    pub min_x_padding_days: f64,
    pub min_y_padding: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::WHITE,
    line_width: 3.0,
    spline_samples_per_segment: 8,
    marker_color: Color32::WHITE,
    marker_radius: 4.0,
    highlight_color: Color32::YELLOW,
    highlight_radius: 9.0,
    highlight_outline_color: Color32::RED,
    highlight_outline_width: 3.0,
    highlight_label_color: Color32::YELLOW,
    highlight_label_size: 20.0,
    highlight_label_offset_pct: 0.03,
    plot_background: Color32::from_black_alpha(51), // ~20% black
    bounds_padding_pct: 0.05,
    min_x_padding_days: 45.0,
    min_y_padding: 1.0,
};
