use eframe::egui::{Align2, RichText};
use egui_plot::{Line, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points, Text};

use crate::config::plot::PLOT_CONFIG;
use crate::models::ChartFrame;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub frame: &'a ChartFrame,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. LINE LAYER (smoothed WACC curve)
// ============================================================================
pub struct LineLayer;

impl PlotLayer for LineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.frame.line.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(UI_TEXT.series_name, PlotPoints::new(ctx.frame.line.clone()))
                .color(PLOT_CONFIG.line_color)
                .width(PLOT_CONFIG.line_width),
        );
    }
}

// ============================================================================
// 2. MARKER LAYER (one dot per data point)
// ============================================================================
pub struct MarkerLayer;

impl PlotLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.frame.markers.is_empty() {
            return;
        }
        plot_ui.points(
            Points::new(UI_TEXT.series_name, PlotPoints::new(ctx.frame.markers.clone()))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.marker_radius)
                .color(PLOT_CONFIG.marker_color),
        );
    }
}

// ============================================================================
// 3. HIGHLIGHT LAYER (latest point + value label)
// ============================================================================
pub struct HighlightLayer;

impl PlotLayer for HighlightLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(highlight) = &ctx.frame.highlight else {
            return;
        };
        let label = UI_TEXT.highlight_name;

        // Outer ring (border)
        plot_ui.points(
            Points::new(label, PlotPoints::new(vec![highlight.position]))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.highlight_radius + PLOT_CONFIG.highlight_outline_width)
                .color(PLOT_CONFIG.highlight_outline_color),
        );

        // Inner disc
        plot_ui.points(
            Points::new(label, PlotPoints::new(vec![highlight.position]))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.highlight_radius)
                .color(PLOT_CONFIG.highlight_color),
        );

        let [x, y] = highlight.label_position;
        plot_ui.text(
            Text::new(
                label,
                PlotPoint::new(x, y),
                RichText::new(&highlight.label)
                    .size(PLOT_CONFIG.highlight_label_size)
                    .color(PLOT_CONFIG.highlight_label_color),
            )
            .anchor(Align2::CENTER_TOP),
        );
    }
}
