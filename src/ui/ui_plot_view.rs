use eframe::egui::{self, Vec2};
use egui_plot::{AxisHints, HPlacement, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Series;
use crate::models::ChartFrame;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils::format_axis_date;

use crate::ui::plot_layers::{HighlightLayer, LayerContext, LineLayer, MarkerLayer, PlotLayer};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Holds the last successfully built chart frame and draws it.
///
/// A frame that fails to build leaves the previous one on screen; the next
/// refresh simply tries again.
#[derive(Default)]
pub struct PlotView {
    cache: Option<ChartFrame>,
    cache_hits: usize,
    cache_misses: usize,
    failed_builds: usize,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses
    }

    pub fn failed_builds(&self) -> usize {
        self.failed_builds
    }

    pub fn has_frame(&self) -> bool {
        self.cache.is_some()
    }

    pub fn frame(&self) -> Option<&ChartFrame> {
        self.cache.as_ref()
    }

    /// Brings the cached frame up to `frame_index`. Returns `false` when the
    /// build failed and the previous frame was kept.
    pub fn refresh(&mut self, series: &Series, frame_index: usize) -> bool {
        if self
            .cache
            .as_ref()
            .is_some_and(|frame| frame.frame_index == frame_index)
        {
            self.cache_hits += 1;
            return true;
        }

        match ChartFrame::build(series, frame_index) {
            Ok(frame) => {
                self.cache_misses += 1;
                self.cache = Some(frame);

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_plot_cache_stats {
                    log::debug!(
                        "[plot] built frame {} (hits {}, misses {})",
                        frame_index,
                        self.cache_hits,
                        self.cache_misses
                    );
                }
                true
            }
            Err(e) => {
                self.failed_builds += 1;
                log::warn!("Chart not updated for frame {}: {}", frame_index, e);
                false
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, size: Vec2) {
        let empty = ChartFrame::empty();
        let frame = self.cache.as_ref().unwrap_or(&empty);

        // egui_plot fills its background with the extreme background colour
        ui.visuals_mut().extreme_bg_color = PLOT_CONFIG.plot_background;

        Plot::new("wacc_plot")
            .width(size.x)
            .height(size.y)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress the hover coordinate readout
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                if let Some(bounds) = frame.bounds {
                    plot_ui.set_plot_bounds_x(bounds.x.0..=bounds.x.1);
                    plot_ui.set_plot_bounds_y(bounds.y.0..=bounds.y.1);
                }

                let ctx = LayerContext { frame };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(LineLayer),
                    Box::new(MarkerLayer),
                    Box::new(HighlightLayer),
                ];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| format_axis_date(grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2015, 12, 31).unwrap();
        Series::from_points(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Point::new(start + chrono::Days::new(i as u64 * 91), *v))
                .collect(),
        )
    }

    #[test]
    fn same_frame_is_served_from_cache() {
        let series = series(&[1.0, 2.0]);
        let mut view = PlotView::new();

        assert!(view.refresh(&series, 1));
        assert!(view.refresh(&series, 1));
        assert_eq!(view.cache_misses(), 1);
        assert_eq!(view.cache_hits(), 1);
        assert_eq!(view.frame().map(|f| f.frame_index), Some(1));
    }

    #[test]
    fn failed_build_keeps_previous_frame() {
        let series = series(&[1.0, f64::NAN, 3.0]);
        let mut view = PlotView::new();

        assert!(view.refresh(&series, 1));
        let before = view.frame().cloned();

        assert!(!view.refresh(&series, 2));
        assert_eq!(view.frame().cloned(), before);
        assert_eq!(view.failed_builds(), 1);

        // Reset back to the start still works
        assert!(view.refresh(&series, 0));
        assert!(view.frame().is_some_and(ChartFrame::is_empty));
    }

    #[test]
    fn starts_without_a_frame() {
        let view = PlotView::new();
        assert!(!view.has_frame());
    }
}
