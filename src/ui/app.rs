use std::sync::Arc;

use eframe::egui::{
    self, CentralPanel, ColorImage, Frame, TextureHandle, TextureOptions, vec2,
};

use crate::config::{ANIMATION, ASSETS, AnimationConfig};
use crate::data::BackgroundImage;
use crate::domain::Series;
use crate::engine::{AnimationState, Sequencer, Transition};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, overlay_frame};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::{cover_uv, setup_custom_visuals};
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The single page: background, title and the animated chart.
///
/// The app owns every piece of runtime state. The egui update loop is the
/// only caller, so nothing here needs locking.
pub struct WaccDashboardApp {
    sequencer: Sequencer,
    plot_view: PlotView,
    background: Option<TextureHandle>,
}

impl WaccDashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        series: Arc<Series>,
        background: Option<BackgroundImage>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let background = background.map(|image| {
            cc.egui_ctx.load_texture(
                "background",
                ColorImage::from_rgba_unmultiplied(image.size, &image.rgba),
                TextureOptions::LINEAR,
            )
        });

        Self::with_parts(series, ANIMATION, background, now())
    }

    fn with_parts(
        series: Arc<Series>,
        config: AnimationConfig,
        background: Option<TextureHandle>,
        started_at: AppInstant,
    ) -> Self {
        log::info!(
            "🚀 Replaying {} points every {:?}, holding {:?} at the end",
            series.len(),
            config.advance_interval,
            config.pause_duration
        );

        Self {
            sequencer: Sequencer::new(series, config, started_at),
            plot_view: PlotView::new(),
            background,
        }
    }

    pub fn animation_state(&self) -> AnimationState {
        self.sequencer.state()
    }

    /// Advances the replay to `now` and brings the chart up to the current frame.
    ///
    /// Refreshing is a cache hit unless the frame changed or the last build
    /// failed, in which case it is retried here.
    fn tick(&mut self, now: AppInstant) -> Vec<Transition> {
        let transitions = self.sequencer.poll(now);
        self.plot_view
            .refresh(self.sequencer.series(), self.sequencer.frame_index());
        transitions
    }

    fn paint_background(&self, ui: &egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        match &self.background {
            Some(texture) => {
                let size = texture.size();
                painter.rect_filled(rect, 0.0, UI_CONFIG.colors.fallback_background);
                painter.image(
                    texture.id(),
                    rect,
                    cover_uv(size, rect.size()),
                    egui::Color32::WHITE.gamma_multiply(ASSETS.background_opacity),
                );
            }
            None => {
                painter.rect_filled(rect, 0.0, UI_CONFIG.colors.fallback_background);
            }
        }
    }

    fn render_dashboard(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let chart_size = vec2(
            available.x * UI_CONFIG.chart_width_pct,
            available.y * UI_CONFIG.chart_height_pct,
        );

        ui.vertical_centered(|ui| {
            // Centre the column vertically; rough title height is enough
            let title_height = UI_CONFIG.heading_size + 2.0 * f32::from(UI_CONFIG.overlay_padding);
            let content_height = title_height + chart_size.y + 60.0;
            ui.add_space(((available.y - content_height) / 2.0).max(0.0));

            overlay_frame().show(ui, |ui| {
                ui.label_title(UI_TEXT.heading);
            });

            ui.add_space(20.0);

            overlay_frame().show(ui, |ui| {
                self.plot_view.show(ui, chart_size);
            });
        });
    }
}

impl eframe::App for WaccDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete after {} replay cycles.",
                self.sequencer.cycles_completed()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = now();
        self.tick(now);

        CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                self.paint_background(ui);
                self.render_dashboard(ui);
            });

        // Sleep until the armed timer is due instead of repainting continuously
        if let Some(wait) = self.sequencer.time_until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use chrono::NaiveDate;
    use std::time::Duration;

    const CONFIG: AnimationConfig = AnimationConfig {
        advance_interval: Duration::from_millis(150),
        pause_duration: Duration::from_millis(15_000),
    };

    fn app_with(len: usize, t0: AppInstant) -> WaccDashboardApp {
        let start = NaiveDate::from_ymd_opt(2015, 12, 31).unwrap();
        let points = (0..len)
            .map(|i| Point::new(start + chrono::Days::new(i as u64 * 91), i as f64))
            .collect();
        WaccDashboardApp::with_parts(Arc::new(Series::from_points(points)), CONFIG, None, t0)
    }

    #[test]
    fn first_update_shows_an_empty_chart() {
        let t0 = now();
        let mut app = app_with(3, t0);

        assert!(app.tick(t0).is_empty());
        assert!(app.plot_view.frame().is_some_and(|f| f.is_empty()));
        assert_eq!(app.animation_state().frame_index, 0);
    }

    #[test]
    fn chart_follows_the_sequencer() {
        let t0 = now();
        let mut app = app_with(3, t0);
        app.tick(t0);

        app.tick(t0 + CONFIG.advance_interval * 2);
        let frame = app.plot_view.frame().unwrap();
        assert_eq!(frame.frame_index, 2);
        assert_eq!(frame.highlight.as_ref().unwrap().label, "1.00%");

        // Redraws without a tick do not rebuild
        let misses = app.plot_view.cache_misses();
        app.tick(t0 + CONFIG.advance_interval * 2);
        assert_eq!(app.plot_view.cache_misses(), misses);
    }

    #[test]
    fn failed_last_frame_is_retried_on_the_end_tick() {
        let t0 = now();
        let start = NaiveDate::from_ymd_opt(2015, 12, 31).unwrap();
        let points = vec![
            Point::new(start, 1.0),
            Point::new(start + chrono::Days::new(91), f64::NAN),
        ];
        let mut app =
            WaccDashboardApp::with_parts(Arc::new(Series::from_points(points)), CONFIG, None, t0);

        app.tick(t0 + CONFIG.advance_interval);
        assert_eq!(app.plot_view.frame().unwrap().frame_index, 1);

        app.tick(t0 + CONFIG.advance_interval * 2);
        assert_eq!(app.plot_view.failed_builds(), 1);

        let transitions = app.tick(t0 + CONFIG.advance_interval * 3);
        assert_eq!(transitions, vec![Transition::Ended]);
        assert_eq!(app.plot_view.failed_builds(), 2);
        assert_eq!(app.plot_view.frame().unwrap().frame_index, 1);
    }

    #[test]
    fn reset_clears_the_chart() {
        let t0 = now();
        let mut app = app_with(2, t0);

        let end = t0 + CONFIG.advance_interval * 3;
        app.tick(end);
        assert!(app.animation_state().paused);
        assert_eq!(app.plot_view.frame().unwrap().frame_index, 2);

        let transitions = app.tick(end + CONFIG.pause_duration);
        assert_eq!(transitions, vec![Transition::Reset]);
        assert!(app.plot_view.frame().unwrap().is_empty());
        assert!(app.animation_state().running);
    }
}
