#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use data::{BackgroundImage, load_background, load_wacc_series};
pub use domain::{Point, Series};
pub use engine::{AnimationState, Sequencer};
pub use models::ChartFrame;
pub use ui::WaccDashboardApp;
pub use utils::app_time;

/// Main application entry point - creates the GUI app.
/// Shared by the native binary and the browser build.
pub fn run_app(
    cc: &eframe::CreationContext,
    series: Arc<Series>,
    background: Option<BackgroundImage>,
) -> Box<dyn eframe::App> {
    let app = ui::WaccDashboardApp::new(cc, series, background);
    Box::new(app)
}
