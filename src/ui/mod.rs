// User interface components
pub mod app;
pub mod config;
pub mod plot_layers;
pub mod styles;
pub mod ui_plot_view;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::WaccDashboardApp;
pub use config::UI_CONFIG;
