// Render-ready models built from the domain types.
// Pure data, no egui calls; the ui module draws them.

pub mod chart;

// Re-export key types for convenience
pub use chart::{ChartFrame, Highlight, PlotBounds, RenderError};
