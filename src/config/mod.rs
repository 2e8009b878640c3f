//! Configuration module for the WACC dashboard.
//!
//! Everything here is compiled in; nothing is read from the environment
//! except the log filter (`RUST_LOG`).

pub mod animation;
pub mod assets;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use animation::{ANIMATION, AnimationConfig};
pub use assets::{ASSETS, AssetConfig};
pub use plot::PLOT_CONFIG;
