// Data loading: the embedded WACC table and the optional background asset
pub mod background;
pub mod prepare;
pub mod wacc;

// Re-export commonly used types
pub use background::{AssetLoadError, BackgroundImage, load_background};
pub use prepare::{ParseError, ParseErrorCause, prepare_series};
pub use wacc::{WACC_TABLE, load_wacc_series};
