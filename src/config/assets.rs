//! Static assets bundled alongside the binary.

pub struct AssetConfig {
    /// Optional animated background. Only the first frame is shown.
    pub background_file: &'static str,
    /// Opacity applied to the background image (0.0 = invisible, 1.0 = opaque)
    pub background_opacity: f32,
}

pub const ASSETS: AssetConfig = AssetConfig {
    background_file: "goose.gif",
    background_opacity: 0.8,
};
