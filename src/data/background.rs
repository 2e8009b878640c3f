//! Optional full-window background image.
//!
//! Purely cosmetic: every failure is reported as an [`AssetLoadError`], logged
//! by [`load_background`], and the UI falls back to a solid background.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ASSETS;

/// Decoded RGBA8 pixels, ready to be uploaded as a texture.
#[derive(Clone)]
pub struct BackgroundImage {
    /// `[width, height]` in pixels
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("{file} not found (searched {searched:?})")]
    NotFound {
        file: String,
        searched: Vec<PathBuf>,
    },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decodes an image file's bytes. For animated GIFs only the first frame is kept.
pub fn decode_background(bytes: &[u8], path: &Path) -> Result<BackgroundImage, AssetLoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| AssetLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];

    Ok(BackgroundImage {
        size,
        rgba: rgba.into_raw(),
    })
}

/// Looks for `file` in each of `dirs` in order and decodes the first hit.
pub fn load_background_from(dirs: &[PathBuf], file: &str) -> Result<BackgroundImage, AssetLoadError> {
    let searched: Vec<PathBuf> = dirs.iter().map(|dir| dir.join(file)).collect();

    let Some(path) = searched.iter().find(|p| p.is_file()) else {
        return Err(AssetLoadError::NotFound {
            file: file.to_string(),
            searched,
        });
    };

    let bytes = std::fs::read(path).map_err(|source| AssetLoadError::Io {
        path: path.clone(),
        source,
    })?;
    decode_background(&bytes, path)
}

/// Directories searched for assets: next to the executable, then the working directory.
#[cfg(not(target_arch = "wasm32"))]
fn asset_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.contains(&cwd) {
            dirs.push(cwd);
        }
    }
    dirs
}

/// Loads the configured background, or `None` (with a warning) if it is unavailable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_background() -> Option<BackgroundImage> {
    match load_background_from(&asset_dirs(), ASSETS.background_file) {
        Ok(image) => {
            log::info!(
                "Loaded background {} ({}x{})",
                ASSETS.background_file,
                image.size[0],
                image.size[1]
            );
            Some(image)
        }
        Err(e) => {
            log::warn!("⚠️  Background unavailable, using solid fill: {}", e);
            None
        }
    }
}

/// The browser build has no filesystem to search.
#[cfg(target_arch = "wasm32")]
pub fn load_background() -> Option<BackgroundImage> {
    log::info!(
        "Skipping {} in the browser build, using solid fill",
        ASSETS.background_file
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wacc-dashboard-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = scratch_dir("missing");
        let err = load_background_from(&[dir.clone()], "no-such-goose.gif").unwrap_err();

        match err {
            AssetLoadError::NotFound { file, searched } => {
                assert_eq!(file, "no-such-goose.gif");
                assert_eq!(searched, vec![dir.join("no-such-goose.gif")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_matching_directory_wins() {
        let empty = scratch_dir("empty");
        let full = scratch_dir("full");
        std::fs::write(full.join("bg.png"), tiny_png()).unwrap();

        let image = load_background_from(&[empty, full], "bg.png").unwrap();
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.rgba.len(), 3 * 2 * 4);
        assert_eq!(&image.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_background(b"definitely not an image", Path::new("bad.gif")).unwrap_err();
        assert!(matches!(err, AssetLoadError::Decode { .. }));
    }
}
