//! Optional cosmetic assets
//!
//! The arena renders fine without a background or stylesheet; a missing
//! or unreadable asset is logged and skipped, never an error.

use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Load the arena background image if the file exists and decodes.
pub fn load_background(path: impl AsRef<Path>) -> Option<DynamicImage> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(img) => {
            let (width, height) = img.dimensions();
            tracing::debug!(
                "Loaded background {} ({}x{})",
                path.display(),
                width,
                height
            );
            Some(img)
        }
        Err(e) => {
            tracing::warn!("Background {} unavailable: {}", path.display(), e);
            None
        }
    }
}

/// Load the UI stylesheet text handed through to the widget adapter.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Stylesheet {} unavailable: {}", path.display(), e);
            None
        }
    }
}
