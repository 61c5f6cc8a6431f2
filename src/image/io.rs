//! I/O helpers for pixel buffers and JSON.
//!
//! - `load_pixel_buffer`: read a TIFF/PNG/JPEG/etc. into a [`PixelBuffer`].
//! - `save_gray_png`: write a single-channel buffer to a PNG (debug output).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelBuffer;
use crate::types::OrientationError;
use image::{DynamicImage, GrayImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode an image file into an 8-bit pixel buffer.
///
/// 8-bit gray and RGB layouts are passed through with channel counts 1 and 3.
/// Deeper-than-8-bit layouts are reduced to their 8-bit counterparts; alpha
/// channels are kept (counts 2 and 4) so the normalizer can reject them.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer, OrientationError> {
    let decoded = image::open(path).map_err(|e| OrientationError::ImageLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    if width == 0 || height == 0 {
        return Err(OrientationError::ImageLoad {
            path: path.to_path_buf(),
            reason: "zero width and/or height".to_string(),
        });
    }
    debug!(
        "decoded {} as {}x{} {:?}",
        path.display(),
        width,
        height,
        decoded.color()
    );

    let buffer = match decoded {
        DynamicImage::ImageLuma8(img) => PixelBuffer::new(width, height, 1, img.into_raw()),
        DynamicImage::ImageLumaA8(img) => PixelBuffer::new(width, height, 2, img.into_raw()),
        DynamicImage::ImageRgb8(img) => PixelBuffer::new(width, height, 3, img.into_raw()),
        DynamicImage::ImageRgba8(img) => PixelBuffer::new(width, height, 4, img.into_raw()),
        other if other.color().has_alpha() => {
            PixelBuffer::new(width, height, 4, other.into_rgba8().into_raw())
        }
        other if other.color().channel_count() == 1 => {
            PixelBuffer::new(width, height, 1, other.into_luma8().into_raw())
        }
        other => PixelBuffer::new(width, height, 3, other.into_rgb8().into_raw()),
    };
    Ok(buffer)
}

/// Save a single-channel buffer to a PNG.
pub fn save_gray_png(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    if !buffer.is_gray() {
        return Err(format!(
            "cannot save {}-channel buffer as grayscale PNG",
            buffer.channels()
        ));
    }
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
