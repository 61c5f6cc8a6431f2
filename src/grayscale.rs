//! Grayscale normalization of decoded pixel buffers.
//!
//! Reduces any supported input layout to the single-channel 8-bit form the
//! rest of the pipeline operates on. RGB uses the Rec.601 luma transform;
//! grayscale input passes through untouched, which makes the operation
//! idempotent.
use crate::image::PixelBuffer;
use crate::types::OrientationError;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Convert a raw buffer to single-channel grayscale.
///
/// Accepts channel counts 1 (returned unchanged) and 3 (luma-weighted);
/// anything else, or a zero-sized image, is a fatal
/// [`OrientationError::UnsupportedFormat`].
pub fn normalize(buffer: PixelBuffer) -> Result<PixelBuffer, OrientationError> {
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return Err(OrientationError::UnsupportedFormat {
            width,
            height,
            channels: buffer.channels(),
        });
    }
    match buffer.channels() {
        1 => Ok(buffer),
        3 => {
            let mut gray = Vec::with_capacity(width * height);
            for px in buffer.data().chunks_exact(3) {
                let luma =
                    LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
                gray.push(luma.round().clamp(0.0, 255.0) as u8);
            }
            Ok(PixelBuffer::new_gray(width, height, gray))
        }
        channels => Err(OrientationError::UnsupportedFormat {
            width,
            height,
            channels,
        }),
    }
}
