//! Aspect-preserving bilinear resample to the fixed working width.
//!
//! Bilinear interpolation is required here: nearest-neighbor decimation
//! introduces spurious high-frequency edges that bias the directional
//! energy means downstream.
use crate::image::PixelBuffer;
use crate::types::OrientationError;

/// Resample a grayscale buffer to `target_width`, preserving aspect ratio.
///
/// The target height is `round(target_width * h / w)`; if it rounds to
/// zero the geometry is degenerate and the run is aborted.
pub fn rescale(gray: &PixelBuffer, target_width: usize) -> Result<PixelBuffer, OrientationError> {
    debug_assert!(gray.is_gray());
    let (width, height) = (gray.width(), gray.height());
    if width == 0 || height == 0 {
        return Err(OrientationError::DegenerateGeometry {
            width: target_width,
            height: 0,
        });
    }
    let target_height =
        ((target_width as f64) * (height as f64) / (width as f64)).round() as usize;
    if target_width == 0 || target_height == 0 {
        return Err(OrientationError::DegenerateGeometry {
            width: target_width,
            height: target_height,
        });
    }

    let scale_x = width as f32 / target_width as f32;
    let scale_y = height as f32 / target_height as f32;
    let mut out = vec![0u8; target_width * target_height];
    for ty in 0..target_height {
        // Center-aligned source coordinate, clamped at the borders.
        let fy = ((ty as f32 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (fy as usize).min(height - 1);
        let y1 = (y0 + 1).min(height - 1);
        let wy = fy - y0 as f32;
        let (row0, row1) = (gray.row(y0), gray.row(y1));
        let out_row = &mut out[ty * target_width..(ty + 1) * target_width];
        for (tx, dst) in out_row.iter_mut().enumerate() {
            let fx = ((tx as f32 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (fx as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let wx = fx - x0 as f32;
            let top = row0[x0] as f32 * (1.0 - wx) + row0[x1] as f32 * wx;
            let bottom = row1[x0] as f32 * (1.0 - wx) + row1[x1] as f32 * wx;
            *dst = (top * (1.0 - wy) + bottom * wy).round() as u8;
        }
    }
    Ok(PixelBuffer::new_gray(target_width, target_height, out))
}

#[cfg(test)]
mod tests {
    use super::rescale;
    use crate::image::PixelBuffer;
    use crate::types::OrientationError;

    #[test]
    fn output_width_is_exact_and_aspect_preserved() {
        let gray = PixelBuffer::new_gray(1000, 750, vec![128; 1000 * 750]);
        let small = rescale(&gray, 512).unwrap();
        assert_eq!(small.width(), 512);
        // 512 * 750 / 1000 = 384
        assert_eq!(small.height(), 384);
        let original = 750.0 / 1000.0;
        let resampled = small.height() as f64 / small.width() as f64;
        assert!((original - resampled).abs() <= 1.0 / 512.0);
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let gray = PixelBuffer::new_gray(640, 480, vec![200; 640 * 480]);
        let small = rescale(&gray, 512).unwrap();
        assert!(small.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn upscaling_interpolates_within_the_input_range() {
        let gray = PixelBuffer::new_gray(4, 4, (0u8..16).map(|v| v * 16).collect());
        let small = rescale(&gray, 512).unwrap();
        assert_eq!(small.width(), 512);
        assert_eq!(small.height(), 512);
        assert!(small.data().iter().all(|&v| v <= 240));
    }

    #[test]
    fn collapsed_height_is_degenerate() {
        // 20000:1 aspect rounds the target height to zero.
        let gray = PixelBuffer::new_gray(20000, 1, vec![0; 20000]);
        match rescale(&gray, 512) {
            Err(OrientationError::DegenerateGeometry { height: 0, .. }) => {}
            other => panic!("expected DegenerateGeometry, got {other:?}"),
        }
    }
}
