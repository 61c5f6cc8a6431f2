//! Edge-energy analysis: Gaussian blur, directional derivatives, mean
//! reduction.
//!
//! Purpose
//! - Reduce the working image to two scalars measuring horizontal and
//!   vertical edge strength. Lines of text blur into solid bands, so the
//!   derivative taken across the reading direction dominates.
//!
//! Design
//! - Separable Gaussian blur with an odd kernel sampled for the configured
//!   sigma, normalized to unit sum.
//! - 3×3 Sobel derivatives: order (0,1) for the horizontal-edge image,
//!   order (1,0) for the vertical-edge image.
//! - Boundary handling uses clamping (replicate border) on both filters.
//!
//! Notes
//! - Derivative responses are saturated into the 8-bit range before
//!   averaging, so only positive-going transitions contribute to the
//!   means. Both text edges (dark→light and light→dark) occur in equal
//!   numbers, so the one-sided response preserves the directional ratio.
use crate::image::PixelBuffer;
use crate::types::EdgeEnergy;

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Intermediate images of one analysis pass, kept for diagnostics and
/// stage dumps.
#[derive(Clone, Debug)]
pub struct EdgeImages {
    pub blurred: PixelBuffer,
    /// Derivative in y: responds to horizontal edges.
    pub horizontal: PixelBuffer,
    /// Derivative in x: responds to vertical edges.
    pub vertical: PixelBuffer,
    pub energy: EdgeEnergy,
}

/// Blur the working image and reduce it to the two directional means.
pub fn analyze(small: &PixelBuffer, kernel_size: usize, sigma: f32) -> EdgeEnergy {
    analyze_images(small, kernel_size, sigma).energy
}

/// Like [`analyze`], but returns the intermediate buffers as well.
pub fn analyze_images(small: &PixelBuffer, kernel_size: usize, sigma: f32) -> EdgeImages {
    debug_assert!(small.is_gray());
    let blurred = gaussian_blur(small, kernel_size, sigma);
    let horizontal = sobel(&blurred, &SOBEL_KERNEL_Y);
    let vertical = sobel(&blurred, &SOBEL_KERNEL_X);
    let energy = EdgeEnergy {
        mean_horizontal: mean_intensity(&horizontal),
        mean_vertical: mean_intensity(&vertical),
    };
    EdgeImages {
        blurred,
        horizontal,
        vertical,
        energy,
    }
}

/// Separable Gaussian blur with replicate borders.
pub fn gaussian_blur(gray: &PixelBuffer, kernel_size: usize, sigma: f32) -> PixelBuffer {
    debug_assert!(gray.is_gray());
    debug_assert!(kernel_size % 2 == 1 && kernel_size >= 3);
    let (w, h) = (gray.width(), gray.height());
    let kernel = gaussian_kernel(kernel_size, sigma);
    let radius = (kernel_size / 2) as isize;

    // horizontal
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = gray.row(y);
        let out_row = &mut tmp[y * w..(y + 1) * w];
        for (x, dst) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &weight) in kernel.iter().enumerate() {
                let xi = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                acc += row[xi] as f32 * weight;
            }
            *dst = acc;
        }
    }
    // vertical
    let mut out = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &weight) in kernel.iter().enumerate() {
                let yi = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
                acc += tmp[yi * w + x] * weight;
            }
            out[y * w + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    PixelBuffer::new_gray(w, h, out)
}

/// Unit-sum 1D Gaussian kernel of odd length.
fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let radius = (kernel_size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let d = i as f32 - radius;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

/// 3×3 convolution with replicate borders, saturated to the 8-bit range.
fn sobel(gray: &PixelBuffer, kernel: &Kernel3) -> PixelBuffer {
    let (w, h) = (gray.width(), gray.height());
    let mut out = vec![0u8; w * h];
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum = 0i32;
            for (ky, &yy) in y_idx.iter().enumerate() {
                let kernel_row = &kernel[ky];
                for (&xx, &weight) in x_idx.iter().zip(kernel_row.iter()) {
                    sum += gray.gray(xx, yy) as i32 * weight;
                }
            }
            out[y * w + x] = sum.clamp(0, 255) as u8;
        }
    }
    PixelBuffer::new_gray(w, h, out)
}

/// Arithmetic mean over all samples of a single-channel buffer.
fn mean_intensity(gray: &PixelBuffer) -> f32 {
    let data = gray.data();
    if data.is_empty() {
        return 0.0;
    }
    let sum: u64 = data.iter().map(|&v| v as u64).sum();
    (sum as f64 / data.len() as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_step(width: usize, height: usize) -> PixelBuffer {
        // Dark above, light below: the downward derivative is positive, so
        // the edge survives the one-sided 8-bit saturation.
        let mut data = vec![0u8; width * height];
        for y in height / 2..height {
            data[y * width..(y + 1) * width].fill(255);
        }
        PixelBuffer::new_gray(width, height, data)
    }

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(7, 2.3);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!((kernel[0] - kernel[6]).abs() < 1e-6);
        assert!(kernel[3] > kernel[0]);
    }

    #[test]
    fn blur_preserves_uniform_images() {
        let gray = PixelBuffer::new_gray(32, 24, vec![180; 32 * 24]);
        let blurred = gaussian_blur(&gray, 7, 2.3);
        assert!(blurred.data().iter().all(|&v| v == 180));
    }

    #[test]
    fn flat_image_has_zero_energy() {
        let gray = PixelBuffer::new_gray(64, 48, vec![128; 64 * 48]);
        let energy = analyze(&gray, 7, 2.3);
        assert_eq!(energy.mean_horizontal, 0.0);
        assert_eq!(energy.mean_vertical, 0.0);
    }

    #[test]
    fn horizontal_step_drives_only_the_horizontal_mean() {
        let gray = horizontal_step(64, 64);
        let energy = analyze(&gray, 7, 2.3);
        assert!(energy.mean_horizontal > 0.0);
        assert_eq!(energy.mean_vertical, 0.0);
    }

    #[test]
    fn derivative_orientation_matches_the_edge_direction() {
        let step = horizontal_step(32, 32);
        let images = analyze_images(&step, 3, 1.0);
        let horizontal_sum: u64 = images.horizontal.data().iter().map(|&v| v as u64).sum();
        let vertical_sum: u64 = images.vertical.data().iter().map(|&v| v as u64).sum();
        assert!(horizontal_sum > 0);
        assert_eq!(vertical_sum, 0);
    }
}
