/// Generates a page of horizontal black bands on a white background,
/// inset by a margin the way text lines sit inside a printed page.
pub fn horizontal_band_page_u8(width: usize, height: usize, band: usize, margin: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(band > 0, "band thickness must be positive");
    assert!(
        2 * margin < width && 2 * margin < height,
        "margin must leave room for the bands"
    );

    let mut img = vec![255u8; width * height];
    for y in margin..height - margin {
        if (y / band) & 1 == 1 {
            let start = y * width;
            img[start + margin..start + width - margin].fill(0);
        }
    }
    img
}

/// Transpose of [`horizontal_band_page_u8`]: vertical black bands.
pub fn vertical_band_page_u8(width: usize, height: usize, band: usize, margin: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(band > 0, "band thickness must be positive");
    assert!(
        2 * margin < width && 2 * margin < height,
        "margin must leave room for the bands"
    );

    let mut img = vec![255u8; width * height];
    for y in margin..height - margin {
        for x in margin..width - margin {
            if (x / band) & 1 == 1 {
                img[y * width + x] = 0;
            }
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Expands a grayscale buffer into packed RGB with equal channels.
pub fn replicate_rgb(gray: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(gray.len() * 3);
    for &v in gray {
        rgb.extend_from_slice(&[v, v, v]);
    }
    rgb
}
