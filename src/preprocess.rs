use image::{DynamicImage, GrayImage, Luma};

use crate::config::PreprocessConfig;

/// Prepares a captured menu region for OCR.
///
/// Converts to grayscale, stretches contrast around the mean luminance by
/// `config.contrast`, then binarizes: pixels brighter than `config.threshold`
/// become white (255), everything else black (0).
pub fn preprocess_menu(image: &DynamicImage, config: &PreprocessConfig) -> GrayImage {
    let gray = to_grayscale(image);
    let contrasted = enhance_contrast(&gray, config.contrast);
    binarize(&contrasted, config.threshold)
}

/// Converts to 8-bit luma with ITU-R 601-2 weights (0.299, 0.587, 0.114) in
/// 16-bit fixed point. Alpha is ignored.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let luma = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        output.put_pixel(x, y, Luma([luma as u8]));
    }

    output
}

/// Blends each pixel with the image's mean luminance.
///
/// A factor of 1.0 returns the image unchanged, 0.0 a flat gray image at the
/// mean, and values above 1.0 push pixels away from the mean. Blended values
/// are truncated toward zero, then clamped to 0..=255.
pub fn enhance_contrast(img: &GrayImage, factor: f32) -> GrayImage {
    let mean = mean_luminance(img);

    let mut output = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let value = mean + factor * (pixel[0] as f32 - mean);
        output.put_pixel(x, y, Luma([(value as i32).clamp(0, 255) as u8]));
    }

    output
}

/// Pixels strictly above `threshold` become white, the rest black
pub fn binarize(img: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let value = if pixel[0] > threshold { 255u8 } else { 0u8 };
        output.put_pixel(x, y, Luma([value]));
    }

    output
}

/// Mean luminance rounded to the nearest integer level
fn mean_luminance(img: &GrayImage) -> f32 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0.0;
    }

    let sum: u64 = img.pixels().map(|p| p[0] as u64).sum();
    (sum as f64 / count as f64).round() as f32
}
