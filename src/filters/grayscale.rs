//! Grayscale reduction and tone inversion.
//!
//! Shared by the luminance-based filters (sobel, outline) and exposed as the
//! `gray_scale` filter. Uses ITU-R BT.601 luma weights.
//!
//! ## Precision
//!
//! The weighted sum is evaluated as an exact integer numerator over 1000, so
//! pure white maps to exactly 255.0 and pure black to 0.0. `gray_scale`
//! truncates; the edge filters convolve the unrounded plane.

use ndarray::{Array2, ArrayView2, ArrayView3};

/// ITU-R BT.601 luma weights, in thousandths.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;
const LUMA_SCALE: f64 = 1000.0;

/// Compute the luminance plane of an image.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels). Three or more
///   channels are weighted as RGB (extra channels ignored); a single channel
///   is used directly.
///
/// # Returns
/// Unrounded luminance of shape (height, width), values 0.0-255.0
pub fn luminance(input: ArrayView3<u8>) -> Array2<f64> {
    let (height, width, channels) = input.dim();
    let mut output = Array2::<f64>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            output[[y, x]] = if channels == 1 {
                input[[y, x, 0]] as f64
            } else {
                let r = input[[y, x, 0]] as u32;
                let g = input[[y, x, 1]] as u32;
                let b = input[[y, x, 2]] as u32;
                (LUMA_R * r + LUMA_G * g + LUMA_B * b) as f64 / LUMA_SCALE
            };
        }
    }

    output
}

/// Convert an image to single-channel grayscale.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
///
/// # Returns
/// Grayscale image of shape (height, width), luminance truncated to u8
pub fn gray_scale(input: ArrayView3<u8>) -> Array2<u8> {
    luminance(input).mapv(|v| v as u8)
}

/// Invert the tone of a grayscale image (`255 - v`).
///
/// Not to be confused with [`crate::filters::rotate::invert`], which flips
/// orientation.
pub fn invert_tone(input: ArrayView2<u8>) -> Array2<u8> {
    input.mapv(|v| 255 - v)
}
