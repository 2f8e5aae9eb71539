//! Edge detection filters: directional Sobel and Outline.
//!
//! All four filters work on luminance and share the same steps:
//! 1. Reduce the image to its luminance plane
//! 2. Valid-mode 3x3 convolution (negative responses discarded)
//! 3. Tone inversion, so edges come out dark on a white background
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - uses the single channel directly
//! - **RGB**: (height, width, 3) - computes luminance from RGB
//! - **RGBA**: (height, width, 4) - computes luminance from RGB, ignores alpha
//!
//! Output is a single-channel image of shape (height - 2, width - 2).

use ndarray::{Array2, ArrayView3};

use super::grayscale::{invert_tone, luminance};
use super::kernel::{convolve_gray, Kernel, LEFT_SOBEL, OUTLINE, RIGHT_SOBEL, TOP_SOBEL};

fn detect_edges(input: ArrayView3<u8>, kernel: &Kernel) -> Array2<u8> {
    let gray = luminance(input);
    let response = convolve_gray(gray.view(), kernel);
    invert_tone(response.view())
}

/// Apply the left Sobel filter.
///
/// Highlights edges where brightness falls from left to right.
pub fn left_sobel(input: ArrayView3<u8>) -> Array2<u8> {
    detect_edges(input, &LEFT_SOBEL)
}

/// Apply the right Sobel filter.
///
/// Highlights edges where brightness rises from left to right.
pub fn right_sobel(input: ArrayView3<u8>) -> Array2<u8> {
    detect_edges(input, &RIGHT_SOBEL)
}

/// Apply the top Sobel filter.
///
/// Highlights edges where brightness falls from top to bottom.
pub fn top_sobel(input: ArrayView3<u8>) -> Array2<u8> {
    detect_edges(input, &TOP_SOBEL)
}

/// Apply the outline (Laplacian) filter.
pub fn outline(input: ArrayView3<u8>) -> Array2<u8> {
    detect_edges(input, &OUTLINE)
}
