//! WebAssembly exports for the filter library.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Every export takes a flat row-major, channel-last byte buffer together with
//! its dimensions and returns a flat buffer. The output dimensions follow the
//! filter:
//! - edge filters and `gray_scale`: single channel
//! - convolution filters: `(height - 2) x (width - 2)`
//! - `rotate`: width and height swapped
//!
//! A buffer whose length does not match the dimensions is rejected with a
//! `JsError`.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::error::FilterError;
use crate::filters::{catalog::Filter, crop::crop};

fn to_image(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Array3<u8>, FilterError> {
    Ok(Array3::from_shape_vec((height, width, channels), data.to_vec())?)
}

fn run(
    filter: Filter,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let input = to_image(data, width, height, channels)?;
    let result = filter.apply(input.view()).into_array3();
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Catalog
// ============================================================================

/// Apply a filter by name.
///
/// # Arguments
/// * `name` - Filter name, e.g. `"sepia"` or `"left_sobel"`
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Channels per pixel
#[wasm_bindgen]
pub fn apply_filter_wasm(
    name: &str,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let filter: Filter = name.parse()?;
    run(filter, data, width, height, channels)
}

// ============================================================================
// Edge Detection
// ============================================================================

#[wasm_bindgen]
pub fn left_sobel_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::LeftSobel, data, width, height, channels)
}

#[wasm_bindgen]
pub fn right_sobel_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::RightSobel, data, width, height, channels)
}

#[wasm_bindgen]
pub fn top_sobel_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::TopSobel, data, width, height, channels)
}

#[wasm_bindgen]
pub fn outline_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Outline, data, width, height, channels)
}

// ============================================================================
// Convolution
// ============================================================================

#[wasm_bindgen]
pub fn emboss_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Emboss, data, width, height, channels)
}

#[wasm_bindgen]
pub fn sharpen_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Sharpen, data, width, height, channels)
}

#[wasm_bindgen]
pub fn identity_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Identity, data, width, height, channels)
}

// ============================================================================
// Pixel-wise
// ============================================================================

#[wasm_bindgen]
pub fn gray_scale_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::GrayScale, data, width, height, channels)
}

#[wasm_bindgen]
pub fn negative_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Negative, data, width, height, channels)
}

#[wasm_bindgen]
pub fn sepia_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Sepia, data, width, height, channels)
}

// ============================================================================
// Geometric
// ============================================================================

/// Transpose the image; the result is `height` pixels wide and `width` tall.
#[wasm_bindgen]
pub fn rotate_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Rotate, data, width, height, channels)
}

#[wasm_bindgen]
pub fn invert_wasm(data: &[u8], width: usize, height: usize, channels: usize) -> Result<Vec<u8>, JsError> {
    run(Filter::Invert, data, width, height, channels)
}

/// Crop to rows `[top, bottom)` and columns `[left, right)`.
///
/// Invalid corners leave the image unchanged.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn crop_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    top: isize,
    left: isize,
    bottom: isize,
    right: isize,
) -> Result<Vec<u8>, JsError> {
    let input = to_image(data, width, height, channels)?;
    let result = crop(input.view(), (top, left), (bottom, right));
    Ok(result.into_raw_vec_and_offset().0)
}
