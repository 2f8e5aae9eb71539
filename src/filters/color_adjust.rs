//! Color adjustment filters: Negative, Sepia.
//!
//! Pixel-wise operations; output shape always equals input shape.

use ndarray::{Array3, ArrayView3};

/// Sepia color-mixing matrix, rows produce R', G', B'.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Negate every channel of every pixel (`255 - v`).
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
///
/// # Returns
/// Negative image with the same shape
pub fn negative(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                output[[y, x, c]] = 255 - input[[y, x, c]];
            }
        }
    }

    output
}

/// Apply a sepia tone.
///
/// Mixes R, G and B through a fixed matrix. Results above 255 saturate.
/// Channels beyond the third (e.g. alpha) are copied unchanged.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels), channels >= 3
///
/// # Returns
/// Sepia-toned image with the same shape
pub fn sepia(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = input.to_owned();

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f64;
            let g = input[[y, x, 1]] as f64;
            let b = input[[y, x, 2]] as f64;

            for (c, row) in SEPIA.iter().enumerate().take(channels) {
                let v = row[0] * r + row[1] * g + row[2] * b;
                output[[y, x, c]] = v.min(255.0) as u8;
            }
        }
    }

    output
}
