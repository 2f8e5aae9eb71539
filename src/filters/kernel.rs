//! 3x3 kernels and valid-mode convolution.
//!
//! Convolution here is the element-wise product of the kernel with each
//! input patch, summed (no kernel flip). No padding is applied, so the output
//! is smaller than the input by two rows and two columns. Sums are
//! accumulated in f64, negative responses are discarded, and the result is
//! saturated to 255 and truncated to u8.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

/// A fixed 3x3 kernel, indexed `[row][col]`.
pub type Kernel = [[f64; 3]; 3];

/// Side length of every kernel in this crate.
pub const KERNEL_SIZE: usize = 3;

/// Horizontal gradient, bright-to-dark from left to right.
pub const LEFT_SOBEL: Kernel = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];

/// Horizontal gradient, bright-to-dark from right to left.
pub const RIGHT_SOBEL: Kernel = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical gradient, bright-to-dark from top to bottom.
pub const TOP_SOBEL: Kernel = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Discrete Laplacian (8-neighbour).
pub const OUTLINE: Kernel = [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]];

pub const EMBOSS: Kernel = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];

pub const SHARPEN: Kernel = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

pub const IDENTITY: Kernel = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

/// Output extent along one axis for a valid-mode 3x3 convolution.
#[inline]
fn valid_extent(len: usize) -> usize {
    len.saturating_sub(KERNEL_SIZE - 1)
}

/// Clamp a convolution response to [0, 255] and truncate.
#[inline]
fn to_u8(sum: f64) -> u8 {
    sum.clamp(0.0, 255.0) as u8
}

/// Convolve a single-channel plane with a 3x3 kernel (valid mode).
///
/// # Arguments
/// * `input` - Plane of shape (height, width)
/// * `kernel` - 3x3 kernel
///
/// # Returns
/// Plane of shape (height - 2, width - 2)
pub fn convolve_gray(input: ArrayView2<f64>, kernel: &Kernel) -> Array2<u8> {
    let (height, width) = input.dim();
    let (out_h, out_w) = (valid_extent(height), valid_extent(width));
    let mut output = Array2::<u8>::zeros((out_h, out_w));

    for y in 0..out_h {
        for x in 0..out_w {
            let mut sum = 0.0f64;
            for ky in 0..KERNEL_SIZE {
                for kx in 0..KERNEL_SIZE {
                    sum += input[[y + ky, x + kx]] * kernel[ky][kx];
                }
            }
            output[[y, x]] = to_u8(sum);
        }
    }

    output
}

/// Convolve every channel of an image independently with a 3x3 kernel.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
/// * `kernel` - 3x3 kernel applied to each channel
///
/// # Returns
/// Image of shape (height - 2, width - 2, channels)
pub fn convolve_channels(input: ArrayView3<u8>, kernel: &Kernel) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let (out_h, out_w) = (valid_extent(height), valid_extent(width));
    let mut output = Array3::<u8>::zeros((out_h, out_w, channels));

    for c in 0..channels {
        for y in 0..out_h {
            for x in 0..out_w {
                let mut sum = 0.0f64;
                for ky in 0..KERNEL_SIZE {
                    for kx in 0..KERNEL_SIZE {
                        sum += input[[y + ky, x + kx, c]] as f64 * kernel[ky][kx];
                    }
                }
                output[[y, x, c]] = to_u8(sum);
            }
        }
    }

    output
}
