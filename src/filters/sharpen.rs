//! Sharpen and Identity filters.
//!
//! Both are per-channel 3x3 convolutions without padding.

use ndarray::{Array3, ArrayView3};

use super::kernel::{convolve_channels, IDENTITY, SHARPEN};

/// Apply the sharpen filter.
///
/// Uses the 4-neighbour kernel `[[0, -1, 0], [-1, 5, -1], [0, -1, 0]]`.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
///
/// # Returns
/// Sharpened image of shape (height - 2, width - 2, channels)
pub fn sharpen(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_channels(input, &SHARPEN)
}

/// Apply the identity filter.
///
/// The kernel selects the patch center, so the result equals the input with
/// its one-pixel border removed.
pub fn identity(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_channels(input, &IDENTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::s;

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            ((y * 31 + x * 17 + c * 5) % 256) as u8
        })
    }

    #[test]
    fn test_identity_reproduces_interior() {
        let img = gradient(6, 9);
        let result = identity(img.view());

        assert_eq!(result.shape(), &[4, 7, 3]);
        assert_eq!(result, img.slice(s![1..5, 1..8, ..]));
    }

    #[test]
    fn test_sharpen_shape() {
        let img = gradient(5, 5);
        assert_eq!(sharpen(img.view()).shape(), &[3, 3, 3]);
    }

    #[test]
    fn test_sharpen_flat_region_unchanged() {
        let img = Array3::<u8>::from_elem((3, 3, 3), 77);
        let result = sharpen(img.view());
        assert_eq!(result[[0, 0, 0]], 77);
    }

    #[test]
    fn test_sharpen_boosts_center() {
        let mut img = Array3::<u8>::from_elem((3, 3, 1), 10);
        img[[1, 1, 0]] = 50;

        let result = sharpen(img.view());

        // 5 * 50 - 4 * 10 = 210
        assert_eq!(result[[0, 0, 0]], 210);
    }

    #[test]
    fn test_sharpen_dark_center_clamps_to_zero() {
        let mut img = Array3::<u8>::from_elem((3, 3, 1), 200);
        img[[1, 1, 0]] = 0;

        let result = sharpen(img.view());
        assert_eq!(result[[0, 0, 0]], 0);
    }
}
