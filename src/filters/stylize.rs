//! Stylize filters: Emboss.
//!
//! Every channel is convolved independently; output has the same channel
//! count as the input and shrinks by two rows and two columns.

use ndarray::{Array3, ArrayView3};

use super::kernel::{convolve_channels, EMBOSS};

/// Apply the emboss filter.
///
/// Creates a raised effect lit from the bottom-right using the fixed
/// diagonal kernel `[[-2, -1, 0], [-1, 1, 1], [0, 1, 2]]`.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
///
/// # Returns
/// Embossed image of shape (height - 2, width - 2, channels)
pub fn emboss(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_channels(input, &EMBOSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emboss_shape() {
        let img = Array3::<u8>::zeros((10, 8, 3));
        assert_eq!(emboss(img.view()).shape(), &[8, 6, 3]);
    }

    #[test]
    fn test_emboss_flat_region_keeps_value() {
        // Kernel weights sum to 1, so a flat region is unchanged
        let img = Array3::<u8>::from_elem((4, 4, 3), 128);
        let result = emboss(img.view());
        assert!(result.iter().all(|&v| v == 128));
    }

    #[test]
    fn test_emboss_diagonal_gradient() {
        let mut img = Array3::<u8>::zeros((3, 3, 3));
        // Bright bottom-right corner, dark top-left corner
        for c in 0..3 {
            img[[2, 2, c]] = 50;
            img[[0, 0, c]] = 10;
        }
        img[[1, 1, 1]] = 7;

        let result = emboss(img.view());

        // 2 * 50 - 2 * 10 = 80
        assert_eq!(result[[0, 0, 0]], 80);
        assert_eq!(result[[0, 0, 1]], 87);
        assert_eq!(result[[0, 0, 2]], 80);
    }
}
