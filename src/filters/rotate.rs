//! Geometric transforms: Rotate (transpose) and Invert (180° flip).
//!
//! ## Orientation
//!
//! - `rotate`: (y, x) -> (x, y). A per-channel transpose; no row or column
//!   reversal is applied, so the result is the image mirrored across its main
//!   diagonal rather than a clockwise or counter-clockwise quarter turn.
//! - `invert`: (y, x) -> (H - 1 - y, W - 1 - x). A point reflection, i.e. a
//!   180° rotation. Unrelated to tone inversion.

use ndarray::{Array3, ArrayView3};

/// Rotate image by transposing rows and columns.
///
/// # Arguments
/// * `image` - Input image (H, W, C)
///
/// # Returns
/// Transposed image (W, H, C) - dimensions are swapped
pub fn rotate(image: ArrayView3<u8>) -> Array3<u8> {
    let (h, w, c) = image.dim();
    let mut result = Array3::<u8>::zeros((w, h, c));

    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                result[[x, y, ch]] = image[[y, x, ch]];
            }
        }
    }

    result
}

/// Rotate image by 180 degrees.
///
/// # Arguments
/// * `image` - Input image (H, W, C)
///
/// # Returns
/// Point-reflected image (H, W, C) - same dimensions
pub fn invert(image: ArrayView3<u8>) -> Array3<u8> {
    let (h, w, c) = image.dim();
    let mut result = Array3::<u8>::zeros((h, w, c));

    for y in 0..h {
        for x in 0..w {
            let src_y = h - 1 - y;
            let src_x = w - 1 - x;
            for ch in 0..c {
                result[[y, x, ch]] = image[[src_y, src_x, ch]];
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_2x2_golden() {
        #[rustfmt::skip]
        let image = Array3::from_shape_vec((2, 2, 3), vec![
            1, 1, 1,   2, 2, 2,
            3, 3, 3,   4, 4, 4,
        ]).unwrap();

        let rotated = rotate(image.view());

        #[rustfmt::skip]
        let expected = Array3::from_shape_vec((2, 2, 3), vec![
            1, 1, 1,   3, 3, 3,
            2, 2, 2,   4, 4, 4,
        ]).unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let image = Array3::<u8>::zeros((10, 20, 3));
        let rotated = rotate(image.view());
        assert_eq!(rotated.shape(), &[20, 10, 3]);
    }

    #[test]
    fn test_rotate_keeps_channels_apart() {
        let image = Array3::from_shape_vec((1, 2, 3), vec![10, 20, 30, 40, 50, 60]).unwrap();
        let rotated = rotate(image.view());

        assert_eq!(rotated.shape(), &[2, 1, 3]);
        assert_eq!(rotated[[1, 0, 0]], 40);
        assert_eq!(rotated[[1, 0, 1]], 50);
        assert_eq!(rotated[[1, 0, 2]], 60);
    }

    #[test]
    fn test_rotate_twice_identity() {
        let image = Array3::from_shape_fn((3, 5, 3), |(y, x, c)| (y * 20 + x * 3 + c) as u8);
        let twice = rotate(rotate(image.view()).view());
        assert_eq!(twice.shape(), &[3, 5, 3]);
        assert_eq!(image, twice);
    }

    #[test]
    fn test_invert_2x3() {
        #[rustfmt::skip]
        let image = Array3::from_shape_vec((2, 3, 1), vec![
            1, 2, 3,
            4, 5, 6,
        ]).unwrap();

        let inverted = invert(image.view());

        assert_eq!(inverted.into_raw_vec_and_offset().0, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_invert_twice_identity() {
        let image = Array3::from_shape_fn((4, 7, 3), |(y, x, c)| (y * 40 + x * 5 + c) as u8);
        let twice = invert(invert(image.view()).view());
        assert_eq!(image, twice);
    }

    #[test]
    fn test_invert_empty_image() {
        let image = Array3::<u8>::zeros((0, 4, 3));
        assert_eq!(invert(image.view()).shape(), &[0, 4, 3]);
    }
}
