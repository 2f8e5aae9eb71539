//! Rectangular crop.
//!
//! Corners are `(row, col)` pairs. The top-left corner is inclusive and the
//! bottom-right corner is exclusive, so the result has shape
//! `(br.row - tl.row, br.col - tl.col, channels)`.
//!
//! [`crop`] never fails: an invalid request is logged and the input is
//! returned unchanged. Use [`try_crop`] to get the rejection as an error.

use ndarray::{s, Array3, ArrayView3};

use crate::error::FilterError;

/// Check crop corners against an image of the given size.
fn validate(
    top_left: (isize, isize),
    bottom_right: (isize, isize),
    height: usize,
    width: usize,
) -> Result<(usize, usize, usize, usize), FilterError> {
    let invalid = || FilterError::InvalidCrop {
        top_left,
        bottom_right,
        height,
        width,
    };

    let (Ok(top), Ok(left), Ok(bottom), Ok(right)) = (
        usize::try_from(top_left.0),
        usize::try_from(top_left.1),
        usize::try_from(bottom_right.0),
        usize::try_from(bottom_right.1),
    ) else {
        return Err(invalid());
    };

    if bottom > height || right > width || top > bottom || left > right {
        return Err(invalid());
    }

    Ok((top, left, bottom, right))
}

/// Crop an image, reporting invalid corners as an error.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
/// * `top_left` - Inclusive top-left corner as (row, col)
/// * `bottom_right` - Exclusive bottom-right corner as (row, col)
///
/// # Errors
/// [`FilterError::InvalidCrop`] if any coordinate is negative, the
/// bottom-right corner lies outside the image, or the corners are out of order.
pub fn try_crop(
    input: ArrayView3<u8>,
    top_left: (isize, isize),
    bottom_right: (isize, isize),
) -> Result<Array3<u8>, FilterError> {
    let (height, width, _) = input.dim();
    let (top, left, bottom, right) = validate(top_left, bottom_right, height, width)?;

    Ok(input.slice(s![top..bottom, left..right, ..]).to_owned())
}

/// Crop an image.
///
/// On invalid corners a warning is logged and a copy of the input is
/// returned; compare the output shape with the requested one to tell the two
/// cases apart.
///
/// # Arguments
/// * `input` - Image of shape (height, width, channels)
/// * `top_left` - Inclusive top-left corner as (row, col)
/// * `bottom_right` - Exclusive bottom-right corner as (row, col)
pub fn crop(
    input: ArrayView3<u8>,
    top_left: (isize, isize),
    bottom_right: (isize, isize),
) -> Array3<u8> {
    try_crop(input, top_left, bottom_right).unwrap_or_else(|e| {
        log::warn!("{e}, returning image unchanged");
        input.to_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample() -> Array3<u8> {
        Array3::from_shape_fn((4, 5, 3), |(y, x, c)| (y * 10 + x + c * 100) as u8)
    }

    #[test]
    fn test_crop_full_range_is_copy() {
        let img = sample();
        let result = crop(img.view(), (0, 0), (4, 5));
        assert_eq!(result, img);
    }

    #[test]
    fn test_crop_region() {
        let img = sample();
        let result = crop(img.view(), (1, 2), (3, 5));

        assert_eq!(result.shape(), &[2, 3, 3]);
        assert_eq!(result[[0, 0, 0]], 12);
        assert_eq!(result[[1, 2, 0]], 24);
        assert_eq!(result[[1, 2, 2]], 224);
    }

    #[test]
    fn test_crop_empty_region() {
        let img = sample();
        let result = crop(img.view(), (2, 3), (2, 3));
        assert_eq!(result.shape(), &[0, 0, 3]);
    }

    #[test]
    fn test_crop_negative_returns_input() {
        init_logger();
        let img = sample();

        for (tl, br) in [((-1, 0), (2, 2)), ((0, -1), (2, 2)), ((0, 0), (-2, 2)), ((0, 0), (2, -3))] {
            let result = crop(img.view(), tl, br);
            assert_eq!(result, img);
        }
    }

    #[test]
    fn test_crop_out_of_bounds_returns_input() {
        init_logger();
        let img = sample();

        assert_eq!(crop(img.view(), (0, 0), (5, 5)), img);
        assert_eq!(crop(img.view(), (0, 0), (4, 6)), img);
    }

    #[test]
    fn test_crop_reversed_corners_returns_input() {
        init_logger();
        let img = sample();

        assert_eq!(crop(img.view(), (3, 0), (1, 5)), img);
        assert_eq!(crop(img.view(), (0, 4), (4, 2)), img);
    }

    #[test]
    fn test_try_crop_reports_error() {
        let img = sample();
        let err = try_crop(img.view(), (-1, 0), (2, 2)).unwrap_err();

        match err {
            FilterError::InvalidCrop {
                top_left,
                bottom_right,
                height,
                width,
            } => {
                assert_eq!(top_left, (-1, 0));
                assert_eq!(bottom_right, (2, 2));
                assert_eq!((height, width), (4, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_try_crop_ok() {
        let img = sample();
        let result = try_crop(img.view(), (0, 1), (1, 3)).unwrap();
        assert_eq!(result.into_raw_vec_and_offset().0, vec![1, 101, 201, 2, 102, 202]);
    }
}
