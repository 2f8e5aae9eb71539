//! Named catalog of the argument-free filters.
//!
//! Lets the binding layers pick a filter by its snake_case name
//! (`"left_sobel"`, `"sepia"`, ...). Crop is excluded since it takes corners.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, Array3, ArrayView3};

use super::{color_adjust, edge, grayscale, rotate, sharpen, stylize};
use crate::error::FilterError;

/// A filter from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    LeftSobel,
    RightSobel,
    TopSobel,
    Outline,
    GrayScale,
    Emboss,
    Sharpen,
    Identity,
    Negative,
    Sepia,
    Rotate,
    Invert,
}

/// Result of applying a catalog filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutput {
    /// Single-channel image (height, width).
    Gray(Array2<u8>),
    /// Multi-channel image (height, width, channels).
    Color(Array3<u8>),
}

impl FilterOutput {
    /// Shape as (height, width, channels); grayscale reports one channel.
    pub fn dim(&self) -> (usize, usize, usize) {
        match self {
            FilterOutput::Gray(a) => {
                let (h, w) = a.dim();
                (h, w, 1)
            }
            FilterOutput::Color(a) => a.dim(),
        }
    }

    /// Consume into an (height, width, channels) array.
    pub fn into_array3(self) -> Array3<u8> {
        match self {
            FilterOutput::Gray(a) => a.insert_axis(ndarray::Axis(2)),
            FilterOutput::Color(a) => a,
        }
    }
}

impl Filter {
    /// Every catalog filter, in declaration order.
    pub const ALL: [Filter; 12] = [
        Filter::LeftSobel,
        Filter::RightSobel,
        Filter::TopSobel,
        Filter::Outline,
        Filter::GrayScale,
        Filter::Emboss,
        Filter::Sharpen,
        Filter::Identity,
        Filter::Negative,
        Filter::Sepia,
        Filter::Rotate,
        Filter::Invert,
    ];

    /// The snake_case name used by `FromStr` and `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Filter::LeftSobel => "left_sobel",
            Filter::RightSobel => "right_sobel",
            Filter::TopSobel => "top_sobel",
            Filter::Outline => "outline",
            Filter::GrayScale => "gray_scale",
            Filter::Emboss => "emboss",
            Filter::Sharpen => "sharpen",
            Filter::Identity => "identity",
            Filter::Negative => "negative",
            Filter::Sepia => "sepia",
            Filter::Rotate => "rotate",
            Filter::Invert => "invert",
        }
    }

    /// Apply the filter to an image.
    pub fn apply(self, input: ArrayView3<u8>) -> FilterOutput {
        log::debug!("applying {} to {:?} image", self, input.dim());

        match self {
            Filter::LeftSobel => FilterOutput::Gray(edge::left_sobel(input)),
            Filter::RightSobel => FilterOutput::Gray(edge::right_sobel(input)),
            Filter::TopSobel => FilterOutput::Gray(edge::top_sobel(input)),
            Filter::Outline => FilterOutput::Gray(edge::outline(input)),
            Filter::GrayScale => FilterOutput::Gray(grayscale::gray_scale(input)),
            Filter::Emboss => FilterOutput::Color(stylize::emboss(input)),
            Filter::Sharpen => FilterOutput::Color(sharpen::sharpen(input)),
            Filter::Identity => FilterOutput::Color(sharpen::identity(input)),
            Filter::Negative => FilterOutput::Color(color_adjust::negative(input)),
            Filter::Sepia => FilterOutput::Color(color_adjust::sepia(input)),
            Filter::Rotate => FilterOutput::Color(rotate::rotate(input)),
            Filter::Invert => FilterOutput::Color(rotate::invert(input)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "blur".parse::<Filter>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter(ref name) if name == "blur"));
        assert_eq!(err.to_string(), "unknown filter `blur`");
    }

    #[test]
    fn test_output_shapes() {
        let img = Array3::<u8>::zeros((6, 4, 3));

        let expected = [
            (Filter::LeftSobel, (4, 2, 1)),
            (Filter::RightSobel, (4, 2, 1)),
            (Filter::TopSobel, (4, 2, 1)),
            (Filter::Outline, (4, 2, 1)),
            (Filter::GrayScale, (6, 4, 1)),
            (Filter::Emboss, (4, 2, 3)),
            (Filter::Sharpen, (4, 2, 3)),
            (Filter::Identity, (4, 2, 3)),
            (Filter::Negative, (6, 4, 3)),
            (Filter::Sepia, (6, 4, 3)),
            (Filter::Rotate, (4, 6, 3)),
            (Filter::Invert, (6, 4, 3)),
        ];

        for (filter, dim) in expected {
            assert_eq!(filter.apply(img.view()).dim(), dim, "{filter}");
        }
    }

    #[test]
    fn test_gray_output_into_array3() {
        let img = Array3::<u8>::from_elem((2, 3, 3), 255);
        let out = Filter::GrayScale.apply(img.view()).into_array3();
        assert_eq!(out.shape(), &[2, 3, 1]);
        assert!(out.iter().all(|&v| v == 255));
    }
}
