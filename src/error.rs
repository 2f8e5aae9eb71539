//! Error type shared by the checked entry points and the binding layers.

/// An error type for the filter library.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Crop corners outside the image or in the wrong order.
    #[error(
        "cannot crop {height}x{width} image from {top_left:?} to {bottom_right:?}"
    )]
    InvalidCrop {
        /// Requested top-left corner as (row, col).
        top_left: (isize, isize),
        /// Requested bottom-right corner as (row, col).
        bottom_right: (isize, isize),
        /// Height of the source image.
        height: usize,
        /// Width of the source image.
        width: usize,
    },

    /// Name that does not match any filter in the catalog.
    #[error("unknown filter `{0}`")]
    UnknownFilter(String),

    /// Flat buffer that cannot be viewed with the requested dimensions.
    #[error("invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),
}
