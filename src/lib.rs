//! Photo Filters
//!
//! A fixed catalogue of image filters implemented in Rust, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Images are dense `u8` arrays in row-major, channel-last layout:
//! - **RGB**: (height, width, 3) - the normal input
//! - **Grayscale**: (height, width) - output of the luminance-based filters
//!
//! ## Filter Architecture
//! Every filter is a pure function from a borrowed image to a freshly
//! allocated one. Convolution filters use 3x3 kernels without padding, so
//! their output is two pixels smaller in each spatial dimension.
//!
//! ```
//! use ndarray::Array3;
//! use photofilters::filters::{negative, outline};
//!
//! let image = Array3::<u8>::from_elem((4, 4, 3), 200);
//! assert_eq!(negative(image.view())[[0, 0, 0]], 55);
//! assert_eq!(outline(image.view()).dim(), (2, 2));
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::FilterError;
pub use filters::{Filter, FilterOutput};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::{
        catalog::{Filter, FilterOutput},
        color_adjust, crop as crop_mod, edge, grayscale, rotate as rotate_mod,
        sharpen as sharpen_mod, stylize,
    };

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    // ========================================================================
    // Edge Detection
    // ========================================================================

    /// Left Sobel edge filter. Returns a (H-2, W-2) grayscale array.
    #[pyfunction]
    pub fn left_sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        edge::left_sobel(image.as_array()).into_pyarray(py)
    }

    /// Right Sobel edge filter. Returns a (H-2, W-2) grayscale array.
    #[pyfunction]
    pub fn right_sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        edge::right_sobel(image.as_array()).into_pyarray(py)
    }

    /// Top Sobel edge filter. Returns a (H-2, W-2) grayscale array.
    #[pyfunction]
    pub fn top_sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        edge::top_sobel(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    pub fn outline<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        edge::outline(image.as_array()).into_pyarray(py)
    }

    // ========================================================================
    // Convolution
    // ========================================================================

    #[pyfunction]
    pub fn emboss<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        stylize::emboss(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    pub fn sharpen<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        sharpen_mod::sharpen(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    pub fn identity<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        sharpen_mod::identity(image.as_array()).into_pyarray(py)
    }

    // ========================================================================
    // Pixel-wise
    // ========================================================================

    /// Convert to grayscale (BT.601 luma). Returns a (H, W) array.
    #[pyfunction]
    pub fn gray_scale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        grayscale::gray_scale(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    pub fn negative<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        color_adjust::negative(image.as_array()).into_pyarray(py)
    }

    #[pyfunction]
    pub fn sepia<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        color_adjust::sepia(image.as_array()).into_pyarray(py)
    }

    // ========================================================================
    // Geometric
    // ========================================================================

    /// Transpose rows and columns. Returns a (W, H, C) array.
    #[pyfunction]
    pub fn rotate<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        rotate_mod::rotate(image.as_array()).into_pyarray(py)
    }

    /// Rotate by 180 degrees.
    #[pyfunction]
    pub fn invert<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray3<u8>> {
        rotate_mod::invert(image.as_array()).into_pyarray(py)
    }

    /// Crop to `[top_left, bottom_right)`.
    ///
    /// Invalid corners are logged and the image is returned unchanged.
    #[pyfunction]
    pub fn crop<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        top_left: (isize, isize),
        bottom_right: (isize, isize),
    ) -> Bound<'py, PyArray3<u8>> {
        crop_mod::crop(image.as_array(), top_left, bottom_right).into_pyarray(py)
    }

    /// Crop to `[top_left, bottom_right)`, raising ValueError on invalid corners.
    #[pyfunction]
    pub fn try_crop<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        top_left: (isize, isize),
        bottom_right: (isize, isize),
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = crop_mod::try_crop(image.as_array(), top_left, bottom_right)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Apply a filter by name, e.g. `apply_filter("sepia", image)`.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        name: &str,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyAny>> {
        let filter: Filter = name.parse()?;
        let result = match filter.apply(image.as_array()) {
            FilterOutput::Gray(a) => a.into_pyarray(py).into_any(),
            FilterOutput::Color(a) => a.into_pyarray(py).into_any(),
        };
        Ok(result)
    }

    /// Names accepted by `apply_filter`.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        Filter::ALL.iter().map(|f| f.name()).collect()
    }

    /// Photo filters Rust extension module
    #[pymodule]
    pub fn photofilters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Edge detection
        m.add_function(wrap_pyfunction!(left_sobel, m)?)?;
        m.add_function(wrap_pyfunction!(right_sobel, m)?)?;
        m.add_function(wrap_pyfunction!(top_sobel, m)?)?;
        m.add_function(wrap_pyfunction!(outline, m)?)?;

        // Convolution
        m.add_function(wrap_pyfunction!(emboss, m)?)?;
        m.add_function(wrap_pyfunction!(sharpen, m)?)?;
        m.add_function(wrap_pyfunction!(identity, m)?)?;

        // Pixel-wise
        m.add_function(wrap_pyfunction!(gray_scale, m)?)?;
        m.add_function(wrap_pyfunction!(negative, m)?)?;
        m.add_function(wrap_pyfunction!(sepia, m)?)?;

        // Geometric
        m.add_function(wrap_pyfunction!(rotate, m)?)?;
        m.add_function(wrap_pyfunction!(invert, m)?)?;
        m.add_function(wrap_pyfunction!(crop, m)?)?;
        m.add_function(wrap_pyfunction!(try_crop, m)?)?;

        // Catalog
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photofilters;
