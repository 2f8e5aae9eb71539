//! Filter modules.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | Grayscale8 | (H, W) | u8 | Single luminance channel, 0-255 |
//!
//! Inputs are always `ArrayView3<u8>`; single-channel (H, W, 1) and RGBA
//! (H, W, 4) inputs are accepted where noted. Every filter allocates and
//! returns a new array, the input is never modified.
//!
//! ## Filter Categories
//!
//! - **Edge detection**: left_sobel, right_sobel, top_sobel, outline
//!   (grayscale output, shrinks by 2)
//! - **Convolution**: emboss, sharpen, identity (per channel, shrinks by 2)
//! - **Pixel-wise**: gray_scale, negative, sepia
//! - **Geometric**: rotate (transpose), invert (180° flip), crop
//!
//! ## Error Policy
//!
//! Filters do not validate shape or channel count; malformed input panics on
//! out-of-bounds indexing. Crop is the exception: invalid corners are logged
//! and the input is returned as-is.

pub mod grayscale;
pub mod kernel;
pub mod edge;
pub mod stylize;
pub mod sharpen;
pub mod color_adjust;
pub mod rotate;
pub mod crop;
pub mod catalog;

pub use catalog::{Filter, FilterOutput};
pub use color_adjust::{negative, sepia};
pub use crop::{crop, try_crop};
pub use edge::{left_sobel, outline, right_sobel, top_sobel};
pub use grayscale::{gray_scale, invert_tone, luminance};
pub use rotate::{invert, rotate};
pub use sharpen::{identity, sharpen};
pub use stylize::emboss;
