//! Pixel routines behind the viewer: a 3x3 sharpening filter and histogram
//! equalization with a rendered histogram chart.
//!
//! Everything here is pure. Inputs are borrowed RGBA buffers, outputs are
//! freshly allocated, and failures come back as [`ProcessingError`] instead of
//! placeholder images.

pub mod buffer;
pub mod equalize;
pub mod grayscale;
pub mod high_pass;
pub mod histogram;

pub use buffer::{PixelBuffer, PixelFormat};
pub use equalize::{compute_histogram, equalize, equalize_and_chart, equalize_with_histogram, equalization_lut};
pub use grayscale::{replicate_gray, to_gray};
pub use high_pass::{apply_high_pass, sharpen_gray, HIGH_PASS_KERNEL};
pub use histogram::{render_chart, Histogram, CHART_HEIGHT, CHART_WIDTH};

pub use crate::errors::ProcessingError;
