//! filterview: open an image, sharpen it, equalize its histogram and look at
//! the results side by side.
//!
//! The pixel routines live in [`processing`] and have no UI dependencies. The
//! rest of the crate is the eframe shell around them.

pub mod app;
pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod processing;
pub mod settings;
mod ui;


pub use app::FilterViewApp;
pub use errors::{ProcessingError, ViewerError};
pub use processing::{apply_high_pass, equalize_and_chart, PixelBuffer, PixelFormat};
