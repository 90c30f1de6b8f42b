use super::buffer::PixelBuffer;
use super::grayscale::{replicate_gray, to_gray};
use crate::errors::ProcessingError;
use image::GrayImage;
use imageproc::filter::filter3x3;

/// Identity minus the 4-neighbour Laplacian. Weights sum to 1, so flat
/// regions pass through unchanged.
pub const HIGH_PASS_KERNEL: [i32; 9] = [
    0, -1, 0, //
    -1, 5, -1, //
    0, -1, 0,
];

/// Convolves a grayscale image with [`HIGH_PASS_KERNEL`], saturating to 0..=255.
///
/// Out-of-bounds neighbours are replicated from the nearest edge pixel.
pub fn sharpen_gray(gray: &GrayImage) -> GrayImage {
    filter3x3(gray, &HIGH_PASS_KERNEL)
}

/// Sharpens the luma of an RGBA image and returns it as a 3-channel image
/// of the same size.
pub fn apply_high_pass(image: &PixelBuffer) -> Result<PixelBuffer, ProcessingError> {
    let gray = to_gray(image)?;
    let sharpened = sharpen_gray(&gray);
    Ok(PixelBuffer::from_rgb(replicate_gray(&sharpened)))
}
