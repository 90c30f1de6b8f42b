use super::buffer::PixelBuffer;
use crate::errors::ProcessingError;
use image::buffer::ConvertBuffer;
use image::{GrayImage, Luma, Rgb, RgbImage};

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14 so a
// neutral pixel keeps its value exactly.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

#[inline]
pub fn luma(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let y = (LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32 + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT;
    y.min(255) as u8
}

/// Reduces an RGBA buffer to one luma channel, going through RGB first so
/// alpha never affects the result.
pub fn to_gray(image: &PixelBuffer) -> Result<GrayImage, ProcessingError> {
    image.ensure_rgba_source()?;
    let rgb: RgbImage = image.to_rgba_image()?.convert();
    Ok(GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([luma(rgb.get_pixel(x, y))])
    }))
}

/// Copies the single channel into R, G and B.
pub fn replicate_gray(gray: &GrayImage) -> RgbImage {
    gray.convert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn neutral_pixels_keep_their_value() {
        for v in 0..=255u8 {
            assert_eq!(luma(&Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn primaries_use_bt601_weights() {
        assert_eq!(luma(&Rgb([255, 0, 0])), 76);
        assert_eq!(luma(&Rgb([0, 255, 0])), 150);
        assert_eq!(luma(&Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = PixelBuffer::from_rgba(RgbaImage::from_pixel(2, 2, Rgba([10, 200, 30, 255])));
        let clear = PixelBuffer::from_rgba(RgbaImage::from_pixel(2, 2, Rgba([10, 200, 30, 0])));
        assert_eq!(to_gray(&opaque).unwrap(), to_gray(&clear).unwrap());
    }

    #[test]
    fn derivation_is_idempotent_on_replicated_gray() {
        let gray = GrayImage::from_fn(16, 16, |x, y| Luma([(x * 16 + y) as u8]));
        let rgba: RgbaImage = replicate_gray(&gray).convert();
        let again = to_gray(&PixelBuffer::from_rgba(rgba)).unwrap();
        assert_eq!(again, gray);
        assert_eq!(replicate_gray(&again), replicate_gray(&gray));
    }

    #[test]
    fn replicate_fills_three_channels() {
        let gray = GrayImage::from_pixel(3, 2, Luma([77]));
        let rgb = replicate_gray(&gray);
        assert!(rgb.pixels().all(|p| p.0 == [77, 77, 77]));
    }
}
