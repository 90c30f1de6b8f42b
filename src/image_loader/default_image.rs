use crate::processing::PixelBuffer;
use image::{Rgba, RgbaImage};

pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (640, 480);

/// Test pattern shown before the user opens a file: a colour gradient with
/// a soft disc and a grid, so both filters have edges and tones to work on.
pub fn default_image() -> PixelBuffer {
    let (width, height) = DEFAULT_IMAGE_SIZE;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = height as f32 * 0.35;

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let tx = x as f32 / (width - 1) as f32;
        let ty = y as f32 / (height - 1) as f32;

        // Gradient from purple to blue, compressed into the mid tones
        let mut r = 60.0 + 90.0 * tx;
        let mut g = 50.0 + 70.0 * ty;
        let mut b = 150.0 - 60.0 * tx;

        let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        if dist < radius {
            let t = 1.0 - dist / radius;
            r += 80.0 * t;
            g += 80.0 * t;
            b += 40.0 * t;
        }

        if x % 64 == 0 || y % 64 == 0 {
            r *= 0.5;
            g *= 0.5;
            b *= 0.5;
        }

        Rgba([r.min(255.0) as u8, g.min(255.0) as u8, b.min(255.0) as u8, 255])
    });

    PixelBuffer::from_rgba(image)
}
