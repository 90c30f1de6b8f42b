use super::buffer::PixelBuffer;
use super::grayscale::{replicate_gray, to_gray};
use super::histogram::{render_chart, Histogram};
use crate::errors::ProcessingError;
use image::GrayImage;

/// Builds the remapping table for `histogram`: the lowest occupied level goes
/// to 0, the highest to 255, and levels in between follow the cumulative count.
///
/// Returns `None` when at most one level is occupied, in which case the image
/// has no contrast to stretch.
pub fn equalization_lut(histogram: &Histogram) -> Option<[u8; 256]> {
    let min_level = histogram.min_level()? as usize;
    let total = histogram.total();
    let base = histogram.counts()[min_level] as u64;
    if base == total {
        return None;
    }

    let scale = 255.0 / (total - base) as f64;
    let mut lut = [0u8; 256];
    let mut sum = 0u64;
    for level in (min_level + 1)..256 {
        sum += histogram.counts()[level] as u64;
        // Ties go to the even neighbour, as a float-to-u8 saturating cast does
        lut[level] = (sum as f64 * scale).round_ties_even().min(255.0) as u8;
    }
    Some(lut)
}

/// Histogram equalization of a grayscale image. Constant images come back unchanged.
pub fn equalize(gray: &GrayImage) -> GrayImage {
    equalize_with(gray, &Histogram::from_gray(gray))
}

fn equalize_with(gray: &GrayImage, histogram: &Histogram) -> GrayImage {
    let mut out = gray.clone();
    if let Some(lut) = equalization_lut(histogram) {
        for px in out.pixels_mut() {
            px.0[0] = lut[px.0[0] as usize];
        }
    }
    out
}

/// Histogram of the luma of an RGBA image.
pub fn compute_histogram(image: &PixelBuffer) -> Result<Histogram, ProcessingError> {
    Ok(Histogram::from_gray(&to_gray(image)?))
}

/// Equalizes the luma of an RGBA image and charts its histogram.
///
/// Returns the equalized image as 3 channels at the input size, and the
/// 512x400 single-channel histogram chart of the luma before equalization.
pub fn equalize_and_chart(image: &PixelBuffer) -> Result<(PixelBuffer, PixelBuffer), ProcessingError> {
    let (equalized, chart, _) = equalize_with_histogram(image)?;
    Ok((equalized, chart))
}

/// [`equalize_and_chart`], also handing back the luma histogram the chart was
/// drawn from.
pub fn equalize_with_histogram(
    image: &PixelBuffer,
) -> Result<(PixelBuffer, PixelBuffer, Histogram), ProcessingError> {
    let gray = to_gray(image)?;
    let histogram = Histogram::from_gray(&gray);
    let chart = render_chart(&histogram);
    let equalized = equalize_with(&gray, &histogram);

    Ok((
        PixelBuffer::from_rgb(replicate_gray(&equalized)),
        PixelBuffer::from_gray(chart),
        histogram,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::PixelFormat;
    use image::Luma;
    use rand::{Rng, SeedableRng};

    #[test]
    fn constant_image_is_left_alone() {
        let gray = GrayImage::from_pixel(6, 4, Luma([128]));
        assert_eq!(equalize(&gray), gray);
    }

    #[test]
    fn two_levels_stretch_to_full_range() {
        let gray = GrayImage::from_fn(4, 1, |x, _| Luma([if x < 2 { 100 } else { 110 }]));
        let out = equalize(&gray);
        assert_eq!(out.as_raw(), &vec![0, 0, 255, 255]);
    }

    #[test]
    fn half_way_levels_round_to_even() {
        // One pixel at 10, one at 20, five at 30: level 20 lands on 255 / 6 = 42.5
        let levels = [10u8, 20, 30, 30, 30, 30, 30];
        let gray = GrayImage::from_fn(7, 1, |x, _| Luma([levels[x as usize]]));
        let lut = equalization_lut(&Histogram::from_gray(&gray)).unwrap();
        assert_eq!((lut[10], lut[20], lut[30]), (0, 42, 255));

        // 255 * 3 / 6 = 127.5 goes up to the even 128
        let levels = [10u8, 20, 20, 20, 30, 30, 30];
        let gray = GrayImage::from_fn(7, 1, |x, _| Luma([levels[x as usize]]));
        assert_eq!(equalize(&gray).as_raw(), &vec![0, 128, 128, 128, 255, 255, 255]);
    }

    #[test]
    fn histogram_matches_the_chart_input() {
        let gray = GrayImage::from_fn(9, 5, |x, _| Luma([(x * 20) as u8]));
        let rgba = PixelBuffer::from_rgba(image::buffer::ConvertBuffer::convert(&gray));
        let (equalized, chart, histogram) = equalize_with_histogram(&rgba).unwrap();
        assert_eq!(histogram, compute_histogram(&rgba).unwrap());
        assert_eq!(histogram.occupied_bins().count(), 9);
        assert_eq!((equalized, chart), equalize_and_chart(&rgba).unwrap());
    }

    #[test]
    fn lut_is_monotonic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let gray = GrayImage::from_fn(64, 48, |_, _| Luma([rng.gen_range(30..200)]));
        let lut = equalization_lut(&Histogram::from_gray(&gray)).unwrap();
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[199], 255);
    }

    #[test]
    fn equalizing_twice_changes_nothing() {
        // With at most 256 pixels every occupied level lands on a distinct output
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let w = rng.gen_range(1..=16);
            let h = rng.gen_range(1..=16);
            let spread: u8 = rng.gen_range(1..=255);
            let offset: u8 = rng.gen_range(0..=(255 - spread));
            let gray = GrayImage::from_fn(w, h, |_, _| Luma([offset + rng.gen_range(0..=spread)]));

            let once = equalize(&gray);
            let twice = equalize(&once);
            assert_eq!(once, twice, "{}x{} offset {} spread {}", w, h, offset, spread);

            let mut first: Vec<u32> = Histogram::from_gray(&once).counts().iter().copied().filter(|&c| c > 0).collect();
            let mut original: Vec<u32> = Histogram::from_gray(&gray).counts().iter().copied().filter(|&c| c > 0).collect();
            first.sort_unstable();
            original.sort_unstable();
            assert_eq!(first, original);
        }
    }

    #[test]
    fn chart_and_equalized_shapes() {
        let gray = GrayImage::from_fn(33, 17, |x, y| Luma([((x + y) * 5) as u8]));
        let rgba = PixelBuffer::from_rgba(image::buffer::ConvertBuffer::convert(&gray));
        let (equalized, chart) = equalize_and_chart(&rgba).unwrap();
        assert_eq!(equalized.dimensions(), (33, 17));
        assert_eq!(equalized.format(), PixelFormat::Rgb8);
        assert_eq!(chart.dimensions(), (512, 400));
        assert_eq!(chart.format(), PixelFormat::Luma8);
    }

    #[test]
    fn rejects_non_rgba_input() {
        let rgb = PixelBuffer::from_rgb(image::RgbImage::new(2, 2));
        assert!(matches!(
            equalize_and_chart(&rgb),
            Err(ProcessingError::InvalidInput { .. })
        ));
        assert!(compute_histogram(&rgb).is_err());
    }
}
