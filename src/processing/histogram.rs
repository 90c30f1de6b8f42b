use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const CHART_WIDTH: u32 = 512;
pub const CHART_HEIGHT: u32 = 400;

const CHART_BACKGROUND: Luma<u8> = Luma([255]);
const CHART_BAR: Luma<u8> = Luma([0]);

/// Pixel counts for each of the 256 intensity levels of a grayscale image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; 256],
}

impl Histogram {
    pub fn from_counts(counts: [u32; 256]) -> Self {
        Self { counts }
    }

    pub fn from_gray(gray: &GrayImage) -> Self {
        let counts = imageproc::stats::histogram(gray).channels[0];
        Self { counts }
    }

    pub fn counts(&self) -> &[u32; 256] {
        &self.counts
    }

    pub fn count(&self, level: u8) -> u32 {
        self.counts[level as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Levels with a non-zero count, ascending.
    pub fn occupied_bins(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(move |&level| self.counts[level as usize] > 0)
    }

    /// Lowest occupied level, `None` for an empty histogram.
    pub fn min_level(&self) -> Option<u8> {
        self.occupied_bins().next()
    }
}

/// Height in pixels of the bar for `count`, scaled so the tallest bin fills the chart.
fn bar_height(count: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (count as u64 * CHART_HEIGHT as u64 / max as u64) as u32
}

/// Draws the histogram as black one-pixel columns rising from the bottom of a
/// white 512x400 canvas, column `x` for level `x`. An empty histogram yields a
/// blank canvas.
pub fn render_chart(histogram: &Histogram) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, CHART_BACKGROUND);
    let max = histogram.max();

    for (level, &count) in histogram.counts().iter().enumerate() {
        let height = bar_height(count, max);
        if height == 0 {
            continue;
        }
        let top = (CHART_HEIGHT - height) as i32;
        draw_filled_rect_mut(&mut canvas, Rect::at(level as i32, top).of_size(1, height), CHART_BAR);
    }

    canvas
}
