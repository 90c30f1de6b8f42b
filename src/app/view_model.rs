use crate::errors::ProcessingError;
use crate::processing::{apply_high_pass, equalize_with_histogram, Histogram, PixelBuffer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which cached artifact the viewer shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    #[default]
    Original,
    HighPass,
    Equalized,
    Histogram,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Original,
        ViewKind::HighPass,
        ViewKind::Equalized,
        ViewKind::Histogram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Original => "Show original",
            ViewKind::HighPass => "Show high pass filter",
            ViewKind::Equalized => "Show equalized",
            ViewKind::Histogram => "Show histogram",
        }
    }
}

/// The loaded image and everything derived from it.
///
/// All artifacts are replaced together by [`ViewState::load`]; there is no
/// partial update.
#[derive(Debug, Default)]
pub struct ViewState {
    source_path: Option<PathBuf>,
    original: Option<PixelBuffer>,
    high_pass: Option<PixelBuffer>,
    equalized: Option<PixelBuffer>,
    histogram_chart: Option<PixelBuffer>,
    histogram: Option<Histogram>,
    current: ViewKind,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs both filters on `original` and swaps in the results, showing `view`.
    /// On error the previous image and its artifacts stay in place.
    pub fn load(
        &mut self,
        original: PixelBuffer,
        source_path: Option<PathBuf>,
        view: ViewKind,
    ) -> Result<(), ProcessingError> {
        let high_pass = apply_high_pass(&original)?;
        let (equalized, histogram_chart, histogram) = equalize_with_histogram(&original)?;

        self.source_path = source_path;
        self.original = Some(original);
        self.high_pass = Some(high_pass);
        self.equalized = Some(equalized);
        self.histogram_chart = Some(histogram_chart);
        self.histogram = Some(histogram);
        self.current = view;
        self.generation += 1;
        Ok(())
    }

    /// Switches the displayed artifact. Returns false, leaving the view
    /// unchanged, when nothing has been loaded yet.
    pub fn select(&mut self, view: ViewKind) -> bool {
        if self.buffer(view).is_none() {
            log::warn!("No {:?} image available yet", view);
            return false;
        }
        self.current = view;
        true
    }

    pub fn buffer(&self, view: ViewKind) -> Option<&PixelBuffer> {
        match view {
            ViewKind::Original => self.original.as_ref(),
            ViewKind::HighPass => self.high_pass.as_ref(),
            ViewKind::Equalized => self.equalized.as_ref(),
            ViewKind::Histogram => self.histogram_chart.as_ref(),
        }
    }

    /// Luma histogram of the loaded image, before equalization.
    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    pub fn current(&self) -> ViewKind {
        self.current
    }

    pub fn current_buffer(&self) -> Option<&PixelBuffer> {
        self.buffer(self.current)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// Bumped on every successful load; lets the UI tell when its texture is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
