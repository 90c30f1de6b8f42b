use super::view_model::{ViewKind, ViewState};
use crate::errors::{Result, ViewerError};
use crate::image_loader::{self, default_image};
use crate::settings::Settings;

use eframe::egui::{self, TextureHandle};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct FilterViewApp {
    pub settings: Settings,
    pub view: ViewState,

    // Texture for the currently displayed artifact, keyed by (view, load generation)
    pub(crate) texture: Option<TextureHandle>,
    pub(crate) texture_key: Option<(ViewKind, u64)>,

    pub status_message: Option<(String, Instant)>,
    pub error_dialog: Option<String>,
}

impl FilterViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, initial_path: Option<PathBuf>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut app = Self::with_settings(settings);
        app.load_startup_image(initial_path);
        app
    }

    pub(crate) fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            view: ViewState::new(),
            texture: None,
            texture_key: None,
            status_message: None,
            error_dialog: None,
        }
    }

    /// Command-line path first, then the last file of the previous session,
    /// then the built-in pattern.
    pub(crate) fn load_startup_image(&mut self, initial_path: Option<PathBuf>) {
        let remembered = self
            .settings
            .last_file
            .clone()
            .filter(|_| self.settings.restore_last_file);

        for path in initial_path.into_iter().chain(remembered) {
            match self.open_path(&path) {
                Ok(()) => return,
                Err(e) => log::warn!("Startup image {:?} skipped: {}", path, e),
            }
        }

        let view = self.settings.default_view;
        if let Err(e) = self.view.load(default_image(), None, view) {
            log::error!("Built-in image could not be processed: {}", e);
            self.report_error(&ViewerError::from(e));
        }
    }

    /// Loads `path`, recomputes every artifact and remembers the file.
    /// A failure leaves the current image untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        let _span = tracing::info_span!("open_image", path = %path.display()).entered();
        let original = image_loader::load_image(path)?;
        let (width, height) = original.dimensions();
        self.view
            .load(original, Some(path.to_path_buf()), self.settings.default_view)
            .map_err(ViewerError::from)?;

        self.settings.remember_file(path);
        self.set_status_message(format!("Opened {} ({}x{})", path.display(), width, height));
        Ok(())
    }

    /// Writes whatever is on screen, as the user sees it, at full resolution.
    pub fn save_current(&mut self, path: &Path) -> Result<PathBuf> {
        let buffer = self.view.current_buffer().ok_or(ViewerError::NothingToSave)?;
        let written = image_loader::save_image(buffer, path)?;
        self.set_status_message(format!("Saved {}", written.display()));
        Ok(written)
    }

    pub fn select_view(&mut self, view: ViewKind) {
        if !self.view.select(view) {
            self.set_status_message(format!("Nothing to show for \"{}\"", view.label()));
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        log::info!("{}", message);
        self.status_message = Some((message, Instant::now()));
    }

    pub(crate) fn report_error(&mut self, error: &ViewerError) {
        log::error!("[{}] {}", error.error_code(), error);
        self.set_status_message(error.to_string());
        self.error_dialog = Some(error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::PixelFormat;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_fn(width, height, |x, y| Rgba([(x * 3) as u8, (y * 5) as u8, 7, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn fresh_settings() -> Settings {
        Settings {
            restore_last_file: false,
            ..Settings::default()
        }
    }

    #[test]
    fn startup_falls_back_to_builtin_image() {
        let mut app = FilterViewApp::with_settings(fresh_settings());
        app.load_startup_image(Some(PathBuf::from("/missing/image.png")));

        assert!(app.view.is_loaded());
        assert!(app.view.source_path().is_none());
        assert_eq!(
            app.view.buffer(ViewKind::Original).unwrap().dimensions(),
            image_loader::DEFAULT_IMAGE_SIZE
        );
    }

    #[test]
    fn startup_restores_last_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "last.png", 12, 9);

        let mut settings = Settings::default();
        settings.remember_file(&path);
        let mut app = FilterViewApp::with_settings(settings);
        app.load_startup_image(None);

        assert_eq!(app.view.source_path(), Some(path.as_path()));
        assert_eq!(app.view.current_buffer().unwrap().dimensions(), (12, 9));
    }

    #[test]
    fn open_path_remembers_file_and_uses_default_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "in.png", 20, 10);

        let mut settings = fresh_settings();
        settings.default_view = ViewKind::Equalized;
        let mut app = FilterViewApp::with_settings(settings);
        app.open_path(&path).unwrap();

        assert_eq!(app.view.current(), ViewKind::Equalized);
        assert_eq!(app.settings.last_file.as_deref(), Some(path.as_path()));
        assert_eq!(app.settings.last_open_dir.as_deref(), Some(dir.path()));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn failed_open_keeps_current_image() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_png(dir.path(), "good.png", 6, 6);
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"garbage").unwrap();

        let mut app = FilterViewApp::with_settings(fresh_settings());
        app.open_path(&good).unwrap();
        assert!(app.open_path(&bad).is_err());

        assert_eq!(app.view.source_path(), Some(good.as_path()));
        assert_eq!(app.view.generation(), 1);
    }

    #[test]
    fn save_writes_the_displayed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = FilterViewApp::with_settings(fresh_settings());
        assert!(matches!(
            app.save_current(&dir.path().join("nothing.png")),
            Err(ViewerError::NothingToSave)
        ));

        app.open_path(&write_png(dir.path(), "in.png", 16, 16)).unwrap();
        app.select_view(ViewKind::Histogram);
        let written = app.save_current(&dir.path().join("chart")).unwrap();

        let saved = image_loader::load_image(&written).unwrap();
        assert_eq!(saved.format(), PixelFormat::Rgba8);
        assert_eq!(saved.dimensions(), (512, 400));
    }
}
