use crate::image_loader::{is_supported_image, SAVE_EXTENSIONS, SUPPORTED_EXTENSIONS};
use eframe::egui;

use super::FilterViewApp;

impl FilterViewApp {
    // File dialogs
    pub fn open_file_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Open Image")
            .add_filter("Images", SUPPORTED_EXTENSIONS);
        if let Some(dir) = &self.settings.last_open_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            if let Err(e) = self.open_path(&path) {
                self.report_error(&e);
            }
        }
    }

    pub fn save_file_dialog(&mut self) {
        if self.view.current_buffer().is_none() {
            self.report_error(&crate::errors::ViewerError::NothingToSave);
            return;
        }

        let stem = self
            .view
            .source_path()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let suffix = match self.view.current() {
            super::ViewKind::Original => "",
            super::ViewKind::HighPass => "_highpass",
            super::ViewKind::Equalized => "_equalized",
            super::ViewKind::Histogram => "_histogram",
        };

        let mut dialog = rfd::FileDialog::new()
            .set_title("Save current image as")
            .add_filter("Images", SAVE_EXTENSIONS)
            .set_file_name(format!("{}{}.png", stem, suffix));
        if let Some(dir) = &self.settings.last_open_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            if let Err(e) = self.save_current(&path) {
                self.report_error(&e);
            }
        }
    }

    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        if let Some(path) = dropped
            .iter()
            .filter_map(|file| file.path.as_ref())
            .find(|path| path.is_file() && is_supported_image(path))
        {
            if let Err(e) = self.open_path(path) {
                self.report_error(&e);
            }
        }
    }
}
