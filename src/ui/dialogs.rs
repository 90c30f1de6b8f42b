use crate::app::FilterViewApp;
use egui::{self, Vec2};

impl FilterViewApp {
    pub fn render_dialogs(&mut self, ctx: &egui::Context) {
        self.render_error_dialog(ctx);
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_dialog.clone() else {
            return;
        };

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            self.error_dialog = None;
            return;
        }

        let mut close = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.error_dialog = None;
        }
    }
}
