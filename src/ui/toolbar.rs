use crate::app::FilterViewApp;
use egui::{self, Color32, Margin, RichText};

impl FilterViewApp {
    pub fn render_menu_bar(&mut self, ctx: &egui::Context) {
        // Collect actions to perform after UI
        let mut open_file = false;
        let mut save_file = false;
        let mut exit = false;
        let can_save = self.view.current_buffer().is_some();

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(28, 28, 32))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button(RichText::new("File").color(Color32::WHITE), |ui| {
                        if ui.button("Open Image...").clicked() {
                            open_file = true;
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(can_save, egui::Button::new("Save current Image as..."))
                            .clicked()
                        {
                            save_file = true;
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("Exit").clicked() {
                            exit = true;
                            ui.close_menu();
                        }
                    });
                });
            });

        if open_file {
            self.open_file_dialog();
        }
        if save_file {
            self.save_file_dialog();
        }
        if exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    pub fn render_button_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("view_buttons")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(28, 28, 32))
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                self.render_view_buttons(ui);
            });
    }
}
