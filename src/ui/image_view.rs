use crate::app::{fit_size, FilterViewApp};
use egui::{self, Color32, Rect, RichText, Vec2};

const VIEW_BACKGROUND: Color32 = Color32::from_rgb(30, 30, 34);

impl FilterViewApp {
    /// Re-uploads the texture only when the displayed artifact or the loaded
    /// image changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let key = (self.view.current(), self.view.generation());
        if self.texture_key == Some(key) && self.texture.is_some() {
            return;
        }

        let Some(buffer) = self.view.current_buffer() else {
            self.texture = None;
            self.texture_key = None;
            return;
        };

        let size = [buffer.width() as usize, buffer.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &buffer.to_rgba_bytes());
        let name = format!("view-{:?}-{}", key.0, key.1);
        log::debug!("Uploading texture {} ({}x{})", name, size[0], size[1]);

        self.texture = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
        self.texture_key = Some(key);
    }

    pub fn render_main_view(&mut self, ctx: &egui::Context) {
        self.sync_texture(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(VIEW_BACKGROUND))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (rect, _) = ui.allocate_exact_size(available, egui::Sense::hover());

                let Some(tex) = &self.texture else {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Open an image with File > Open Image...",
                        egui::FontId::proportional(16.0),
                        Color32::GRAY,
                    );
                    return;
                };

                // Recomputed every frame, so window resizes rescale the image
                let display_size = fit_size(tex.size_vec2(), available, self.settings.fit_fraction);
                let image_rect = Rect::from_center_size(rect.center(), display_size);

                ui.painter().image(
                    tex.id(),
                    image_rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            });
    }

    pub(crate) fn render_view_buttons(&mut self, ui: &mut egui::Ui) {
        let current = self.view.current();
        let loaded = self.view.is_loaded();
        let mut selected = None;

        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(8.0, 0.0);
            for kind in crate::app::ViewKind::ALL {
                let label = RichText::new(kind.label()).size(13.0);
                let response = ui.add_enabled(loaded, egui::SelectableLabel::new(current == kind, label));
                if response.clicked() {
                    selected = Some(kind);
                }
            }
        });

        if let Some(kind) = selected {
            self.select_view(kind);
        }
    }
}
