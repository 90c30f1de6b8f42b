use crate::app::{FilterViewApp, ViewKind};
use egui::{self, Color32, Margin, RichText};

const STATUS_TIMEOUT_SECS: u64 = 5;

impl FilterViewApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let name = self
                        .view
                        .source_path()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "Built-in test image".to_string());
                    ui.label(RichText::new(name).color(Color32::WHITE).size(12.0));

                    if let Some(buffer) = self.view.current_buffer() {
                        ui.label(
                            RichText::new(format!("{}×{}", buffer.width(), buffer.height()))
                                .color(Color32::GRAY)
                                .size(11.0),
                        );
                    }

                    if self.view.current() == ViewKind::Histogram {
                        if let Some(histogram) = self.view.histogram() {
                            ui.label(
                                RichText::new(format!(
                                    "{} levels, peak {} px",
                                    histogram.occupied_bins().count(),
                                    histogram.max()
                                ))
                                .color(Color32::GRAY)
                                .size(11.0),
                            );
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < STATUS_TIMEOUT_SECS {
                                ui.label(
                                    RichText::new(msg)
                                        .color(Color32::from_rgb(100, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }
                    });
                });
            });
    }
}
