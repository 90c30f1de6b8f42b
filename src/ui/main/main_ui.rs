use crate::app::FilterViewApp;

impl eframe::App for FilterViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Remember the window size for the next launch
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_size = (rect.width(), rect.height());
        }

        self.handle_dropped_files(ctx);

        self.render_dialogs(ctx);

        self.render_menu_bar(ctx);
        self.render_statusbar(ctx);
        self.render_button_bar(ctx);
        self.render_main_view(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
