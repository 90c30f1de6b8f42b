use eframe::egui;
use filterview::settings::Settings;
use filterview::{logging, FilterViewApp};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();
    logging::init_tracing(settings.debug_logging);

    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);
    log::debug!("Starting with settings {:?}, path {:?}", settings, initial_path);

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Apply Filters")
            .with_inner_size([width.max(400.0), height.max(300.0)])
            .with_min_inner_size([400.0, 300.0])
            .with_icon(load_icon())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Apply Filters",
        native_options,
        Box::new(move |cc| Ok(Box::new(FilterViewApp::new(cc, settings, initial_path)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the viewer window: {}", e))
}

fn load_icon() -> egui::IconData {
    // A sharpening kernel drawn as a 3x3 grid: bright centre, grey cross, dark corners
    let size = 48;
    let cell = size / 3;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let (cx, cy) = ((x / cell).min(2), (y / cell).min(2));
            let shade = match (cx, cy) {
                (1, 1) => 240,
                (1, _) | (_, 1) => 120,
                _ => 40,
            };
            let border = x % cell == 0 || y % cell == 0;
            let v = if border { 20 } else { shade };
            rgba[idx] = v;
            rgba[idx + 1] = v;
            rgba[idx + 2] = (v as u16 + 15).min(255) as u8;
            rgba[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
