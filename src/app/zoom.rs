use eframe::egui::Vec2;

/// Size at which an `image_size` image is drawn inside `available`: scaled up
/// or down to fill `fraction` of the space on the tighter axis, keeping its
/// aspect ratio.
pub fn fit_size(image_size: Vec2, available: Vec2, fraction: f32) -> Vec2 {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let target = available * fraction;
    let scale_x = target.x / image_size.x;
    let scale_y = target.y / image_size.y;
    let scale = scale_x.min(scale_y).max(0.0);
    image_size * scale
}
