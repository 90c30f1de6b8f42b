use super::extensions::resolve_save_target;
use crate::errors::{Result, ViewerError};
use crate::processing::{PixelBuffer, PixelFormat};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

const MAX_FILE_BYTES: u64 = 500 * 1024 * 1024;
const MAX_MEGAPIXELS: u64 = 100;

/// Decodes an image file into a tightly packed RGBA buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_FILE_BYTES {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!(
                "File too large: {}MB (max {}MB)",
                file_size / (1024 * 1024),
                MAX_FILE_BYTES / (1024 * 1024)
            ),
        });
    }

    log::debug!("Decoding {:?}", path);
    let image = image::open(path).map_err(|e| ViewerError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    let megapixels = (width as u64 * height as u64) / 1_000_000;
    if megapixels > MAX_MEGAPIXELS {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!("Image too large: {}MP (max {}MP)", megapixels, MAX_MEGAPIXELS),
        });
    }
    if width == 0 || height == 0 {
        return Err(ViewerError::ImageLoadError {
            path: path.to_path_buf(),
            message: "Image has no pixels".to_string(),
        });
    }

    log::info!("Loaded {:?} ({}x{})", path, width, height);
    Ok(PixelBuffer::from_dynamic(&image))
}

/// Encodes `buffer` to `path`, choosing the format from the extension.
/// Returns the path actually written, which gains `.png` when the extension
/// was missing or unknown.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<PathBuf> {
    let (target, format) = resolve_save_target(path);
    let export_err = |message: String| ViewerError::ExportError {
        path: target.clone(),
        message,
    };

    let mut image = buffer.to_dynamic()?;
    // The JPEG encoder has no alpha channel
    if format == ImageFormat::Jpeg && buffer.format() == PixelFormat::Rgba8 {
        image = DynamicImage::ImageRgb8(image.to_rgb8());
    }

    image
        .save_with_format(&target, format)
        .map_err(|e| export_err(e.to_string()))?;

    log::info!("Saved {}x{} image to {:?}", buffer.width(), buffer.height(), target);
    Ok(target)
}
