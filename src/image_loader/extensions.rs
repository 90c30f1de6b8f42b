use image::ImageFormat;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "pnm", "pbm", "pgm", "ppm",
];

pub const SAVE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

pub fn is_supported_image(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}

/// Picks the encoder for a save target from its extension. Paths without a
/// recognised extension get `.png` appended.
pub fn resolve_save_target(path: &Path) -> (PathBuf, ImageFormat) {
    match lowercase_extension(path).as_deref() {
        Some("png") => (path.to_path_buf(), ImageFormat::Png),
        Some("jpg") | Some("jpeg") => (path.to_path_buf(), ImageFormat::Jpeg),
        Some("bmp") => (path.to_path_buf(), ImageFormat::Bmp),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".png");
            (PathBuf::from(name), ImageFormat::Png)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("a/b/photo.JPG")));
        assert!(is_supported_image(Path::new("scan.pgm")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn save_target_keeps_known_extensions() {
        assert_eq!(
            resolve_save_target(Path::new("out/result.JPEG")),
            (PathBuf::from("out/result.JPEG"), ImageFormat::Jpeg)
        );
        assert_eq!(
            resolve_save_target(Path::new("result.bmp")),
            (PathBuf::from("result.bmp"), ImageFormat::Bmp)
        );
    }

    #[test]
    fn save_target_defaults_to_png() {
        assert_eq!(
            resolve_save_target(Path::new("result")),
            (PathBuf::from("result.png"), ImageFormat::Png)
        );
        assert_eq!(
            resolve_save_target(Path::new("result.tiff")),
            (PathBuf::from("result.tiff.png"), ImageFormat::Png)
        );
    }
}
