use crate::app::ViewKind;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window state
    pub window_size: (f32, f32),

    /// Share of the central panel the displayed image may cover, per axis
    pub fit_fraction: f32,

    /// View selected after an image is opened
    pub default_view: ViewKind,

    // Session
    pub last_open_dir: Option<PathBuf>,
    pub last_file: Option<PathBuf>,
    pub restore_last_file: bool,

    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: (1100.0, 800.0),
            fit_fraction: 0.8,
            default_view: ViewKind::Original,
            last_open_dir: None,
            last_file: None,
            restore_last_file: true,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "filterview", "FilterView")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Some(config_path) = Self::config_path() {
            if let Err(e) = self.save_to(&config_path) {
                log::warn!("Failed to save settings to {:?}: {}", config_path, e);
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        self.fit_fraction = if self.fit_fraction.is_finite() {
            self.fit_fraction.clamp(0.1, 1.0)
        } else {
            Self::default().fit_fraction
        };
        self
    }

    /// Remembers a successfully opened file for the next dialog and the next launch.
    pub fn remember_file(&mut self, path: &Path) {
        self.last_file = Some(path.to_path_buf());
        self.last_open_dir = path.parent().map(Path::to_path_buf);
    }
}
