use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the pixel routines in [`crate::processing`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("Invalid input image: {reason}")]
    InvalidInput { reason: String },

    #[error("Image processing failed: {reason}")]
    ProcessingFailure { reason: String },
}

impl ProcessingError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ProcessingError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        ProcessingError::ProcessingFailure {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Export error for '{path}': {message}")]
    ExportError { path: PathBuf, message: String },

    #[error("No image is currently displayed")]
    NothingToSave,

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            ViewerError::FileNotFound { .. } => "Check if the file exists and you have permission to access it.",
            ViewerError::ImageLoadError { .. } => "The image file may be corrupted. Try opening it in another viewer.",
            ViewerError::ExportError { .. } => "Export failed. Check if you have write permissions in the target directory.",
            ViewerError::NothingToSave => "Open an image first.",
            ViewerError::Processing(ProcessingError::InvalidInput { .. }) => "The image could not be processed. Try a different file.",
            ViewerError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
            _ => "An unexpected error occurred.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewerError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            ViewerError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ViewerError::ExportError { .. } => "EXPORT_ERROR",
            ViewerError::NothingToSave => "NOTHING_TO_SAVE",
            ViewerError::Processing(ProcessingError::InvalidInput { .. }) => "INVALID_INPUT",
            ViewerError::Processing(ProcessingError::ProcessingFailure { .. }) => "PROCESSING_FAILURE",
            ViewerError::IoError { .. } => "IO_ERROR",
            ViewerError::JsonError { .. } => "JSON_ERROR",
        }
    }
}
