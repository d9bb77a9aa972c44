//! Unified error types for tiletext

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    // === Config Errors ===
    #[error("Invalid font config: {message}")]
    InvalidFontConfig { message: String },

    #[error("Width table error: {0}")]
    Json(#[from] serde_json::Error),

    // === Tile Sheet Errors ===
    #[error("Tile sheet too small: need at least {expected_width}x{expected_height}, got {width}x{height}")]
    SheetTooSmall {
        expected_width: i32,
        expected_height: i32,
        width: i32,
        height: i32,
    },

    // === Rendering Errors ===
    #[error("Failed to create image buffer")]
    ImageBufferCreationFailed,

    #[error("Failed to save image: {message}")]
    ImageSaveFailed { message: String },

    // === External Errors ===
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create an invalid font config error
    pub fn invalid_font_config(msg: impl Into<String>) -> Self {
        Self::InvalidFontConfig { message: msg.into() }
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
