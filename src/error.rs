//! Error types for book generation.

use thiserror::Error;

/// Errors that can occur while assembling or exporting a photo book.
///
/// The rendering core never fails: malformed blocks degrade to empty or
/// placeholder fragments. Errors only surface at the outer edges (file
/// output, JSON input, preset lookup, settings validation).
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
