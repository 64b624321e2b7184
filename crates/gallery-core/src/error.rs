//! Error types for the gallery

use thiserror::Error;

/// Main error type for gallery content operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Content document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document is not valid gallery JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No item with this id exists in the content
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A dimension name did not match any filter dimension
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
