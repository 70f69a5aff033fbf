//! Error types for low-poly generation

use std::fmt;

/// Errors that can occur while loading, generating, or exporting
#[derive(Debug)]
pub enum LowPolyError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Source image could not be decoded
    ImageDecode(String),
    /// Encoding the rendered surface to PNG failed
    EncodeFailed(String),
    /// Writing an exported frame to disk failed
    Io(std::io::Error),
}

impl fmt::Display for LowPolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowPolyError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            LowPolyError::ImageDecode(msg) => write!(f, "image decode failed: {}", msg),
            LowPolyError::EncodeFailed(msg) => write!(f, "png encode failed: {}", msg),
            LowPolyError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for LowPolyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LowPolyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LowPolyError {
    fn from(err: std::io::Error) -> Self {
        LowPolyError::Io(err)
    }
}

impl From<image::ImageError> for LowPolyError {
    fn from(err: image::ImageError) -> Self {
        LowPolyError::ImageDecode(err.to_string())
    }
}

/// Result type alias for low-poly operations
pub type Result<T> = std::result::Result<T, LowPolyError>;
