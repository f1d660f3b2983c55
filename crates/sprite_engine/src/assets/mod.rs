//! Host-side pixel data handling

pub mod surface;

pub use surface::Surface;

use thiserror::Error;

/// Pixel data loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Failed to decode image data
    #[error("Failed to load image: {0}")]
    LoadFailed(String),

    /// Pixel buffer does not match the declared dimensions
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
