//! Data types for exporting the whiteboard image.

use crate::draw::SurfaceError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::PathBuf;
use thiserror::Error;

/// PNG-encoded snapshot of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Encoded PNG bytes.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterImage {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    /// Standard base64 encoding of the PNG bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:image/png;base64,...` URL of the image.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.to_base64())
    }
}

/// Which export action to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Copy,
    Download,
    Submit,
}

/// Result of a finished export task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Image placed on the clipboard.
    Copied,
    /// Image written to the given path.
    Saved(PathBuf),
    /// Endpoint answered with this status and body.
    Submitted { status: u16, body: String },
    Failed(String),
}

/// Errors that can occur while exporting an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[source] SurfaceError),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),

    #[error("Submit request failed: {0}")]
    Network(String),

    #[error("Export task failed: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_prefixes_base64_payload() {
        let image = RasterImage::new(vec![0x89, b'P', b'N', b'G'], 1, 1);
        assert_eq!(image.to_base64(), "iVBORw==");
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw==");
    }
}
