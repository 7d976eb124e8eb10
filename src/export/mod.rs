//! Export actions for the whiteboard image.
//!
//! This module provides:
//! - PNG snapshots of the surface ([`RasterImage`])
//! - Clipboard copy with a data-URL text fallback
//! - Download to a fixed filename
//! - Submission to a remote interpretation endpoint
//!
//! Every action runs as its own background task on a tokio runtime.

pub mod clipboard;
pub mod file;
pub mod submit;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use dependencies::{
    ExportDependencies, HttpSubmitter, ImageClipboard, ImageSaver, ImageSubmitter,
};
pub use file::DownloadConfig;
pub use manager::ExportManager;
pub use submit::{SubmitConfig, SubmitPayload, SubmitResponse};
pub use types::{ExportAction, ExportError, ExportOutcome, RasterImage};
