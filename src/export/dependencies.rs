use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::export::{
    clipboard,
    file::{self, DownloadConfig},
    submit::{self, SubmitConfig, SubmitResponse},
    types::{ExportError, RasterImage},
};

/// Abstraction over copying images to the clipboard.
pub trait ImageClipboard: Send + Sync {
    fn copy(&self, image: &RasterImage) -> Result<(), ExportError>;
}

/// Abstraction over writing downloads to disk.
pub trait ImageSaver: Send + Sync {
    fn save(&self, png: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over posting images to the interpretation endpoint.
#[async_trait]
pub trait ImageSubmitter: Send + Sync {
    async fn submit(
        &self,
        image: &RasterImage,
        config: &SubmitConfig,
    ) -> Result<SubmitResponse, ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub clipboard: Arc<dyn ImageClipboard>,
    pub saver: Arc<dyn ImageSaver>,
    pub submitter: Arc<dyn ImageSubmitter>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            clipboard: Arc::new(DefaultClipboard),
            saver: Arc::new(DefaultSaver),
            submitter: Arc::new(HttpSubmitter::default()),
        }
    }
}

struct DefaultClipboard;
struct DefaultSaver;

/// Submitter backed by a shared reqwest client.
#[derive(Default)]
pub struct HttpSubmitter {
    client: reqwest::Client,
}

impl ImageClipboard for DefaultClipboard {
    fn copy(&self, image: &RasterImage) -> Result<(), ExportError> {
        clipboard::copy_to_clipboard(image)
    }
}

impl ImageSaver for DefaultSaver {
    fn save(&self, png: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError> {
        file::save_image(png, config)
    }
}

#[async_trait]
impl ImageSubmitter for HttpSubmitter {
    async fn submit(
        &self,
        image: &RasterImage,
        config: &SubmitConfig,
    ) -> Result<SubmitResponse, ExportError> {
        submit::submit_image(&self.client, image, config).await
    }
}
