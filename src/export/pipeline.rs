use std::{fmt, path::PathBuf, sync::Arc};

use crate::export::{
    dependencies::{ExportDependencies, ImageClipboard, ImageSaver},
    file::DownloadConfig,
    submit::SubmitConfig,
    types::{ExportAction, ExportError, ExportOutcome, RasterImage},
};
use tokio::task;

#[derive(Clone)]
pub(crate) struct ExportJob {
    pub(crate) action: ExportAction,
    pub(crate) image: RasterImage,
    pub(crate) download: DownloadConfig,
    pub(crate) submit: SubmitConfig,
}

impl fmt::Debug for ExportJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportJob")
            .field("action", &self.action)
            .field("image_bytes", &self.image.bytes.len())
            .field("download", &self.download.directory)
            .field("endpoint", &self.submit.endpoint)
            .finish()
    }
}

pub(crate) async fn perform_export(
    job: ExportJob,
    dependencies: Arc<ExportDependencies>,
) -> Result<ExportOutcome, ExportError> {
    log::debug!("Running export: {:?}", job);

    match job.action {
        ExportAction::Copy => {
            copy_image(Arc::clone(&dependencies.clipboard), job.image).await?;
            Ok(ExportOutcome::Copied)
        }
        ExportAction::Download => {
            let path = save_image(Arc::clone(&dependencies.saver), job.image, job.download).await?;
            Ok(ExportOutcome::Saved(path))
        }
        ExportAction::Submit => {
            let response = dependencies
                .submitter
                .submit(&job.image, &job.submit)
                .await?;
            Ok(ExportOutcome::Submitted {
                status: response.status,
                body: response.body,
            })
        }
    }
}

async fn save_image(
    saver: Arc<dyn ImageSaver>,
    image: RasterImage,
    config: DownloadConfig,
) -> Result<PathBuf, ExportError> {
    task::spawn_blocking(move || saver.save(&image.bytes, &config))
        .await
        .map_err(|e| ExportError::Task(format!("Save task failed: {}", e)))?
}

async fn copy_image(
    clipboard: Arc<dyn ImageClipboard>,
    image: RasterImage,
) -> Result<(), ExportError> {
    task::spawn_blocking(move || clipboard.copy(&image))
        .await
        .map_err(|e| ExportError::Task(format!("Clipboard task failed: {}", e)))?
}
