use std::sync::Arc;

use tokio::{runtime::Handle, task::JoinHandle};

use crate::board::Whiteboard;
use crate::draw::Surface;
use crate::export::{
    dependencies::ExportDependencies,
    file::DownloadConfig,
    pipeline::{ExportJob, perform_export},
    submit::SubmitConfig,
    types::{ExportAction, ExportOutcome, RasterImage},
};

/// Runs export actions as independent background tasks.
///
/// The board is encoded on the caller's thread; only the owned PNG bytes cross
/// into the tokio runtime. Requests are never queued, merged or de-duplicated:
/// every call spawns its own task.
#[derive(Clone)]
pub struct ExportManager {
    runtime: Handle,
    dependencies: Arc<ExportDependencies>,
    download: DownloadConfig,
    submit: SubmitConfig,
}

impl ExportManager {
    /// Create an export manager using the real clipboard, filesystem and HTTP client.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning export tasks
    pub fn new(runtime_handle: &Handle) -> Self {
        Self::with_dependencies(runtime_handle, ExportDependencies::default())
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(runtime_handle: &Handle, dependencies: ExportDependencies) -> Self {
        Self {
            runtime: runtime_handle.clone(),
            dependencies: Arc::new(dependencies),
            download: DownloadConfig::default(),
            submit: SubmitConfig::default(),
        }
    }

    pub fn with_download_config(mut self, download: DownloadConfig) -> Self {
        self.download = download;
        self
    }

    pub fn with_submit_config(mut self, submit: SubmitConfig) -> Self {
        self.submit = submit;
        self
    }

    /// Copy the board image to the clipboard.
    pub fn copy<S: Surface>(&self, board: &Whiteboard<S>) -> Option<JoinHandle<ExportOutcome>> {
        self.request(ExportAction::Copy, board)
    }

    /// Save the board image into the download directory.
    pub fn download<S: Surface>(
        &self,
        board: &Whiteboard<S>,
    ) -> Option<JoinHandle<ExportOutcome>> {
        self.request(ExportAction::Download, board)
    }

    /// Post the board image to the submit endpoint.
    pub fn submit<S: Surface>(&self, board: &Whiteboard<S>) -> Option<JoinHandle<ExportOutcome>> {
        self.request(ExportAction::Submit, board)
    }

    /// Encode the board and spawn `action` on it.
    ///
    /// Returns `None` if encoding fails; the failure is logged and the action
    /// dropped. The returned handle may be ignored.
    pub fn request<S: Surface>(
        &self,
        action: ExportAction,
        board: &Whiteboard<S>,
    ) -> Option<JoinHandle<ExportOutcome>> {
        match board.export_to_image() {
            Ok(image) => Some(self.spawn(action, image)),
            Err(e) => {
                log::error!("Dropping {:?} export: {}", action, e);
                None
            }
        }
    }

    /// Spawn `action` on an already encoded image.
    pub fn spawn(&self, action: ExportAction, image: RasterImage) -> JoinHandle<ExportOutcome> {
        let job = ExportJob {
            action,
            image,
            download: self.download.clone(),
            submit: self.submit.clone(),
        };
        let dependencies = Arc::clone(&self.dependencies);

        self.runtime.spawn(async move {
            match perform_export(job, dependencies).await {
                Ok(outcome) => {
                    log::info!("{:?} export finished: {:?}", action, outcome);
                    outcome
                }
                Err(e) => {
                    let message = e.to_string();
                    log::error!("{:?} export failed: {}", action, message);
                    ExportOutcome::Failed(message)
                }
            }
        })
    }
}
