//! Saving the whiteboard image to disk.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename used for downloads unless configured otherwise.
pub const DEFAULT_FILENAME: &str = "my-image-name.png";

/// Where downloads are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub directory: PathBuf,
    pub filename: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_download_dir(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// The user's download directory, or the current directory if there is none.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Ensure the download directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating download directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write PNG bytes to `directory/filename`, replacing any previous download.
///
/// # Returns
/// Path to the saved file
pub fn save_image(png: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.directory)?;
    let file_path = directory.join(&config.filename);

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );

    fs::write(&file_path, png)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_filename() {
        let config = DownloadConfig::default();
        assert_eq!(config.filename, "my-image-name.png");
        assert!(!config.directory.as_os_str().is_empty());
    }

    #[test]
    fn save_creates_directory_and_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let config = DownloadConfig {
            directory: temp.path().join("nested").join("downloads"),
            filename: DEFAULT_FILENAME.to_string(),
        };

        let first = save_image(&[1, 2, 3], &config).unwrap();
        let second = save_image(&[4, 5], &config).unwrap();
        assert_eq!(first, second);
        assert!(second.ends_with("my-image-name.png"));
        assert_eq!(fs::read(&second).unwrap(), vec![4, 5]);
    }
}
