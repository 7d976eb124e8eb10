//! Clipboard integration for copying the whiteboard image.

use super::types::{ExportError, RasterImage};
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Copy the image to the Wayland clipboard.
///
/// Offers the PNG bytes as `image/png` through wl-clipboard-rs first. If that
/// fails, the PNG data URL is copied as plain text through the `wl-copy`
/// command so it can at least be pasted somewhere.
///
/// # Arguments
/// * `image` - Encoded surface snapshot
pub fn copy_to_clipboard(image: &RasterImage) -> Result<(), ExportError> {
    log::debug!(
        "Attempting to copy image to clipboard ({} bytes)",
        image.bytes.len()
    );

    match copy_via_library(&image.bytes) {
        Ok(()) => {
            log::info!("Copied image to clipboard via wl-clipboard-rs");
            Ok(())
        }
        Err(lib_err) => {
            log::warn!(
                "wl-clipboard-rs image copy failed ({}). Falling back to data URL text",
                lib_err
            );
            match copy_via_command(&image.to_data_url()) {
                Ok(()) => {
                    log::info!("Copied image data URL to clipboard via wl-copy");
                    Ok(())
                }
                Err(cmd_err) => Err(ExportError::Clipboard(format!(
                    "wl-clipboard-rs failed: {} ; wl-copy failed: {}",
                    lib_err, cmd_err
                ))),
            }
        }
    }
}

/// Copy PNG bytes using the wl-clipboard-rs library.
fn copy_via_library(png: &[u8]) -> Result<(), ExportError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();
    // Serve one paste, then let the background server exit
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(png.into()),
        MimeType::Specific("image/png".to_string()),
    )
    .map_err(|e| ExportError::Clipboard(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy text by shelling out to wl-copy.
fn copy_via_command(text: &str) -> Result<(), ExportError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ExportError::Clipboard(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            ExportError::Clipboard(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ExportError::Clipboard(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::Clipboard(format!("wl-copy failed: {}", stderr)));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}
