//! Submitting the whiteboard image to a remote interpretation endpoint.

use super::types::{ExportError, RasterImage};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://test-maths.free.beeceptor.com/image";
pub const DEFAULT_USER_QUERY: &str = "image selected";
pub const DEFAULT_CONTEXT: &str = "doubt";

/// Endpoint and request fields for a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    pub endpoint: String,
    pub user_query: String,
    pub context: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_query: DEFAULT_USER_QUERY.to_string(),
            context: DEFAULT_CONTEXT.to_string(),
        }
    }
}

/// JSON body sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub user_query: String,
    pub meta: SubmitMeta,
    /// Base64-encoded PNG
    pub image_blob: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitMeta {
    pub context: String,
}

impl SubmitPayload {
    pub fn new(image: &RasterImage, config: &SubmitConfig) -> Self {
        Self {
            user_query: config.user_query.clone(),
            meta: SubmitMeta {
                context: config.context.clone(),
            },
            image_blob: image.to_base64(),
        }
    }
}

/// Status and body returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

/// POST the image once. No retry and no timeout beyond the client's defaults.
pub async fn submit_image(
    client: &reqwest::Client,
    image: &RasterImage,
    config: &SubmitConfig,
) -> Result<SubmitResponse, ExportError> {
    let payload = SubmitPayload::new(image, config);
    log::debug!(
        "Submitting image to {} ({} base64 chars)",
        config.endpoint,
        payload.image_blob.len()
    );

    let response = client
        .post(&config.endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ExportError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ExportError::Network(format!("Failed to read response body: {}", e)))?;

    if status.is_success() {
        log::info!("Submit response {}: {}", status, body);
    } else {
        log::warn!("Submit endpoint answered {}: {}", status, body);
    }

    Ok(SubmitResponse {
        status: status.as_u16(),
        body,
    })
}
