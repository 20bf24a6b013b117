use crate::{MediaError, Result as MediaErrorResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;

/// Used when the segmentation service does not say what it returned
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

#[async_trait]
pub trait BackgroundRemover: Send + Sync {
    async fn remove_background(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> MediaErrorResult<ProcessedImage>;
}

/// Returns the upload untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughRemover;

#[async_trait]
impl BackgroundRemover for PassthroughRemover {
    async fn remove_background(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> MediaErrorResult<ProcessedImage> {
        if image.is_empty() {
            return Err(MediaError::EmptyImage {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ProcessedImage {
            bytes: image,
            content_type: content_type.to_string(),
        })
    }
}

/// Posts raw image bytes to a segmentation service and takes the response
/// body as the cut-out image.
pub struct HttpBackgroundRemover {
    endpoint: String,
    client: ReqwestClient,
}

impl HttpBackgroundRemover {
    #[track_caller]
    pub fn new(endpoint: &str, timeout: Duration) -> MediaErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BackgroundRemover for HttpBackgroundRemover {
    async fn remove_background(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> MediaErrorResult<ProcessedImage> {
        if image.is_empty() {
            return Err(MediaError::EmptyImage {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::debug!(
            "Sending {} bytes ({}) to segmentation endpoint {}",
            image.len(),
            content_type,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, content_type)
            .body(image)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::segmentation(format!(
                "segmentation endpoint returned {}",
                status.as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(MediaError::segmentation("segmentation endpoint returned no image"));
        }

        Ok(ProcessedImage {
            bytes,
            content_type,
        })
    }
}
