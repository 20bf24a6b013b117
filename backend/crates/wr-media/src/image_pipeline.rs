use crate::{BackgroundRemover, MediaError, ObjectStore, Result as MediaErrorResult};

use std::panic::Location;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

const MAX_FILE_NAME_CHARS: usize = 100;
const FALLBACK_FILE_NAME: &str = "image";
const NONCE_LEN: usize = 8;

/// An image as received from the client
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Background removal followed by upload.
#[derive(Clone)]
pub struct ImagePipeline {
    remover: Arc<dyn BackgroundRemover>,
    store: Arc<dyn ObjectStore>,
}

impl ImagePipeline {
    pub fn new(remover: Arc<dyn BackgroundRemover>, store: Arc<dyn ObjectStore>) -> Self {
        Self { remover, store }
    }

    /// Returns the public URL of the processed image.
    ///
    /// An uploaded file is left in place if a later step fails.
    pub async fn process(&self, user_id: Uuid, upload: ImageUpload) -> MediaErrorResult<String> {
        if upload.bytes.is_empty() {
            return Err(MediaError::EmptyImage {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let processed = self
            .remover
            .remove_background(upload.bytes, &upload.content_type)
            .await?;

        let path = storage_path(user_id, &upload.file_name, Utc::now());

        let url = self
            .store
            .upload(&path, processed.bytes, &processed.content_type)
            .await?;

        log::info!("Processed image for user {} stored at {}", user_id, path);

        Ok(url)
    }
}

/// `<user_id>/<unix_millis>_<random hex>_<sanitized file name>`
///
/// The random segment keeps same-name uploads in the same millisecond apart.
pub fn storage_path(user_id: Uuid, file_name: &str, at: DateTime<Utc>) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    format!(
        "{}/{}_{}_{}",
        user_id,
        at.timestamp_millis(),
        &nonce[..NONCE_LEN],
        sanitize_file_name(file_name)
    )
}

/// Keeps the last path segment and replaces anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILE_NAME_CHARS)
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}
