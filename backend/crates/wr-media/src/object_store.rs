use crate::{MediaError, Result as MediaErrorResult};

use std::panic::Location;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use error_location::ErrorLocation;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `path` and returns the public URL
    async fn upload(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> MediaErrorResult<String>;
}

/// Files under `<root>/<bucket>/`, served by the HTTP layer at `public_base_url`
pub struct LocalObjectStore {
    root: PathBuf,
    bucket: String,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>, bucket: &str, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            bucket: bucket.trim_matches('/').to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, path)
    }

    /// Rejects absolute paths and any `..` segment
    #[track_caller]
    fn object_path(&self, path: &str) -> MediaErrorResult<PathBuf> {
        let relative = Path::new(path);
        let is_plain = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !is_plain {
            return Err(MediaError::InvalidPath {
                path: path.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.root.join(&self.bucket).join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> MediaErrorResult<String> {
        let target = self.object_path(path)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MediaError::storage(parent.to_path_buf(), e))?;
        }

        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| MediaError::storage(target.clone(), e))?;

        log::debug!(
            "Stored {} bytes ({}) at {}",
            bytes.len(),
            content_type,
            target.display()
        );

        Ok(self.public_url(path))
    }
}
