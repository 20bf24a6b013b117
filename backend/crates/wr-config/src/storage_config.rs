use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_STORAGE_ROOT: &str = "storage";
pub const DEFAULT_BUCKET: &str = "clothes";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8000/images";

/// Local object store for processed clothing images
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Relative to the config dir
    pub root: String,
    pub bucket: String,
    /// Prefix of the URLs handed back to clients; must point at the `/images` route
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: String::from(DEFAULT_STORAGE_ROOT),
            bucket: String::from(DEFAULT_BUCKET),
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if std::path::Path::new(&self.root).is_absolute() || self.root.contains("..") {
            return Err(ConfigError::storage(
                "storage.root must be relative and cannot contain '..'",
            ));
        }

        let bucket_ok = !self.bucket.is_empty()
            && self
                .bucket
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !bucket_ok {
            return Err(ConfigError::storage(format!(
                "storage.bucket must be non-empty and use only [A-Za-z0-9_-], got '{}'",
                self.bucket
            )));
        }

        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(ConfigError::storage(
                "storage.public_base_url must be an http(s) URL",
            ));
        }

        Ok(())
    }
}
