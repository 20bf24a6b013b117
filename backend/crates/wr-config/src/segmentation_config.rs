use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_SEGMENTATION_TIMEOUT_SECS: u64 = 60;

/// Remote background-removal service. Images pass through untouched when disabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            timeout_secs: DEFAULT_SEGMENTATION_TIMEOUT_SECS,
        }
    }
}

impl SegmentationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::segmentation(
                "segmentation.timeout_secs must be greater than 0",
            ));
        }

        if !self.enabled {
            return Ok(());
        }

        match self.endpoint.as_deref() {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(()),
            Some(url) => Err(ConfigError::segmentation(format!(
                "segmentation.endpoint must be an http(s) URL, got '{}'",
                url
            ))),
            None => Err(ConfigError::segmentation(
                "segmentation.enabled requires segmentation.endpoint",
            )),
        }
    }
}
