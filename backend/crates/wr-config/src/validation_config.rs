use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_PROMPT_LENGTH: usize = 1;
pub const MAX_PROMPT_LENGTH: usize = 4000;
pub const DEFAULT_MAX_PROMPT_LENGTH: usize = 500;

pub const MIN_FIELD_LENGTH: usize = 1;
pub const MAX_FIELD_LENGTH: usize = 1000;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 100;

pub const MIN_IMAGE_BYTES: usize = 1024;
pub const MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Input limits enforced by the REST handlers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of the freeform outfit request
    pub max_prompt_length: usize,
    /// Maximum length of name/type/color/style
    pub max_field_length: usize,
    /// Maximum decoded image size for uploads
    pub max_image_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: DEFAULT_MAX_PROMPT_LENGTH,
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_prompt_length < MIN_PROMPT_LENGTH || self.max_prompt_length > MAX_PROMPT_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_prompt_length must be {}-{}, got {}",
                MIN_PROMPT_LENGTH, MAX_PROMPT_LENGTH, self.max_prompt_length
            )));
        }

        if self.max_field_length < MIN_FIELD_LENGTH || self.max_field_length > MAX_FIELD_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_field_length must be {}-{}, got {}",
                MIN_FIELD_LENGTH, MAX_FIELD_LENGTH, self.max_field_length
            )));
        }

        if self.max_image_bytes < MIN_IMAGE_BYTES || self.max_image_bytes > MAX_IMAGE_BYTES {
            return Err(ConfigError::config(format!(
                "validation.max_image_bytes must be {}-{}, got {}",
                MIN_IMAGE_BYTES, MAX_IMAGE_BYTES, self.max_image_bytes
            )));
        }

        Ok(())
    }
}
