use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config dir
    pub jwt_public_key_path: Option<String>,
    /// Identity used when auth is disabled and no X-User-Id header is sent
    pub dev_user_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: String::from(DEFAULT_DEV_USER_ID),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.dev_user_id.trim().is_empty() {
            return Err(ConfigError::auth("auth.dev_user_id cannot be empty"));
        }

        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(secret), _) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            (Some(_), _) => Ok(()),
            (None, Some(key_path)) => {
                let resolved = Self::resolve_key_path(config_dir, key_path)?;
                if !resolved.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        resolved.display()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Reads the RS256 public key when one is configured.
    pub fn load_public_key(&self, config_dir: &Path) -> ConfigErrorResult<Option<String>> {
        let Some(key_path) = &self.jwt_public_key_path else {
            return Ok(None);
        };

        let resolved = Self::resolve_key_path(config_dir, key_path)?;
        std::fs::read_to_string(&resolved)
            .map(Some)
            .map_err(|e| ConfigError::Io {
                path: resolved,
                source: e,
            })
    }

    fn resolve_key_path(config_dir: &Path, key_path: &str) -> ConfigErrorResult<PathBuf> {
        let path = Path::new(key_path);
        if path.is_absolute() {
            return Err(ConfigError::auth(
                "auth.jwt_public_key_path must be relative to the config directory",
            ));
        }
        if key_path.contains("..") {
            return Err(ConfigError::auth(
                "auth.jwt_public_key_path cannot contain '..'",
            ));
        }
        Ok(config_dir.join(path))
    }
}
