use crate::{
    AuthConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LlmConfig, LoggingConfig, SegmentationConfig, ServerConfig, StorageConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Read when `llm.api_key` is not configured
const FALLBACK_LLM_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub storage: StorageConfig,
    pub segmentation: SegmentationConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WR_CONFIG_DIR env var, else use ./.wardrobe/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: WR_CONFIG_DIR env var > ./.wardrobe/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.llm.validate()?;
        self.storage.validate()?;
        self.segmentation.validate()?;
        self.validation.validate()?;

        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory the object store writes into and `/images` serves from
    pub fn storage_root(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.root))
    }

    /// Full log file path, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );

        info!(
            "  llm: {} model={} temperature={} timeout={}s key={}",
            self.llm.api_base,
            self.llm.model,
            self.llm.temperature,
            self.llm.timeout_secs,
            if self.llm.has_api_key() {
                "set"
            } else {
                "missing"
            }
        );

        info!(
            "  storage: root={} bucket={} url={}",
            self.storage.root, self.storage.bucket, self.storage.public_base_url
        );

        info!(
            "  segmentation: {}",
            match (
                self.segmentation.enabled,
                self.segmentation.endpoint.as_deref()
            ) {
                (true, Some(endpoint)) => endpoint,
                _ => "disabled (passthrough)",
            }
        );

        info!(
            "  validation: prompt={}, field={}, image={}B",
            self.validation.max_prompt_length,
            self.validation.max_field_length,
            self.validation.max_image_bytes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("WR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("WR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("WR_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("WR_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("WR_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "WR_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_string("WR_AUTH_DEV_USER_ID", &mut self.auth.dev_user_id);

        // Logging
        Self::apply_env_parse("WR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WR_LOG_FILE", &mut self.logging.file);

        // LLM
        Self::apply_env_string("WR_LLM_API_BASE", &mut self.llm.api_base);
        Self::apply_env_option_string("WR_LLM_API_KEY", &mut self.llm.api_key);
        Self::apply_env_string("WR_LLM_MODEL", &mut self.llm.model);
        Self::apply_env_parse("WR_LLM_TEMPERATURE", &mut self.llm.temperature);
        Self::apply_env_parse("WR_LLM_TIMEOUT_SECS", &mut self.llm.timeout_secs);
        if self.llm.api_key.is_none() {
            Self::apply_env_option_string(FALLBACK_LLM_KEY_ENV, &mut self.llm.api_key);
        }

        // Storage
        Self::apply_env_string("WR_STORAGE_ROOT", &mut self.storage.root);
        Self::apply_env_string("WR_STORAGE_BUCKET", &mut self.storage.bucket);
        Self::apply_env_string(
            "WR_STORAGE_PUBLIC_BASE_URL",
            &mut self.storage.public_base_url,
        );

        // Segmentation
        Self::apply_env_bool("WR_SEGMENTATION_ENABLED", &mut self.segmentation.enabled);
        Self::apply_env_option_string(
            "WR_SEGMENTATION_ENDPOINT",
            &mut self.segmentation.endpoint,
        );
        Self::apply_env_parse(
            "WR_SEGMENTATION_TIMEOUT_SECS",
            &mut self.segmentation.timeout_secs,
        );

        // Validation
        Self::apply_env_parse(
            "WR_VALIDATION_MAX_PROMPT_LENGTH",
            &mut self.validation.max_prompt_length,
        );
        Self::apply_env_parse(
            "WR_VALIDATION_MAX_FIELD_LENGTH",
            &mut self.validation.max_field_length,
        );
        Self::apply_env_parse(
            "WR_VALIDATION_MAX_IMAGE_BYTES",
            &mut self.validation.max_image_bytes,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
