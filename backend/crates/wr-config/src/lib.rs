mod auth_config;
mod config;
mod database_config;
mod error;
mod llm_config;
mod log_level;
mod logging_config;
mod segmentation_config;
mod server_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use llm_config::LlmConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use segmentation_config::SegmentationConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "WR_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".wardrobe";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "wardrobe.db";
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_DEV_USER_ID: &str = "dev-user";
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
