use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] wr_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] wr_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] wr_auth::AuthError),

    #[error("LLM client setup error: {0}")]
    Llm(#[from] wr_llm::LlmError),

    #[error("Media setup error: {0}")]
    Media(#[from] wr_media::MediaError),

    #[error("Metrics exporter error: {message}")]
    Metrics { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
