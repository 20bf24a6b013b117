pub mod chat_completion_client;
pub mod error;
pub mod outfit_advisor;
pub mod provider;


pub use chat_completion_client::{ChatCompletionClient, ChatCompletionSettings};
pub use error::{LlmError, Result};
pub use outfit_advisor::OutfitAdvisor;
pub use provider::CompletionProvider;
