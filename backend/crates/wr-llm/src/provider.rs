use crate::Result as LlmErrorResult;

use async_trait::async_trait;

/// Anything that can turn a system instruction plus a user prompt into
/// completion text. The HTTP client implements it; tests substitute fakes.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> LlmErrorResult<String>;

    /// Provider label used in logs
    fn name(&self) -> &str;
}
