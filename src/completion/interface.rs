use async_trait::async_trait;

/// Model used for both calls of an exchange when the request does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Interface for an external text completion provider
#[async_trait]
pub trait CompletionInterface: Send + Sync {
    /// Request a single bounded completion for the given prompt.
    /// Returns the raw completion text, whitespace included.
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, anyhow::Error>;
}
