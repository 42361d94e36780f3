//! Client for the upstream vision chat-completion API.

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to upstream API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream response carried no message content")]
    EmptyResponse,
}

/// A chat-completion backend that can describe the image behind a URL.
///
/// Object-safe so the server holds an `Arc<dyn ChatClient>` and tests can
/// substitute a stub for the real API.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the fixed two-message prompt for `image_url` and return the
    /// first choice's message content verbatim.
    async fn analyze_image(&self, image_url: &str) -> Result<String, LlmError>;
}
