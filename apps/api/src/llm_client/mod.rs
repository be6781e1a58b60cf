/// LLM Client: the text-completion boundary used by the suggestion pipeline.
///
/// The rest of the service sees only `CompletionModel::complete`: a prompt goes
/// in, opaque text comes out. Parsing and validation of that text live in
/// `crate::suggestion`, never here.
///
/// Calls are single-shot: no timeout and no retry. A failed call surfaces as an
/// `LlmError` and is absorbed by the caller.
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod anthropic;
pub mod gemini;
pub mod prompts;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),
}

/// An opaque, asynchronous text-completion service.
///
/// Carried in `AppState` as `Arc<dyn CompletionModel>`.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Short label used in startup logs.
    fn name(&self) -> &str;
}

/// Which hosted model backs the suggestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    Gemini,
    Anthropic,
}

impl LlmProvider {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "anthropic" | "claude" => Some(Self::Anthropic),
            _ => None,
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => f.write_str("gemini"),
            Self::Anthropic => f.write_str("anthropic"),
        }
    }
}

/// Builds the configured client. Fails only when the provider's key is missing.
pub fn build_model(
    provider: LlmProvider,
    gemini_api_key: Option<String>,
    gemini_model: String,
    anthropic_api_key: Option<String>,
) -> Result<Arc<dyn CompletionModel>, LlmError> {
    match provider {
        LlmProvider::Gemini => {
            let key = gemini_api_key.ok_or(LlmError::MissingApiKey("GEMINI_API_KEY"))?;
            Ok(Arc::new(GeminiClient::new(key, gemini_model)))
        }
        LlmProvider::Anthropic => {
            let key = anthropic_api_key.ok_or(LlmError::MissingApiKey("ANTHROPIC_API_KEY"))?;
            Ok(Arc::new(AnthropicClient::new(key)))
        }
    }
}

/// Reads an error body as `{"error": {"message": ...}}`, falling back to the raw text.
/// Both Gemini and Anthropic use this envelope.
fn api_error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: EnvelopeBody,
    }

    #[derive(Deserialize)]
    struct EnvelopeBody {
        message: String,
    }

    serde_json::from_str::<Envelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
