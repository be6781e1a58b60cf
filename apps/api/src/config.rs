use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::llm_client::{gemini, LlmProvider};
use crate::suggestion::prompts::PromptVariant;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub llm_provider: LlmProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub anthropic_api_key: Option<String>,
    /// Template used when a suggestion request does not name one.
    pub default_variant: PromptVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| anyhow!("Required environment variable '{key}' is not set"))
        };

        let llm_provider = match lookup("LLM_PROVIDER") {
            Some(value) => LlmProvider::parse(&value)
                .with_context(|| format!("LLM_PROVIDER must be 'gemini' or 'anthropic', got '{value}'"))?,
            None => LlmProvider::default(),
        };

        let default_variant = match lookup("PROMPT_VARIANT") {
            Some(value) => PromptVariant::parse(&value).with_context(|| {
                format!("PROMPT_VARIANT must be base, time_focused or topic_focused, got '{value}'")
            })?,
            None => PromptVariant::default(),
        };

        Ok(Config {
            catalog_path: PathBuf::from(require("CATALOG_PATH")?),
            llm_provider,
            gemini_api_key: lookup("GEMINI_API_KEY"),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            anthropic_api_key: lookup("ANTHROPIC_API_KEY"),
            default_variant,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
