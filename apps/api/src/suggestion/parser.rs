//! Turns raw model text into structured suggestion stubs.
//!
//! The model is asked for a bare JSON array but routinely wraps it in a
//! ```json fence or surrounds it with prose. Fences are stripped, then the
//! first `[` ... `]` span (non-greedy) is parsed. Nothing else is accepted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::SuggestionError;

static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*").expect("fence regex pattern is hardcoded and must be valid")
});

static FIRST_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[\s\S]*?\]").expect("array regex pattern is hardcoded and must be valid")
});

/// One entry of the model's answer, not yet checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestedCourse {
    pub title: String,
    pub course_code: String,
    #[serde(default)]
    pub meeting_time: Option<String>,
}

/// Removes every ```json opening marker and every bare ``` fence.
pub fn strip_code_fences(text: &str) -> String {
    FENCE_OPEN
        .replace_all(text, "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// The first bracketed span in `text`, ending at the first `]` after the `[`.
pub fn extract_first_array(text: &str) -> Option<&str> {
    FIRST_ARRAY.find(text).map(|m| m.as_str())
}

/// Sanitizes and parses a model response into suggestion stubs, in model order.
pub fn parse_suggestions(response: &str) -> Result<Vec<SuggestedCourse>, SuggestionError> {
    let cleaned = strip_code_fences(response);

    let array = extract_first_array(&cleaned).ok_or_else(|| {
        SuggestionError::MalformedResponse("no JSON array found in model response".to_string())
    })?;

    serde_json::from_str(array).map_err(|e| {
        SuggestionError::MalformedResponse(format!("suggestion array is not valid JSON: {e}"))
    })
}
