// Cross-cutting prompt fragments for the model clients.
// Suggestion templates live in crate::suggestion::prompts.

/// System prompt that keeps the model on JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise course recommendation assistant. \
    You MUST respond with a JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT include explanations or apologies.";
