//! Axum route handlers for the Suggestion API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::filtering::engine::run_suggestions;
use crate::models::course::Course;
use crate::state::AppState;
use crate::suggestion::prompts::PromptVariant;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub course_code: String,
    pub section: Option<String>,
    /// `base`, `time_focused` or `topic_focused`; defaults to the configured variant.
    pub variant: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub course: Course,
    pub variant: PromptVariant,
    pub suggestions: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct LastSuggestionsResponse {
    pub suggestions: Vec<Course>,
}

/// POST /api/v1/suggestions
///
/// Always 200 once the course is found: a rejected or failed model answer comes
/// back as an empty `suggestions` list and leaves the stored result untouched.
/// The engine lock is not held across the model call; concurrent requests race
/// and the last validated result to finish is stored.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let variant = match request.variant.as_deref() {
        Some(name) => PromptVariant::parse(name)
            .ok_or_else(|| {
                let known: Vec<&str> = PromptVariant::ALL.iter().map(|v| v.as_str()).collect();
                AppError::Validation(format!(
                    "Unknown prompt variant '{name}', expected one of: {}",
                    known.join(", ")
                ))
            })?,
        None => state.default_variant,
    };

    let (catalog, course) = {
        let engine = state.engine.read().await;
        let course = engine
            .catalog()
            .find(&request.course_code, request.section.as_deref())
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Course {} not found", request.course_code))
            })?;
        (Arc::clone(engine.catalog()), course)
    };

    let suggestions = match run_suggestions(&catalog, &course, state.model.as_ref(), variant).await {
        Some(suggestions) => {
            state
                .engine
                .write()
                .await
                .record_suggestions(suggestions.clone());
            suggestions
        }
        None => Vec::new(),
    };

    Ok(Json(SuggestResponse {
        course,
        variant,
        suggestions,
    }))
}

/// GET /api/v1/suggestions
pub async fn handle_last_suggestions(
    State(state): State<AppState>,
) -> Json<LastSuggestionsResponse> {
    let engine = state.engine.read().await;
    Json(LastSuggestionsResponse {
        suggestions: engine.suggested_courses().to_vec(),
    })
}
