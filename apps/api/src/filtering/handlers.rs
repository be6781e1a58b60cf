//! Axum route handlers for the catalog and the tag filter.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::filtering::engine::FilterEngine;
use crate::models::course::{Course, Tag};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub total: usize,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub active_tags: Vec<Tag>,
    pub total: usize,
    pub courses: Vec<Course>,
}

impl FilterResponse {
    fn snapshot(engine: &FilterEngine) -> Self {
        let courses: Vec<Course> = engine.filtered_courses().into_iter().cloned().collect();
        Self {
            active_tags: engine.active_tags().to_vec(),
            total: courses.len(),
            courses,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<CoursesResponse> {
    let engine = state.engine.read().await;
    let courses = engine.catalog().courses().to_vec();
    Json(CoursesResponse {
        total: courses.len(),
        courses,
    })
}

/// GET /api/v1/tags
///
/// Tag vocabulary: one entry per tag id, first category seen in the catalog.
pub async fn handle_list_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    let engine = state.engine.read().await;
    Json(TagsResponse {
        tags: engine.vocabulary().to_vec(),
    })
}

/// GET /api/v1/filter
pub async fn handle_get_filter(State(state): State<AppState>) -> Json<FilterResponse> {
    let engine = state.engine.read().await;
    Json(FilterResponse::snapshot(&engine))
}

/// POST /api/v1/filter/tags
pub async fn handle_add_tag(
    State(state): State<AppState>,
    Json(tag): Json<Tag>,
) -> Result<Json<FilterResponse>, AppError> {
    if tag.id.trim().is_empty() {
        return Err(AppError::Validation("tag id cannot be empty".to_string()));
    }

    let mut engine = state.engine.write().await;
    engine.add_tag(tag);
    Ok(Json(FilterResponse::snapshot(&engine)))
}

/// DELETE /api/v1/filter/tags/:id
///
/// Removal is keyed by id alone; unknown ids are a no-op.
pub async fn handle_remove_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<FilterResponse> {
    let mut engine = state.engine.write().await;
    engine.remove_tag(&id);
    Json(FilterResponse::snapshot(&engine))
}

/// DELETE /api/v1/filter
pub async fn handle_clear_filter(State(state): State<AppState>) -> Json<FilterResponse> {
    let mut engine = state.engine.write().await;
    engine.clear_tags();
    Json(FilterResponse::snapshot(&engine))
}
