pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::filtering::handlers as filter;
use crate::state::AppState;
use crate::suggestion::handlers as suggestion;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/courses", get(filter::handle_list_courses))
        .route("/api/v1/tags", get(filter::handle_list_tags))
        // Filter
        .route(
            "/api/v1/filter",
            get(filter::handle_get_filter).delete(filter::handle_clear_filter),
        )
        .route("/api/v1/filter/tags", post(filter::handle_add_tag))
        .route("/api/v1/filter/tags/:id", delete(filter::handle_remove_tag))
        // Suggestions
        .route(
            "/api/v1/suggestions",
            get(suggestion::handle_last_suggestions).post(suggestion::handle_suggest),
        )
        .with_state(state)
}
