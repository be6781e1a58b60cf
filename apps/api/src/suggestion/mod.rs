//! Alternative-course suggestions.
//!
//! Flow: candidate pool → render prompt → model call → strip fences →
//!       extract first array → duplicate / self checks → resolve against pool.
//!
//! The pipeline reports *why* it failed through `SuggestionError`; deciding to
//! log and collapse a failure to an empty list is the caller's job
//! (see `filtering::engine::run_suggestions`).

use thiserror::Error;
use tracing::info;

use crate::catalog::Catalog;
use crate::llm_client::{CompletionModel, LlmError};
use crate::models::course::Course;

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod validator;

#[cfg(test)]
pub mod test_support;

use prompts::{PromptSlots, PromptVariant};

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Duplicate course in model response: {title} ({course_code})")]
    DuplicateSuggestion { title: String, course_code: String },

    #[error("Model suggested the input course itself ({0})")]
    SelfSuggestion(String),

    #[error("Model call failed: {0}")]
    Model(#[from] LlmError),
}

/// Asks the model for alternatives to `course` and validates the answer
/// against `catalog`.
///
/// On success every returned course exists in the catalog, has a different
/// code from `course`, and appears once.
pub async fn suggest_alternatives(
    course: &Course,
    catalog: &Catalog,
    model: &dyn CompletionModel,
    variant: PromptVariant,
) -> Result<Vec<Course>, SuggestionError> {
    let template = variant.template();
    info!(
        "Requesting alternatives for \"{}\" ({}) using prompt variant \"{}\"",
        course.title,
        course.course_code,
        template.variant.as_str()
    );

    let pool = catalog.candidates_for(course);
    let prompt = template.render(&PromptSlots::for_course(course, &pool));

    let response = model.complete(&prompt).await?;
    let parsed = parser::parse_suggestions(&response)?;
    validator::validate_suggestions(&parsed, course, &pool)
}
