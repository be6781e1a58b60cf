//! Filter Engine: the active tag selection over a fixed catalog.
//!
//! Active tags are de-duplicated by `id` alone (first category seen wins), while
//! matching a course requires both `id` and `category` to agree. Removal is
//! likewise keyed by `id`. The visible subset is never stored; it is recomputed
//! from (catalog, active tags) on every read.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::llm_client::CompletionModel;
use crate::models::course::{Course, Tag};
use crate::suggestion::prompts::PromptVariant;
use crate::suggestion::suggest_alternatives;

#[derive(Debug)]
pub struct FilterEngine {
    catalog: Arc<Catalog>,
    vocabulary: Vec<Tag>,
    active_tags: Vec<Tag>,
    suggested: Vec<Course>,
}

impl FilterEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let vocabulary = build_vocabulary(&catalog);
        Self {
            catalog,
            vocabulary,
            active_tags: Vec::new(),
            suggested: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Every tag seen in the catalog, first occurrence per `id`.
    pub fn vocabulary(&self) -> &[Tag] {
        &self.vocabulary
    }

    pub fn active_tags(&self) -> &[Tag] {
        &self.active_tags
    }

    /// Activates `tag` unless a tag with the same `id` is already active.
    pub fn add_tag(&mut self, tag: Tag) {
        if !self.active_tags.iter().any(|t| t.id == tag.id) {
            self.active_tags.push(tag);
        }
        self.log_recompute();
    }

    /// Deactivates the tag with this `id`, whatever its category.
    pub fn remove_tag(&mut self, id: &str) {
        self.active_tags.retain(|t| t.id != id);
        self.log_recompute();
    }

    pub fn clear_tags(&mut self) {
        self.active_tags.clear();
        debug!("Filter cleared: {} courses visible", self.catalog.len());
    }

    /// Courses carrying every active tag, in catalog order.
    pub fn filtered_courses(&self) -> Vec<&Course> {
        filter_courses(self.catalog.courses(), &self.active_tags)
    }

    /// The result of the most recent suggestion call, empty before the first.
    pub fn suggested_courses(&self) -> &[Course] {
        &self.suggested
    }

    /// Replaces the stored suggestion result with a validated one, empty
    /// included. Last write wins.
    pub fn record_suggestions(&mut self, suggestions: Vec<Course>) {
        self.suggested = suggestions;
    }

    fn log_recompute(&self) {
        debug!(
            "Filter recomputed: {} active tags, {} courses visible",
            self.active_tags.len(),
            self.filtered_courses().len()
        );
    }
}

/// A course passes when, for every active tag, it carries a tag equal in both
/// `id` and `category`. No active tags passes everything.
pub fn filter_courses<'a>(courses: &'a [Course], active: &[Tag]) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| active.iter().all(|tag| course.has_tag(tag)))
        .collect()
}

/// The boundary at which every suggestion failure is logged and absorbed.
///
/// `Some` carries a validated result (possibly empty) that should replace the
/// stored one; `None` means the call failed and the stored result stays.
pub async fn run_suggestions(
    catalog: &Catalog,
    course: &Course,
    model: &dyn CompletionModel,
    variant: PromptVariant,
) -> Option<Vec<Course>> {
    match suggest_alternatives(course, catalog, model, variant).await {
        Ok(suggestions) => {
            info!(
                "Suggested {} alternatives for {}: {:?}",
                suggestions.len(),
                course.course_code,
                suggestions
                    .iter()
                    .map(Course::display_line)
                    .collect::<Vec<_>>()
            );
            Some(suggestions)
        }
        Err(e) => {
            error!(
                "Suggestion for {} ({}) failed: {e}",
                course.course_code,
                variant.as_str()
            );
            None
        }
    }
}

fn build_vocabulary(catalog: &Catalog) -> Vec<Tag> {
    let mut seen = HashSet::new();
    catalog
        .courses()
        .iter()
        .flat_map(|c| c.tags.iter())
        .filter(|t| seen.insert(t.id.clone()))
        .cloned()
        .collect()
}
