//! Course catalog: the immutable, tagged set of courses the engine works over.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::course::{Course, RawCourse};

pub mod tagger;

/// Tagged courses in ingestion order. Never modified after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Tags every raw record and builds the catalog.
    pub fn from_raw(raw: &[RawCourse]) -> Self {
        Self::new(tagger::tag_courses(raw))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Looks up a course by code, narrowing to a section when one is given.
    pub fn find(&self, course_code: &str, section: Option<&str>) -> Option<&Course> {
        self.courses.iter().find(|c| {
            c.course_code == course_code && section.map_or(true, |s| c.section == s)
        })
    }

    /// Every course whose code differs from `course`'s. Sections of the same
    /// course are excluded along with it.
    pub fn candidates_for(&self, course: &Course) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.course_code != course.course_code)
            .collect()
    }
}

/// Reads a JSON array of raw course records from `path` and tags them.
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    info!("Loading course catalog from {}", path.display());

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;

    let raw: Vec<RawCourse> = serde_json::from_str(&text)
        .with_context(|| format!("Catalog file '{}' is not a JSON array of courses", path.display()))?;

    let catalog = Catalog::from_raw(&raw);
    info!("Catalog loaded: {} courses", catalog.len());
    Ok(catalog)
}
