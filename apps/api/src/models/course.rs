use serde::{Deserialize, Deserializer, Serialize};

/// Which attribute of a course a tag was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    Department,
    Distribution,
    Professor,
    Topic,
}

/// A labeled attribute attached to a course. Identity is the `(id, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub category: TagCategory,
}

impl Tag {
    pub fn new(id: impl Into<String>, category: TagCategory) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

/// A course record as it arrives from catalog ingestion, before tagging.
///
/// `professor` and `distribution` are frequently null or missing in exported
/// catalogs; both normalize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCourse {
    pub course_code: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub section: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub professor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meeting_time: String,
    #[serde(default)]
    pub current_enrollment: u32,
    #[serde(default)]
    pub seats_available: u32,
    #[serde(default)]
    pub seats_total: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub distribution: String,
}

/// A tagged course. Only the tagger constructs these, so `tags` is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub course_code: String,
    pub section: String,
    pub title: String,
    pub professor: String,
    pub meeting_time: String,
    pub current_enrollment: u32,
    pub seats_available: u32,
    pub seats_total: u32,
    pub distribution: String,
    pub tags: Vec<Tag>,
}

impl Course {
    /// `title (code) (meeting_time)`, the form courses take in prompts and logs.
    pub fn display_line(&self) -> String {
        format!(
            "{} ({}) ({})",
            self.title, self.course_code, self.meeting_time
        )
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Some exports store sections as bare numbers ("section": 1).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "section must be a string or number, got {other}"
        ))),
    }
}
