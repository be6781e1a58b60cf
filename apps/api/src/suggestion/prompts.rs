// Prompt templates for alternative-course suggestions.
//
// All three templates share one slot contract ({TITLE}, {CODE}, {MEETING_TIME},
// {CANDIDATES}) and ask for the same JSON array shape, so the parse/validate
// pipeline is identical whichever one is chosen.

use serde::{Deserialize, Serialize};

use crate::models::course::Course;

/// Which emphasis the model is asked to apply when picking alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// Generic similarity in topic, department and meeting time.
    #[default]
    Base,
    /// Meeting-time overlap first, then topic.
    #[serde(alias = "timeFocused")]
    TimeFocused,
    /// Topic and keyword overlap over department or time.
    #[serde(alias = "topicFocused")]
    TopicFocused,
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 3] = [Self::Base, Self::TimeFocused, Self::TopicFocused];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::TimeFocused => "time_focused",
            Self::TopicFocused => "topic_focused",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "base" => Some(Self::Base),
            "time_focused" | "timeFocused" => Some(Self::TimeFocused),
            "topic_focused" | "topicFocused" => Some(Self::TopicFocused),
            _ => None,
        }
    }

    pub fn template(&self) -> &'static PromptTemplate {
        match self {
            Self::Base => &BASE,
            Self::TimeFocused => &TIME_FOCUSED,
            Self::TopicFocused => &TOPIC_FOCUSED,
        }
    }
}

/// Values for the four template slots.
#[derive(Debug, Clone)]
pub struct PromptSlots<'a> {
    pub title: &'a str,
    pub code: &'a str,
    pub meeting_time: &'a str,
    pub candidates: String,
}

impl<'a> PromptSlots<'a> {
    /// Slots for `course`, listing `pool` one course per line.
    pub fn for_course(course: &'a Course, pool: &[&Course]) -> Self {
        Self {
            title: &course.title,
            code: &course.course_code,
            meeting_time: &course.meeting_time,
            candidates: pool
                .iter()
                .map(|c| format!("- {}", c.display_line()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A fixed prompt with named slots.
#[derive(Debug)]
pub struct PromptTemplate {
    pub variant: PromptVariant,
    body: &'static str,
}

impl PromptTemplate {
    pub const TITLE: &'static str = "{TITLE}";
    pub const CODE: &'static str = "{CODE}";
    pub const MEETING_TIME: &'static str = "{MEETING_TIME}";
    pub const CANDIDATES: &'static str = "{CANDIDATES}";

    /// Fills every occurrence of each slot. `{CANDIDATES}` goes last so text
    /// from course listings is never re-scanned for placeholders.
    pub fn render(&self, slots: &PromptSlots<'_>) -> String {
        self.body
            .replace(Self::TITLE, slots.title)
            .replace(Self::CODE, slots.code)
            .replace(Self::MEETING_TIME, slots.meeting_time)
            .replace(Self::CANDIDATES, &slots.candidates)
    }
}

pub static BASE: PromptTemplate = PromptTemplate {
    variant: PromptVariant::Base,
    body: r#"You are a course recommendation assistant.

The student is looking at this course:
Title: {TITLE}
Course code: {CODE}
Meeting time: {MEETING_TIME}

Other courses offered this term:
{CANDIDATES}

Suggest up to 3 courses from the list above that are most similar in topic or department and meet at similar times.
Only suggest courses that appear in the list, using their exact title and course code.
Respond with a JSON array:
[
  { "title": "Course A", "course_code": "CODE 123", "meeting_time": "MWF 10:00-11:00" }
]"#,
};

pub static TIME_FOCUSED: PromptTemplate = PromptTemplate {
    variant: PromptVariant::TimeFocused,
    body: r#"You are an academic scheduling advisor.

The student is looking at:
{TITLE} ({CODE}) ({MEETING_TIME})

Other courses offered this term:
{CANDIDATES}

Suggest up to 3 courses from the list above that fit the same time slot. Rank meeting-time overlap first and topic similarity second.
Only suggest courses that appear in the list, using their exact title and course code.
Respond with a JSON array:
[
  { "title": "Course A", "course_code": "CODE 123", "meeting_time": "MWF 10:00-11:00" }
]"#,
};

pub static TOPIC_FOCUSED: PromptTemplate = PromptTemplate {
    variant: PromptVariant::TopicFocused,
    body: r#"You are a topic-focused course advisor.

The student is looking at:
{TITLE} ({CODE}) ({MEETING_TIME})

Other courses offered this term:
{CANDIDATES}

Recommend 3 courses from the list above that share topic keywords or themes (for example culture, history, gender).
Prefer topic overlap over department or meeting time.
Only suggest courses that appear in the list, using their exact title and course code.
Respond with a JSON array:
[
  { "title": "Course A", "course_code": "CODE 123" }
]"#,
};
