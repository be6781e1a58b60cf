//! Tagger: derives the deterministic tag set for a raw course record.
//!
//! Order of the produced tags is fixed: department, distributions, professors,
//! then topic keywords.

use crate::models::course::{Course, RawCourse, Tag, TagCategory};

/// Title words must be longer than this (in characters) to become topic tags.
const TOPIC_MIN_LEN_EXCLUSIVE: usize = 4;
/// At most this many topic tags per course, taken from the front of the title.
const MAX_TOPIC_TAGS: usize = 3;

/// Builds a tagged `Course` from a raw record. Never fails.
pub fn tag_course(raw: &RawCourse) -> Course {
    let mut tags = Vec::new();

    if let Some(dept) = raw.course_code.split_whitespace().next() {
        tags.push(Tag::new(dept, TagCategory::Department));
    }

    tags.extend(
        split_list(&raw.distribution).map(|d| Tag::new(d, TagCategory::Distribution)),
    );
    tags.extend(split_list(&raw.professor).map(|p| Tag::new(p, TagCategory::Professor)));
    tags.extend(topic_keywords(&raw.title).map(|w| Tag::new(w, TagCategory::Topic)));

    Course {
        course_code: raw.course_code.clone(),
        section: raw.section.clone(),
        title: raw.title.clone(),
        professor: raw.professor.clone(),
        meeting_time: raw.meeting_time.clone(),
        current_enrollment: raw.current_enrollment,
        seats_available: raw.seats_available,
        seats_total: raw.seats_total,
        distribution: raw.distribution.clone(),
        tags,
    }
}

/// Tags every record, preserving input order.
pub fn tag_courses(raw: &[RawCourse]) -> Vec<Course> {
    raw.iter().map(tag_course).collect()
}

/// Comma-separated list: trimmed, empty segments dropped.
fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn topic_keywords(title: &str) -> impl Iterator<Item = String> + '_ {
    title
        .split_whitespace()
        .filter(|w| w.chars().count() > TOPIC_MIN_LEN_EXCLUSIVE)
        .take(MAX_TOPIC_TAGS)
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &str, title: &str, professor: &str, distribution: &str) -> RawCourse {
        RawCourse {
            course_code: code.to_string(),
            section: "01".to_string(),
            title: title.to_string(),
            professor: professor.to_string(),
            meeting_time: "TF 11:20-12:35".to_string(),
            current_enrollment: 10,
            seats_available: 15,
            seats_total: 25,
            distribution: distribution.to_string(),
        }
    }

    fn ids(course: &Course, category: TagCategory) -> Vec<&str> {
        course
            .tags
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn test_department_is_first_token_of_code() {
        let course = tag_course(&raw("HIST 201", "Rome", "", ""));
        assert_eq!(ids(&course, TagCategory::Department), vec!["HIST"]);
    }

    #[test]
    fn test_empty_course_code_yields_no_department() {
        let course = tag_course(&raw("", "Rome", "", ""));
        assert!(ids(&course, TagCategory::Department).is_empty());
    }

    #[test]
    fn test_empty_distribution_yields_no_tags() {
        let course = tag_course(&raw("HIST 201", "Rome", "", ""));
        assert!(ids(&course, TagCategory::Distribution).is_empty());
    }

    #[test]
    fn test_distribution_split_and_trimmed() {
        let course = tag_course(&raw("HIST 201", "Rome", "", "HS, EC"));
        assert_eq!(ids(&course, TagCategory::Distribution), vec!["HS", "EC"]);
    }

    #[test]
    fn test_distribution_drops_empty_segments() {
        let course = tag_course(&raw("HIST 201", "Rome", "", "HS,, ,EC,"));
        assert_eq!(ids(&course, TagCategory::Distribution), vec!["HS", "EC"]);
    }

    #[test]
    fn test_multiple_professors() {
        let course = tag_course(&raw("HIST 201", "Rome", "Guy Rogers, Jane Doe", ""));
        assert_eq!(
            ids(&course, TagCategory::Professor),
            vec!["Guy Rogers", "Jane Doe"]
        );
    }

    #[test]
    fn test_topic_keeps_first_three_long_words_lowercased() {
        let course = tag_course(&raw(
            "HIST 201",
            "The Roman Empire and Culture, Religion Society",
            "",
            "",
        ));
        assert_eq!(
            ids(&course, TagCategory::Topic),
            vec!["roman", "empire", "culture,"]
        );
    }

    #[test]
    fn test_topic_ignores_words_of_exactly_four_chars() {
        let course = tag_course(&raw("ARTH 100", "Art from Asia", "", ""));
        assert!(ids(&course, TagCategory::Topic).is_empty());
    }

    #[test]
    fn test_tag_order_is_stable() {
        let course = tag_course(&raw("HIST 201", "Ancient Greece", "Guy Rogers", "HS"));
        let categories: Vec<TagCategory> = course.tags.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                TagCategory::Department,
                TagCategory::Distribution,
                TagCategory::Professor,
                TagCategory::Topic,
                TagCategory::Topic,
            ]
        );
    }

    #[test]
    fn test_tagging_copies_fields_unchanged() {
        let input = raw("HIST 201", "Ancient Greece", "Guy Rogers", "HS");
        let course = tag_course(&input);
        assert_eq!(course.course_code, input.course_code);
        assert_eq!(course.section, input.section);
        assert_eq!(course.meeting_time, input.meeting_time);
        assert_eq!(course.seats_total, 25);
    }
}
