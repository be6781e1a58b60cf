use std::collections::HashSet;

use tracing::{debug, warn};

use super::parser::SuggestedCourse;
use super::SuggestionError;
use crate::models::course::Course;

/// Checks parsed suggestions against the input course and the candidate pool.
///
/// Fatal (the whole answer is rejected):
/// - two entries with the same `(title, course_code)`
/// - an entry carrying the input course's own code
///
/// Non-fatal: an entry with no pool course of identical title AND code is
/// dropped with a warning.
///
/// Returns the real catalog courses in the order the model listed them.
pub fn validate_suggestions(
    parsed: &[SuggestedCourse],
    input: &Course,
    pool: &[&Course],
) -> Result<Vec<Course>, SuggestionError> {
    check_unique_and_not_self(parsed, input)?;

    Ok(parsed
        .iter()
        .filter_map(|s| {
            let found = resolve(s, pool);
            match (found, s.meeting_time.as_deref()) {
                (None, _) => {
                    warn!("Suggested course not in catalog: {} | {}", s.title, s.course_code)
                }
                (Some(course), Some(reported)) if reported != course.meeting_time => debug!(
                    "Model reported meeting time \"{}\" for {}; catalog has \"{}\"",
                    reported, course.course_code, course.meeting_time
                ),
                _ => {}
            }
            found
        })
        .cloned()
        .collect())
}

fn check_unique_and_not_self(
    parsed: &[SuggestedCourse],
    input: &Course,
) -> Result<(), SuggestionError> {
    let mut seen = HashSet::new();
    for s in parsed {
        if !seen.insert((s.title.as_str(), s.course_code.as_str())) {
            return Err(SuggestionError::DuplicateSuggestion {
                title: s.title.clone(),
                course_code: s.course_code.clone(),
            });
        }
        if s.course_code == input.course_code {
            return Err(SuggestionError::SelfSuggestion(s.course_code.clone()));
        }
    }
    Ok(())
}

/// First pool course with exactly this title and code.
fn resolve<'a>(suggestion: &SuggestedCourse, pool: &[&'a Course]) -> Option<&'a Course> {
    pool.iter()
        .copied()
        .find(|c| c.title == suggestion.title && c.course_code == suggestion.course_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::course::RawCourse;

    fn catalog() -> Catalog {
        let raw = |code: &str, section: &str, title: &str| RawCourse {
            course_code: code.to_string(),
            section: section.to_string(),
            title: title.to_string(),
            ..Default::default()
        };
        Catalog::from_raw(&[
            raw("HIST 201", "01", "Ancient Greece"),
            raw("CLCV 102", "01", "Greek Mythology"),
            raw("HIST 202", "01", "Ancient Rome"),
            raw("HIST 202", "02", "Ancient Rome"),
        ])
    }

    fn stub(title: &str, code: &str) -> SuggestedCourse {
        SuggestedCourse {
            title: title.to_string(),
            course_code: code.to_string(),
            meeting_time: None,
        }
    }

    #[test]
    fn test_valid_suggestions_resolve_in_model_order() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let parsed = vec![stub("Ancient Rome", "HIST 202"), stub("Greek Mythology", "CLCV 102")];

        let result = validate_suggestions(&parsed, input, &pool).unwrap();
        let codes: Vec<&str> = result.iter().map(|c| c.course_code.as_str()).collect();
        assert_eq!(codes, vec!["HIST 202", "CLCV 102"]);
    }

    #[test]
    fn test_resolves_to_first_matching_section() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let result = validate_suggestions(&[stub("Ancient Rome", "HIST 202")], input, &pool).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].section, "01");
    }

    #[test]
    fn test_duplicate_rejects_everything() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let parsed = vec![
            stub("Greek Mythology", "CLCV 102"),
            stub("Ancient Rome", "HIST 202"),
            stub("Greek Mythology", "CLCV 102"),
        ];
        let err = validate_suggestions(&parsed, input, &pool).unwrap_err();
        assert!(matches!(err, SuggestionError::DuplicateSuggestion { .. }));
    }

    #[test]
    fn test_same_code_different_title_is_not_duplicate() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let parsed = vec![stub("Ancient Rome", "HIST 202"), stub("Roman Empire", "HIST 202")];
        let result = validate_suggestions(&parsed, input, &pool).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_self_suggestion_rejects_everything() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let parsed = vec![stub("Greek Mythology", "CLCV 102"), stub("Anything", "HIST 201")];
        let err = validate_suggestions(&parsed, input, &pool).unwrap_err();
        assert!(matches!(err, SuggestionError::SelfSuggestion(code) if code == "HIST 201"));
    }

    #[test]
    fn test_unknown_course_is_dropped() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let parsed = vec![
            stub("Underwater Basket Weaving", "ART 999"),
            stub("Greek Mythology", "CLCV 102"),
        ];
        let result = validate_suggestions(&parsed, input, &pool).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Greek Mythology");
    }

    #[test]
    fn test_title_must_match_exactly() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        let result =
            validate_suggestions(&[stub("greek mythology", "CLCV 102")], input, &pool).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_parse_gives_empty_result() {
        let catalog = catalog();
        let input = &catalog.courses()[0];
        let pool = catalog.candidates_for(input);
        assert!(validate_suggestions(&[], input, &pool).unwrap().is_empty());
    }
}
