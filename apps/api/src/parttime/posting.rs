use serde::Deserialize;

use crate::parttime::contact::{parse_contact, validate_contact};
use crate::parttime::requirements::{parse_gender_requirement, validate_requirements};
use crate::parttime::validation::{check_length, ValidationError};

pub const TITLE_MAX_CHARS: usize = 100;

/// Body of the create and update posting endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PostingInput {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub contact: String,
    pub requirements: Option<String>,
}

/// A validated posting, ready to be written by a `PostingStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingRecord {
    pub title: String,
    pub description: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub contact: String,
    pub contact_method: String,
    pub contact_normalized: String,
    pub requirements: Option<String>,
    pub gender: String,
    pub requirement_extra: Option<String>,
}

/// Validates every user-entered field and derives the stored display values.
/// The first invalid field rejects the whole posting.
pub fn prepare_posting(input: PostingInput) -> Result<PostingRecord, ValidationError> {
    let title = input.title.trim();
    check_length("title", "标题", title, TITLE_MAX_CHARS)?;
    validate_contact(&input.contact)?;
    let requirements = input.requirements.filter(|r| !r.trim().is_empty());
    validate_requirements(requirements.as_deref())?;

    let contact = parse_contact(&input.contact);
    let gender = parse_gender_requirement(requirements.as_deref());

    Ok(PostingRecord {
        title: title.to_string(),
        description: non_blank(input.description),
        salary: non_blank(input.salary),
        location: non_blank(input.location),
        contact: contact.raw,
        contact_method: contact.method.as_str().to_string(),
        contact_normalized: contact.normalized,
        requirements,
        gender: gender.gender.as_str().to_string(),
        requirement_extra: gender.extra,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) fn sample_input() -> PostingInput {
    PostingInput {
        title: "图书馆整理员".to_string(),
        description: Some("周末两天，每天4小时".to_string()),
        salary: Some("20元/小时".to_string()),
        location: None,
        contact: "138 1234 5678".to_string(),
        requirements: Some("女生优先，细心".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parttime::validation::ValidationErrorKind;

    #[test]
    fn test_prepare_derives_display_values() {
        let record = prepare_posting(sample_input()).unwrap();
        assert_eq!(record.title, "图书馆整理员");
        assert_eq!(record.contact, "138 1234 5678");
        assert_eq!(record.contact_method, "phone");
        assert_eq!(record.contact_normalized, "13812345678");
        assert_eq!(record.gender, "female");
        assert_eq!(record.requirement_extra.as_deref(), Some("生优先，细心"));
        assert_eq!(record.location, None);
    }

    #[test]
    fn test_missing_requirements_is_any() {
        let mut input = sample_input();
        input.requirements = Some("   ".to_string());
        let record = prepare_posting(input).unwrap();
        assert_eq!(record.requirements, None);
        assert_eq!(record.gender, "any");
        assert_eq!(record.requirement_extra, None);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut input = sample_input();
        input.title = " ".to_string();
        let err = prepare_posting(input).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.kind, ValidationErrorKind::Empty);
    }

    #[test]
    fn test_title_length_ignores_surrounding_spaces() {
        let mut input = sample_input();
        input.title = format!(" {} ", "兼".repeat(TITLE_MAX_CHARS));
        let record = prepare_posting(input).unwrap();
        assert_eq!(record.title.chars().count(), TITLE_MAX_CHARS);

        let mut input = sample_input();
        input.title = "兼".repeat(TITLE_MAX_CHARS + 1);
        let err = prepare_posting(input).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooLong);
    }

    #[test]
    fn test_bad_contact_rejects_whole_posting() {
        let mut input = sample_input();
        input.contact = "call me".to_string();
        let err = prepare_posting(input).unwrap_err();
        assert_eq!(err.field, "contact");
        assert_eq!(err.kind, ValidationErrorKind::UnrecognizedFormat);
    }

    #[test]
    fn test_long_requirements_rejected() {
        let mut input = sample_input();
        input.requirements = Some("细".repeat(201));
        let err = prepare_posting(input).unwrap_err();
        assert_eq!(err.field, "requirements");
        assert_eq!(err.kind, ValidationErrorKind::TooLong);
    }
}
