//! Requirement parsing for part-time postings.
//!
//! Posters describe who they want in free text ("男生优先,能吃苦", "Female only").
//! The gender preference is pulled out into a tag and the rest is kept as
//! display text.
//!
//! Stripping rule: each occurrence of the detected gender's keyword is removed
//! together with the separators directly after it, then the remainder is
//! trimmed of surrounding whitespace and separators. If keywords for both
//! genders appear ("男女不限") the preference is `any` and nothing is removed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parttime::validation::ValidationError;

pub const REQUIREMENTS_MAX_CHARS: usize = 200;

const SEPARATORS: &[char] = &[
    ',', '，', '、', ';', '；', ':', '：', '/', '|', '.', '。', '!', '！',
];

// `female` precedes `male` so the longer keyword wins at the same position.
static RE_GENDER_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(female|male|女|男)[\s,，、;；:：/|.。!！]*").unwrap()
});

const GENDER_KEYWORDS: &[(&str, Gender)] = &[
    ("男", Gender::Male),
    ("male", Gender::Male),
    ("女", Gender::Female),
    ("female", Gender::Female),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Any,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Any => "any",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenderRequirement {
    pub gender: Gender,
    pub extra: Option<String>,
}

/// Requirements are optional; when given they are capped at
/// [`REQUIREMENTS_MAX_CHARS`] characters with no restriction on content.
pub fn validate_requirements(raw: Option<&str>) -> Result<(), ValidationError> {
    match raw {
        Some(text) if text.chars().count() > REQUIREMENTS_MAX_CHARS => Err(
            ValidationError::too_long("requirements", "要求", REQUIREMENTS_MAX_CHARS),
        ),
        _ => Ok(()),
    }
}

/// Extracts the gender preference from free-text requirements. Total: input
/// without a recognizable preference yields [`Gender::Any`].
pub fn parse_gender_requirement(raw: Option<&str>) -> GenderRequirement {
    let Some(raw) = raw else {
        return GenderRequirement::default();
    };

    let hits: Vec<KeywordHit> = RE_GENDER_KEYWORD
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let keyword = caps.get(1)?;
            let gender = keyword_gender(keyword.as_str())?;
            let english = keyword.as_str().is_ascii();
            if english && !is_standalone_word(raw, keyword.start(), keyword.end()) {
                return None;
            }
            Some(KeywordHit {
                gender,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    let gender = match hits.first() {
        Some(first) if hits.iter().all(|hit| hit.gender == first.gender) => first.gender,
        _ => Gender::Any,
    };

    let remainder = if gender == Gender::Any {
        raw.to_string()
    } else {
        strip_hits(raw, &hits)
    };

    let trimmed = remainder.trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c));
    GenderRequirement {
        gender,
        extra: (!trimmed.is_empty()).then(|| trimmed.to_string()),
    }
}

struct KeywordHit {
    gender: Gender,
    start: usize,
    end: usize,
}

fn keyword_gender(keyword: &str) -> Option<Gender> {
    GENDER_KEYWORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(keyword))
        .map(|(_, gender)| *gender)
}

/// English keywords only count when not glued to other ASCII letters, so
/// "males" or "email" never tag a posting.
fn is_standalone_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphabetic())
        && !after.is_some_and(|c| c.is_ascii_alphabetic())
}

fn strip_hits(raw: &str, hits: &[KeywordHit]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut cursor = 0;
    for hit in hits {
        out.push_str(&raw[cursor..hit.start]);
        cursor = hit.end;
    }
    out.push_str(&raw[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parttime::validation::ValidationErrorKind;

    fn parse(raw: &str) -> GenderRequirement {
        parse_gender_requirement(Some(raw))
    }

    #[test]
    fn test_male_keyword_is_stripped() {
        assert_eq!(
            parse("男生优先,能吃苦"),
            GenderRequirement {
                gender: Gender::Male,
                extra: Some("生优先,能吃苦".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_input_is_any() {
        assert_eq!(
            parse_gender_requirement(None),
            GenderRequirement {
                gender: Gender::Any,
                extra: None,
            }
        );
    }

    #[test]
    fn test_empty_input_is_any_without_extra() {
        assert_eq!(parse(""), GenderRequirement::default());
        assert_eq!(parse("  ，"), GenderRequirement::default());
    }

    #[test]
    fn test_no_keyword_keeps_text() {
        let r = parse("  能吃苦耐劳 ");
        assert_eq!(r.gender, Gender::Any);
        assert_eq!(r.extra.as_deref(), Some("能吃苦耐劳"));
    }

    #[test]
    fn test_keyword_only_gives_no_extra() {
        let r = parse("女");
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.extra, None);
    }

    #[test]
    fn test_trailing_separators_removed_with_keyword() {
        let r = parse("能吃苦,男,细心");
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.extra.as_deref(), Some("能吃苦,细心"));

        let r = parse("能吃苦，女");
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.extra.as_deref(), Some("能吃苦"));
    }

    #[test]
    fn test_english_keywords_case_insensitive() {
        let r = parse("Female only");
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.extra.as_deref(), Some("only"));

        let r = parse("MALE, night shift");
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.extra.as_deref(), Some("night shift"));
    }

    #[test]
    fn test_female_is_not_male() {
        assert_eq!(parse("female students").gender, Gender::Female);
    }

    #[test]
    fn test_english_keyword_inside_word_ignored() {
        let r = parse("send email to apply");
        assert_eq!(r.gender, Gender::Any);
        assert_eq!(r.extra.as_deref(), Some("send email to apply"));
        assert_eq!(parse("males welcome").gender, Gender::Any);
    }

    #[test]
    fn test_english_keyword_next_to_cjk() {
        let r = parse("male优先");
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.extra.as_deref(), Some("优先"));
    }

    #[test]
    fn test_both_genders_is_any_and_unstripped() {
        let r = parse("男女不限");
        assert_eq!(r.gender, Gender::Any);
        assert_eq!(r.extra.as_deref(), Some("男女不限"));
    }

    #[test]
    fn test_repeated_keyword_all_removed() {
        let r = parse("男, 限男生");
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.extra.as_deref(), Some("限生"));
    }

    #[test]
    fn test_validate_requirements_length() {
        assert!(validate_requirements(None).is_ok());
        assert!(validate_requirements(Some("")).is_ok());
        assert!(validate_requirements(Some(&"a".repeat(200))).is_ok());
        let err = validate_requirements(Some(&"a".repeat(201))).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooLong);
        assert_eq!(err.field, "requirements");
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_value(parse("男")).unwrap();
        assert_eq!(json["gender"], "male");
        assert!(json["extra"].is_null());
    }
}
