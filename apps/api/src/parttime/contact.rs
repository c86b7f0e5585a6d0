//! Contact parsing for part-time postings.
//!
//! Users type a phone number, a QQ number or a WeChat id into a single free-text
//! field. Classification runs in a fixed order: phone, QQ, WeChat, then
//! `other`. Phone must come before QQ because every 11-digit phone number is
//! also a valid QQ-length number.
//!
//! Numeric shapes are matched with all whitespace removed ("138 1234 5678").
//! WeChat ids and unrecognized text are only trimmed, so "call me" never
//! collapses into a handle.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parttime::validation::{check_length, ValidationError};

pub const CONTACT_MAX_CHARS: usize = 100;

static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[0-9]{10}$").unwrap());

static RE_QQ: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5,12}$").unwrap());

// Letter requirement is checked separately, the regex crate has no lookahead.
static RE_WECHAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{6,20}$").unwrap());

const UNRECOGNIZED_MESSAGE: &str =
    "联系方式格式不正确，请填写11位手机号、5-12位QQ号，或6-20位微信号（字母、数字、下划线，且至少包含一个字母）";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Qq,
    Wechat,
    Other,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::Qq => "qq",
            ContactMethod::Wechat => "wechat",
            ContactMethod::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub method: ContactMethod,
    /// Exactly what the user typed.
    pub raw: String,
    /// Phone and QQ: `raw` without any whitespace. Otherwise `raw` trimmed.
    /// Digits and letters are untouched.
    pub normalized: String,
}

/// Checks that `raw` is a contact string the portal accepts.
pub fn validate_contact(raw: &str) -> Result<(), ValidationError> {
    check_length("contact", "联系方式", raw, CONTACT_MAX_CHARS)?;

    match classify(raw).0 {
        ContactMethod::Other => Err(ValidationError::unrecognized(
            "contact",
            UNRECOGNIZED_MESSAGE,
        )),
        _ => Ok(()),
    }
}

/// Derives a [`ContactInfo`] from user input. Never fails: shapes that match
/// none of the known methods land in [`ContactMethod::Other`].
pub fn parse_contact(raw: &str) -> ContactInfo {
    let (method, normalized) = classify(raw);
    ContactInfo {
        method,
        raw: raw.to_string(),
        normalized,
    }
}

fn classify(raw: &str) -> (ContactMethod, String) {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if RE_PHONE.is_match(&digits) {
        return (ContactMethod::Phone, digits);
    }
    if RE_QQ.is_match(&digits) {
        return (ContactMethod::Qq, digits);
    }

    let trimmed = raw.trim();
    let method = if RE_WECHAT.is_match(trimmed) && trimmed.chars().any(|c| c.is_ascii_alphabetic())
    {
        ContactMethod::Wechat
    } else {
        ContactMethod::Other
    };
    (method, trimmed.to_string())
}
