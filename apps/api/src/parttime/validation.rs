use thiserror::Error;

/// What went wrong with a user-entered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Empty,
    TooLong,
    UnrecognizedFormat,
}

impl ValidationErrorKind {
    /// Error code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::Empty => "EMPTY",
            ValidationErrorKind::TooLong => "TOO_LONG",
            ValidationErrorKind::UnrecognizedFormat => "UNRECOGNIZED_FORMAT",
        }
    }
}

/// A rejected posting field. `message` is shown to the end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn empty(field: &'static str, label: &str) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::Empty,
            message: format!("{label}不能为空"),
        }
    }

    pub fn too_long(field: &'static str, label: &str, max_chars: usize) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::TooLong,
            message: format!("{label}长度不能超过{max_chars}个字符"),
        }
    }

    pub fn unrecognized(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::UnrecognizedFormat,
            message: message.into(),
        }
    }
}

/// Rejects blank input and input longer than `max_chars` characters.
pub fn check_length(
    field: &'static str,
    label: &str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty(field, label));
    }
    if value.chars().count() > max_chars {
        return Err(ValidationError::too_long(field, label, max_chars));
    }
    Ok(())
}
