//! Input validation for task fields.
//!
//! All checks run before any mutation so that a rejected create or edit
//! leaves the task collection untouched. Lengths are counted in characters,
//! not bytes, so accented titles get the same budget as ASCII ones.

use chrono::NaiveDate;
use thiserror::Error;

/// Maximum number of characters in a task title.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum number of characters in a task description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Canonical calendar date format used for display, storage and input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title is too long: {actual} characters (max {max})")]
    TitleTooLong { max: usize, actual: usize },
    #[error("Description is too long: {actual} characters (max {max})")]
    DescriptionTooLong { max: usize, actual: usize },
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown status '{0}'")]
    InvalidStatus(String),
    #[error("Unknown difficulty '{0}'")]
    InvalidDifficulty(String),
    #[error("Unknown sort key '{0}'")]
    InvalidSortKey(String),
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let actual = title.chars().count();
    if actual > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong { max: MAX_TITLE_LEN, actual });
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let actual = description.chars().count();
    if actual > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
            actual,
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parses an optional date where an empty input means "no date".
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
        assert!(validate_title(&"a".repeat(MAX_TITLE_LEN)).is_ok());
        assert_eq!(
            validate_title(&"a".repeat(MAX_TITLE_LEN + 1)),
            Err(ValidationError::TitleTooLong { max: 100, actual: 101 })
        );
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 100 two-byte characters still fit.
        assert!(validate_title(&"ñ".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(matches!(
            validate_description(&"d".repeat(MAX_DESCRIPTION_LEN + 1)),
            Err(ValidationError::DescriptionTooLong { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("14/10/2026").is_err());
        assert_eq!(parse_optional_date("  ").unwrap(), None);
    }
}
