//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: table, organization, task title, committee role
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, comments, remarks
pub const MAX_NOTE_LEN: usize = 500;

/// Raw import text
pub const MAX_IMPORT_LEN: usize = 1024 * 1024;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Table numbers start at 1
pub fn validate_table_number(table_number: u32) -> Result<(), AppError> {
    if table_number == 0 {
        return Err(AppError::with_message(
            ErrorCode::TableNumberInvalid,
            "tableNumber must be at least 1",
        )
        .with_detail("tableNumber", table_number));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("主桌", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        // Length counts characters, not bytes
        let name = "宴".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_ok());
        let name = "宴".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&name, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some(String::new()), "notes", MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "notes", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_table_number() {
        assert!(validate_table_number(1).is_ok());
        let err = validate_table_number(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNumberInvalid);
    }
}
