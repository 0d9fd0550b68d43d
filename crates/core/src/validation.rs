//! Input validators for entity payloads.
//!
//! Uniqueness is left to the database; these checks only reject payloads
//! that could never be stored correctly.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::operations::MAX_OPERATION_CODE_LEN;

/// Validate that a required text field is not blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Validate that a text field holds at most `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.to_owned().validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate an operation code: non-blank and at most
/// [`MAX_OPERATION_CODE_LEN`] characters.
pub fn validate_operation_code(code: &str) -> Result<(), CoreError> {
    validate_required("operation_code", code)?;
    validate_max_len("operation_code", code, MAX_OPERATION_CODE_LEN)
}
