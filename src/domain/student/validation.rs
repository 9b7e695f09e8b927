//! Student validation

use thiserror::Error;

/// Maximum length for student IDs
pub const MAX_STUDENT_ID_LENGTH: usize = 64;

/// Errors that can occur during student validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StudentValidationError {
    #[error("Student ID cannot be empty")]
    EmptyId,

    #[error("Student ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Student ID '{0}' cannot contain whitespace")]
    InvalidIdCharacters(String),
}

/// Validate a student ID
pub fn validate_student_id(id: &str) -> Result<(), StudentValidationError> {
    if id.is_empty() {
        return Err(StudentValidationError::EmptyId);
    }

    if id.chars().count() > MAX_STUDENT_ID_LENGTH {
        return Err(StudentValidationError::IdTooLong(MAX_STUDENT_ID_LENGTH));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(StudentValidationError::InvalidIdCharacters(id.to_string()));
    }

    Ok(())
}
