//! Exam validation

use chrono::NaiveTime;
use thiserror::Error;

/// Maximum length for exam IDs
pub const MAX_EXAM_ID_LENGTH: usize = 64;

/// Shortest allowed exam, in minutes
pub const MIN_DURATION_MINUTES: u32 = 30;

/// Longest allowed exam, in minutes
pub const MAX_DURATION_MINUTES: u32 = 480;

/// Errors that can occur during exam validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExamValidationError {
    #[error("Exam ID cannot be empty")]
    EmptyId,

    #[error("Exam ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Exam ID '{0}' cannot contain whitespace")]
    InvalidIdCharacters(String),

    #[error("Exam duration {value} minutes must be between {min} and {max}")]
    InvalidDuration { value: u32, min: u32, max: u32 },

    #[error("Exam end time {end} must be after start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },

    #[error("Exam schedule needs both a start and an end time")]
    IncompleteSchedule,
}

/// Validate an exam ID
pub fn validate_exam_id(id: &str) -> Result<(), ExamValidationError> {
    if id.is_empty() {
        return Err(ExamValidationError::EmptyId);
    }

    if id.chars().count() > MAX_EXAM_ID_LENGTH {
        return Err(ExamValidationError::IdTooLong(MAX_EXAM_ID_LENGTH));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ExamValidationError::InvalidIdCharacters(id.to_string()));
    }

    Ok(())
}

/// Validate an exam duration
pub fn validate_duration(minutes: u32) -> Result<(), ExamValidationError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(ExamValidationError::InvalidDuration {
            value: minutes,
            min: MIN_DURATION_MINUTES,
            max: MAX_DURATION_MINUTES,
        });
    }

    Ok(())
}

/// Validate a start/end window
pub fn validate_schedule(start: NaiveTime, end: NaiveTime) -> Result<(), ExamValidationError> {
    if end <= start {
        return Err(ExamValidationError::EndBeforeStart { start, end });
    }

    Ok(())
}
