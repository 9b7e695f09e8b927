//! Allocation errors

use thiserror::Error;

/// Precondition failures detected before any seat is assigned
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AllocationValidationError {
    #[error("Exam cannot be absent")]
    MissingExam,

    #[error("Student list cannot be empty")]
    EmptyRoster,

    #[error("Room list cannot be empty")]
    EmptyRooms,

    #[error("Duplicate student ID(s): {}", .0.join(", "))]
    DuplicateStudentIds(Vec<String>),

    #[error("Duplicate room ID(s): {}", .0.join(", "))]
    DuplicateRoomIds(Vec<String>),
}

/// Errors returned by an allocation run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeatingError {
    #[error("Validation error: {0}")]
    Validation(#[from] AllocationValidationError),

    #[error("Not enough room capacity: {required} students but only {available} seats")]
    Capacity { required: usize, available: usize },
}
