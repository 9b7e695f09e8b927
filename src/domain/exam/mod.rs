//! Exam domain - examination sessions

mod entity;
mod repository;
mod validation;

pub use entity::{Exam, ExamId, ExamStatus, ExamType};
pub use repository::ExamRepository;
pub use validation::{
    validate_duration, validate_exam_id, validate_schedule, ExamValidationError,
    MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};

#[cfg(test)]
pub use repository::MockExamRepository;
