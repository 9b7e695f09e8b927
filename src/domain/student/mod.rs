//! Student domain - examinees and the roster source

mod entity;
mod repository;
mod validation;

pub use entity::{Student, StudentId};
pub use repository::StudentRepository;
pub use validation::{validate_student_id, StudentValidationError, MAX_STUDENT_ID_LENGTH};

#[cfg(test)]
pub use repository::MockStudentRepository;
