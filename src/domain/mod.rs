//! Domain layer - seating entities, allocation logic and collaborator traits

pub mod allocation;
pub mod error;
pub mod exam;
pub mod room;
pub mod seating;
pub mod student;

pub use allocation::{
    allocate, allocate_with_options, allocate_with_special_requirements, statistics,
    AllocationOptions, AllocationStrategy, RoomOccupancy, SeatingStatistics,
};
pub use error::DomainError;
pub use exam::{Exam, ExamId, ExamRepository, ExamStatus, ExamType, ExamValidationError};
pub use room::{Room, RoomId, RoomRepository, RoomValidationError};
pub use seating::{
    AllocationValidationError, SeatingArrangement, SeatingAssignment, SeatingError,
    SeatingRepository,
};
pub use student::{Student, StudentId, StudentRepository, StudentValidationError};
