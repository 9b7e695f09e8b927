//! Exam Seating
//!
//! Assigns students to exam rooms with support for:
//! - Subject interleaving so neighbours sit different papers
//! - Ascending-capacity room filling with capacity checks
//! - Accessible-room placement for students with special requirements
//! - Arrangement statistics, occupancy and conflict counts

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use domain::{AllocationOptions, DomainError};
use infrastructure::{
    exam::InMemoryExamRepository,
    plan::SeatingPlan,
    room::InMemoryRoomRepository,
    seating::InMemorySeatingRepository,
    services::SeatingService,
    student::InMemoryStudentRepository,
};

/// Create a seating service backed by in-memory sources loaded from a plan
pub fn create_seating_service(
    plan: SeatingPlan,
    options: AllocationOptions,
) -> Result<SeatingService, DomainError> {
    let exams = InMemoryExamRepository::new();
    exams.create(plan.exam)?;

    let students = InMemoryStudentRepository::with_students(plan.students);
    let rooms = InMemoryRoomRepository::with_rooms(plan.rooms);

    Ok(SeatingService::new(
        Arc::new(exams),
        Arc::new(students),
        Arc::new(rooms),
        Arc::new(InMemorySeatingRepository::new()),
    )
    .with_options(options))
}
