//! Allocation preconditions

use std::collections::HashSet;

use crate::domain::exam::Exam;
use crate::domain::room::Room;
use crate::domain::seating::{AllocationValidationError, SeatingError};
use crate::domain::student::Student;

/// Checks the inputs of an allocation run and returns the exam on success.
///
/// Checks run in a fixed order: exam, roster, rooms, duplicate student IDs,
/// duplicate room IDs. The first failing check is reported.
pub fn validate_inputs<'a>(
    exam: Option<&'a Exam>,
    students: &[Student],
    rooms: &[Room],
) -> Result<&'a Exam, AllocationValidationError> {
    let exam = exam.ok_or(AllocationValidationError::MissingExam)?;

    if students.is_empty() {
        return Err(AllocationValidationError::EmptyRoster);
    }

    if rooms.is_empty() {
        return Err(AllocationValidationError::EmptyRooms);
    }

    let duplicate_students = find_duplicates(students.iter().map(|s| s.id().as_str()));
    if !duplicate_students.is_empty() {
        return Err(AllocationValidationError::DuplicateStudentIds(
            duplicate_students,
        ));
    }

    let duplicate_rooms = find_duplicates(rooms.iter().map(|r| r.id().as_str()));
    if !duplicate_rooms.is_empty() {
        return Err(AllocationValidationError::DuplicateRoomIds(duplicate_rooms));
    }

    Ok(exam)
}

/// Sum of declared seat capacity
pub fn total_capacity<'a, I>(rooms: I) -> usize
where
    I: IntoIterator<Item = &'a Room>,
{
    rooms.into_iter().map(|r| r.capacity() as usize).sum()
}

/// Fails when `required` seats exceed `available`
pub fn ensure_capacity(required: usize, available: usize) -> Result<(), SeatingError> {
    if required > available {
        return Err(SeatingError::Capacity {
            required,
            available,
        });
    }

    Ok(())
}

/// IDs seen more than once, each reported once in order of first repetition
fn find_duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }

    duplicates
}
