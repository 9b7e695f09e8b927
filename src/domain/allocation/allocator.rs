//! Allocation entry points

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filler::{fill, fill_slots, place, slots_by_capacity};
use super::random::seeded_rng;
use super::sequencer::sequence;
use super::validation::{ensure_capacity, total_capacity, validate_inputs};
use crate::domain::exam::Exam;
use crate::domain::room::Room;
use crate::domain::seating::{SeatingArrangement, SeatingError};
use crate::domain::student::Student;

/// Facility tag that marks a room as suitable for special requirements
pub const DEFAULT_ACCESSIBLE_FACILITY: &str = "Wheelchair Access";

/// How students are distributed across rooms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AllocationStrategy {
    /// One interleaved pass over all rooms
    #[default]
    Standard,
    /// Students with special requirements are seated first in rooms that
    /// carry `facility`
    SpecialRequirements { facility: String },
}

/// Per-run allocation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOptions {
    /// Shuffle seed; `None` seeds each run from entropy
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub strategy: AllocationStrategy,
}

impl AllocationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Validates, interleaves by subject and fills rooms smallest first
pub fn allocate<R>(
    exam: Option<&Exam>,
    students: &[Student],
    rooms: &[Room],
    rng: &mut R,
) -> Result<SeatingArrangement, SeatingError>
where
    R: Rng + ?Sized,
{
    let exam = validate_inputs(exam, students, rooms)?;
    ensure_capacity(students.len(), total_capacity(rooms))?;

    let sequenced = sequence(students, rng);
    let assignments = fill(&sequenced, rooms)?;

    debug!(
        exam = %exam.id(),
        students = students.len(),
        rooms = rooms.len(),
        "Allocated seating"
    );

    Ok(SeatingArrangement::new(
        exam.id().clone(),
        students.len(),
        rooms.len(),
        assignments,
    ))
}

/// Seats students with special requirements in `facility` rooms first, then
/// everyone else into the remaining seats of all rooms.
///
/// Special students that do not fit in the facility rooms are seated with the
/// regular students. The capacity guarantees of [`allocate`] hold across both
/// passes. In the room where the two passes meet, the first regular student
/// differs in subject from the last special one whenever the remaining roster
/// allows it.
pub fn allocate_with_special_requirements<R>(
    exam: Option<&Exam>,
    students: &[Student],
    rooms: &[Room],
    facility: &str,
    rng: &mut R,
) -> Result<SeatingArrangement, SeatingError>
where
    R: Rng + ?Sized,
{
    let exam = validate_inputs(exam, students, rooms)?;
    ensure_capacity(students.len(), total_capacity(rooms))?;

    let (special, mut remaining): (Vec<&Student>, Vec<&Student>) = students
        .iter()
        .partition(|s| s.has_special_requirements());

    let mut slots = slots_by_capacity(rooms);
    let mut assignments = Vec::with_capacity(students.len());
    let mut last_special: Option<&Student> = None;

    if !special.is_empty() {
        let accessible: usize = slots
            .iter()
            .filter(|slot| slot.room().has_facility(facility))
            .map(|slot| slot.remaining() as usize)
            .sum();

        let special_sequence = sequence(special, rng);
        let seated = special_sequence.len().min(accessible);

        assignments.extend(place(
            &special_sequence[..seated],
            slots
                .iter_mut()
                .filter(|slot| slot.room().has_facility(facility)),
        ));
        remaining.extend_from_slice(&special_sequence[seated..]);
        last_special = seated.checked_sub(1).map(|i| special_sequence[i]);

        debug!(
            facility,
            seated,
            overflow = special_sequence.len() - seated,
            "Seated students with special requirements"
        );
    }

    let mut regular_sequence = sequence(remaining, rng);

    // Only the last accessible room touched can be partly filled
    if let Some(last) = last_special {
        let mut start = 0usize;
        for slot in &slots {
            if slot.occupied() > 0 && slot.remaining() > 0 {
                separate_from(&mut regular_sequence, start, last.subject());
                break;
            }
            start += slot.remaining() as usize;
        }
    }

    assignments.extend(fill_slots(&regular_sequence, &mut slots)?);

    Ok(SeatingArrangement::new(
        exam.id().clone(),
        students.len(),
        rooms.len(),
        assignments,
    ))
}

/// Rotates the tail of `sequence` from `start` so that position `start` does
/// not carry `subject`. Adjacent pairs inside the tail are preserved; the
/// rotated-out students move to the end.
fn separate_from(sequence: &mut [&Student], start: usize, subject: &str) {
    let Some(tail) = sequence.get_mut(start..) else {
        return;
    };

    if let Some(offset) = tail.iter().position(|s| s.subject() != subject) {
        tail.rotate_left(offset);
    }
}

/// Runs the configured strategy with a generator owned by this run
pub fn allocate_with_options(
    exam: Option<&Exam>,
    students: &[Student],
    rooms: &[Room],
    options: &AllocationOptions,
) -> Result<SeatingArrangement, SeatingError> {
    let mut rng = seeded_rng(options.seed);

    match &options.strategy {
        AllocationStrategy::Standard => allocate(exam, students, rooms, &mut rng),
        AllocationStrategy::SpecialRequirements { facility } => {
            allocate_with_special_requirements(exam, students, rooms, facility, &mut rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::statistics;
    use crate::domain::exam::ExamId;
    use crate::domain::room::RoomId;
    use crate::domain::seating::AllocationValidationError;
    use crate::domain::student::StudentId;
    use chrono::NaiveDate;
    use std::collections::{HashMap, HashSet};

    fn exam() -> Exam {
        Exam::new(
            ExamId::new("EXAM001").unwrap(),
            "Mathematics",
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        )
    }

    fn student(id: &str, subject: &str) -> Student {
        Student::new(StudentId::new(id).unwrap(), format!("Student {}", id), subject)
    }

    fn room(id: &str, capacity: u32) -> Room {
        Room::new(RoomId::new(id).unwrap(), format!("Room {}", id), capacity, 10, 5).unwrap()
    }

    fn accessible_room(id: &str, capacity: u32) -> Room {
        room(id, capacity).with_facilities([DEFAULT_ACCESSIBLE_FACILITY])
    }

    fn mixed_roster(n: usize) -> Vec<Student> {
        let subjects = ["Mathematics", "Physics", "Chemistry", "Biology"];
        (1..=n)
            .map(|i| student(&format!("STU{:03}", i), subjects[i % subjects.len()]))
            .collect()
    }

    fn per_room(arrangement: &SeatingArrangement) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for a in arrangement.assignments() {
            *counts.entry(a.room_id().to_string()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_worked_example() {
        let exam = exam();
        let rooms = [room("R2", 3), room("R1", 2)];
        let students = [
            student("S1", "Math"),
            student("S2", "Math"),
            student("S3", "Phys"),
        ];

        for seed in 0..10 {
            let arrangement =
                allocate(Some(&exam), &students, &rooms, &mut seeded_rng(Some(seed))).unwrap();
            let seats = arrangement.assignments();

            assert_eq!(seats.len(), 3);
            assert_eq!(seats[0].room_id().as_str(), "R1");
            assert_eq!(seats[0].seat_number(), 1);
            assert_eq!(seats[1].student_id().as_str(), "S3");
            assert_eq!(seats[1].room_id().as_str(), "R1");
            assert_eq!(seats[1].seat_number(), 2);
            assert_eq!(seats[2].room_id().as_str(), "R2");
            assert_eq!(seats[2].seat_number(), 1);

            let stats = statistics(&arrangement);
            assert_eq!(stats.total_students, 3);
            assert_eq!(stats.total_rooms, 2);
            assert!((stats.average_per_room - 1.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_every_student_seated_exactly_once() {
        let exam = exam();
        let rooms = [room("R1", 25), room("R2", 45), room("R3", 30), room("R4", 10)];

        for n in [1, 9, 10, 11, 64, 110] {
            let students = mixed_roster(n);
            let arrangement =
                allocate(Some(&exam), &students, &rooms, &mut seeded_rng(Some(n as u64))).unwrap();

            assert_eq!(arrangement.assignments().len(), n);
            let unique: HashSet<_> = arrangement
                .assignments()
                .iter()
                .map(|a| a.student_id().clone())
                .collect();
            assert_eq!(unique.len(), n);

            let counts = per_room(&arrangement);
            for r in &rooms {
                assert!(counts.get(r.id().as_str()).copied().unwrap_or(0) <= r.capacity());
            }
        }
    }

    #[test]
    fn test_capacity_error_produces_nothing() {
        let exam = exam();
        let rooms = [room("R1", 2), room("R2", 3)];
        let students = mixed_roster(6);

        let result = allocate(Some(&exam), &students, &rooms, &mut seeded_rng(Some(1)));
        assert_eq!(
            result,
            Err(SeatingError::Capacity {
                required: 6,
                available: 5
            })
        );
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let exam = exam();
        let students = [student("S1", "Math"), student("S1", "Physics")];

        let result = allocate(Some(&exam), &students, &[room("R1", 5)], &mut seeded_rng(None));
        assert_eq!(
            result,
            Err(SeatingError::Validation(
                AllocationValidationError::DuplicateStudentIds(vec!["S1".to_string()])
            ))
        );
    }

    #[test]
    fn test_missing_exam_rejected() {
        let result = allocate(
            None,
            &[student("S1", "Math")],
            &[room("R1", 5)],
            &mut seeded_rng(None),
        );
        assert_eq!(
            result,
            Err(SeatingError::Validation(AllocationValidationError::MissingExam))
        );
    }

    #[test]
    fn test_arrangement_counts_empty_rooms() {
        let exam = exam();
        let rooms = [room("R1", 10), room("R2", 10), room("R3", 10)];

        let arrangement =
            allocate(Some(&exam), &mixed_roster(4), &rooms, &mut seeded_rng(Some(5))).unwrap();
        assert_eq!(arrangement.total_rooms(), 3);
        assert_eq!(per_room(&arrangement).len(), 1);
    }

    #[test]
    fn test_seeded_runs_match() {
        let exam = exam();
        let rooms = [room("R1", 20), room("R2", 20)];
        let students = mixed_roster(33);
        let options = AllocationOptions::new().with_seed(99);

        let first = allocate_with_options(Some(&exam), &students, &rooms, &options).unwrap();
        let second = allocate_with_options(Some(&exam), &students, &rooms, &options).unwrap();
        assert_eq!(first.assignments(), second.assignments());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_special_requirements_seated_in_accessible_rooms() {
        let exam = exam();
        let mut students = mixed_roster(12);
        students.push(
            student("ACC1", "Physics").with_special_requirements(["Wheelchair Access"]),
        );
        students.push(student("ACC2", "Biology").with_special_requirements(["Extra Time"]));
        let rooms = [room("R1", 4), accessible_room("ACC-HALL", 8), room("R3", 6)];

        let arrangement = allocate_with_special_requirements(
            Some(&exam),
            &students,
            &rooms,
            DEFAULT_ACCESSIBLE_FACILITY,
            &mut seeded_rng(Some(3)),
        )
        .unwrap();

        for id in ["ACC1", "ACC2"] {
            let seat = arrangement
                .find_student(&StudentId::new(id).unwrap())
                .unwrap();
            assert_eq!(seat.room_id().as_str(), "ACC-HALL");
        }
        assert_eq!(arrangement.assignments().len(), 14);
        assert_eq!(arrangement.total_students(), 14);
    }

    #[test]
    fn test_special_requirements_continue_seat_numbers() {
        let exam = exam();
        let students = [
            student("S1", "Math").with_special_requirements(["Wheelchair Access"]),
            student("S2", "Math"),
            student("S3", "Physics"),
        ];
        let rooms = [accessible_room("ACC", 2), room("R2", 5)];

        let arrangement = allocate_with_special_requirements(
            Some(&exam),
            &students,
            &rooms,
            DEFAULT_ACCESSIBLE_FACILITY,
            &mut seeded_rng(Some(8)),
        )
        .unwrap();

        let seats = arrangement.assignments();
        assert_eq!(seats[0].student_id().as_str(), "S1");
        assert_eq!(
            (seats[0].room_id().as_str(), seats[0].seat_number()),
            ("ACC", 1)
        );
        assert_eq!((seats[1].room_id().as_str(), seats[1].seat_number()), ("ACC", 2));
        assert_eq!((seats[2].room_id().as_str(), seats[2].seat_number()), ("R2", 1));
    }

    #[test]
    fn test_special_requirements_boundary_avoids_same_subject() {
        use crate::domain::allocation::adjacent_conflicts;

        let exam = exam();
        let students = [
            student("S0", "Math").with_special_requirements(["Wheelchair Access"]),
            student("S1", "Math"),
            student("P1", "Physics"),
        ];
        let rooms = [accessible_room("B", 3)];

        for seed in 0..10 {
            let arrangement = allocate_with_special_requirements(
                Some(&exam),
                &students,
                &rooms,
                DEFAULT_ACCESSIBLE_FACILITY,
                &mut seeded_rng(Some(seed)),
            )
            .unwrap();

            let order: Vec<_> = arrangement
                .assignments()
                .iter()
                .map(|a| a.student_id().as_str())
                .collect();
            assert_eq!(order, vec!["S0", "P1", "S1"]);
            assert_eq!(adjacent_conflicts(&arrangement, &students), 0);
        }
    }

    #[test]
    fn test_special_requirements_boundary_after_smaller_room() {
        use crate::domain::allocation::adjacent_conflicts;

        let exam = exam();
        let students = [
            student("S0", "Math").with_special_requirements(["Wheelchair Access"]),
            student("P1", "Physics"),
            student("P2", "Physics"),
            student("S1", "Math"),
        ];
        // A fills first, so the regular pass reaches B at its second position
        let rooms = [accessible_room("B", 3), room("A", 1)];

        for seed in 0..10 {
            let arrangement = allocate_with_special_requirements(
                Some(&exam),
                &students,
                &rooms,
                DEFAULT_ACCESSIBLE_FACILITY,
                &mut seeded_rng(Some(seed)),
            )
            .unwrap();

            let b = RoomId::new("B").unwrap();
            let second = arrangement
                .assignments_for_room(&b)
                .find(|a| a.seat_number() == 2)
                .unwrap();
            assert!(second.student_id().as_str().starts_with('P'));
            assert_eq!(adjacent_conflicts(&arrangement, &students), 0);
        }
    }

    #[test]
    fn test_special_requirements_overflow_uses_other_rooms() {
        let exam = exam();
        let students: Vec<Student> = (1..=5)
            .map(|i| {
                student(&format!("S{}", i), "Math").with_special_requirements(["Extra Time"])
            })
            .collect();
        let rooms = [accessible_room("ACC", 2), room("R2", 3)];

        let arrangement = allocate_with_special_requirements(
            Some(&exam),
            &students,
            &rooms,
            DEFAULT_ACCESSIBLE_FACILITY,
            &mut seeded_rng(Some(2)),
        )
        .unwrap();

        let counts = per_room(&arrangement);
        assert_eq!(counts.get("ACC"), Some(&2));
        assert_eq!(counts.get("R2"), Some(&3));
    }

    #[test]
    fn test_special_requirements_without_accessible_rooms() {
        let exam = exam();
        let mut students = mixed_roster(5);
        students.push(student("ACC1", "Math").with_special_requirements(["Wheelchair Access"]));
        let rooms = [room("R1", 3), room("R2", 3)];

        let arrangement = allocate_with_special_requirements(
            Some(&exam),
            &students,
            &rooms,
            DEFAULT_ACCESSIBLE_FACILITY,
            &mut seeded_rng(Some(4)),
        )
        .unwrap();

        assert_eq!(arrangement.assignments().len(), 6);
        let counts = per_room(&arrangement);
        assert_eq!(counts.get("R1"), Some(&3));
        assert_eq!(counts.get("R2"), Some(&3));
    }

    #[test]
    fn test_special_requirements_respect_total_capacity() {
        let exam = exam();
        let students = mixed_roster(7);
        let rooms = [accessible_room("ACC", 3), room("R2", 3)];

        let result = allocate_with_special_requirements(
            Some(&exam),
            &students,
            &rooms,
            DEFAULT_ACCESSIBLE_FACILITY,
            &mut seeded_rng(Some(4)),
        );
        assert!(matches!(result, Err(SeatingError::Capacity { .. })));
    }

    #[test]
    fn test_strategy_serialization() {
        let strategy = AllocationStrategy::SpecialRequirements {
            facility: "Ramp".to_string(),
        };
        let json = serde_json::to_value(&strategy).unwrap();
        assert_eq!(json["type"], "special_requirements");
        assert_eq!(json["facility"], "Ramp");

        let standard: AllocationStrategy =
            serde_json::from_str(r#"{"type": "standard"}"#).unwrap();
        assert_eq!(standard, AllocationStrategy::Standard);
    }
}
