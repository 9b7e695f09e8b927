//! Seating arrangement aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SeatingAssignment;
use crate::domain::exam::ExamId;
use crate::domain::room::{Room, RoomId};
use crate::domain::student::StudentId;

/// Result of one allocation run
///
/// Constructed once per run and never mutated afterwards. `total_rooms`
/// counts every room offered to the run, including rooms left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingArrangement {
    id: Uuid,
    exam_id: ExamId,
    total_students: usize,
    total_rooms: usize,
    generated_at: DateTime<Utc>,
    assignments: Vec<SeatingAssignment>,
}

impl SeatingArrangement {
    pub(crate) fn new(
        exam_id: ExamId,
        total_students: usize,
        total_rooms: usize,
        assignments: Vec<SeatingAssignment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exam_id,
            total_students,
            total_rooms,
            generated_at: Utc::now(),
            assignments,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn exam_id(&self) -> &ExamId {
        &self.exam_id
    }

    pub fn total_students(&self) -> usize {
        self.total_students
    }

    pub fn total_rooms(&self) -> usize {
        self.total_rooms
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Assignments in the order students were consumed
    pub fn assignments(&self) -> &[SeatingAssignment] {
        &self.assignments
    }

    /// Assignments placed in the given room, in seat order of placement
    pub fn assignments_for_room<'a>(
        &'a self,
        room_id: &'a RoomId,
    ) -> impl Iterator<Item = &'a SeatingAssignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.room_id() == room_id)
    }

    /// Finds where a student is seated
    pub fn find_student(&self, student_id: &StudentId) -> Option<&SeatingAssignment> {
        self.assignments
            .iter()
            .find(|a| a.student_id() == student_id)
    }

    /// Renders a `rows x columns` grid of the room's declared layout.
    ///
    /// The grid never holds more cells than the room has seats: columns are
    /// capped at the capacity and rows at the rows needed to hold it. Seats
    /// whose derived coordinates fall outside the grid are omitted.
    pub fn room_layout(&self, room: &Room) -> Vec<Vec<Option<StudentId>>> {
        let capacity = room.capacity() as usize;
        let columns = (room.columns() as usize).min(capacity);
        let rows = (room.rows() as usize).min(capacity.div_ceil(columns.max(1)));
        let mut layout = vec![vec![None; columns]; rows];

        for assignment in self.assignments_for_room(room.id()) {
            let row = assignment.row() as usize;
            let column = assignment.column() as usize;
            if (1..=rows).contains(&row) && (1..=columns).contains(&column) {
                layout[row - 1][column - 1] = Some(assignment.student_id().clone());
            }
        }

        layout
    }
}
