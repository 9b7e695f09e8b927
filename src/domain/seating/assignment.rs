//! Seat assignment types

use serde::{Deserialize, Serialize};

use crate::domain::room::RoomId;
use crate::domain::student::StudentId;

/// Seats per row used for coordinate derivation.
///
/// Fixed layout: independent of each room's declared column count.
pub const SEATS_PER_ROW: u32 = 5;

/// Converts a 1-based seat number into a 1-based `(row, column)` pair
pub fn seat_position(seat_number: u32) -> (u32, u32) {
    let index = seat_number.saturating_sub(1);
    (index / SEATS_PER_ROW + 1, index % SEATS_PER_ROW + 1)
}

/// Builds the traceability tag for a seat
pub fn seat_tag(student_id: &StudentId, room_id: &RoomId, seat_number: u32) -> String {
    format!("QR_{}_{}_{}", student_id, room_id, seat_number)
}

/// One student placed on one seat of one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingAssignment {
    student_id: StudentId,
    room_id: RoomId,
    seat_number: u32,
    row: u32,
    column: u32,
    tag: String,
}

impl SeatingAssignment {
    /// Place a student on a 1-based seat; row, column and tag are derived
    pub(crate) fn new(student_id: StudentId, room_id: RoomId, seat_number: u32) -> Self {
        let (row, column) = seat_position(seat_number);
        let tag = seat_tag(&student_id, &room_id, seat_number);
        Self {
            student_id,
            room_id,
            seat_number,
            row,
            column,
            tag,
        }
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}
