//! Arrangement statistics

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::room::{Room, RoomId};
use crate::domain::seating::SeatingArrangement;
use crate::domain::student::{Student, StudentId};

/// Summary figures for one arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingStatistics {
    pub total_students: usize,
    pub total_rooms: usize,
    pub average_per_room: f64,
    pub per_room_counts: BTreeMap<RoomId, usize>,
}

/// Seat usage of a single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: u32,
    pub occupied: u32,
    pub available: u32,
}

/// Computes totals, the average load and per-room assignment counts
pub fn statistics(arrangement: &SeatingArrangement) -> SeatingStatistics {
    let total_students = arrangement.total_students();
    let total_rooms = arrangement.total_rooms();

    let average_per_room = if total_rooms == 0 {
        0.0
    } else {
        total_students as f64 / total_rooms as f64
    };

    let mut per_room_counts = BTreeMap::new();
    for assignment in arrangement.assignments() {
        *per_room_counts
            .entry(assignment.room_id().clone())
            .or_insert(0) += 1;
    }

    SeatingStatistics {
        total_students,
        total_rooms,
        average_per_room,
        per_room_counts,
    }
}

/// Occupied and free seats for each room, in the order given
pub fn room_occupancy(arrangement: &SeatingArrangement, rooms: &[Room]) -> Vec<RoomOccupancy> {
    let mut counts: HashMap<&RoomId, u32> = HashMap::new();
    for assignment in arrangement.assignments() {
        *counts.entry(assignment.room_id()).or_insert(0) += 1;
    }

    rooms
        .iter()
        .map(|room| {
            let occupied = counts.get(room.id()).copied().unwrap_or(0);
            RoomOccupancy {
                room_id: room.id().clone(),
                room_name: room.name().to_string(),
                capacity: room.capacity(),
                occupied,
                available: room.capacity().saturating_sub(occupied),
            }
        })
        .collect()
}

/// Counts consecutively numbered seats in the same room whose students
/// share a subject. Students missing from `students` never count.
pub fn adjacent_conflicts(arrangement: &SeatingArrangement, students: &[Student]) -> usize {
    let subjects: HashMap<&StudentId, &str> =
        students.iter().map(|s| (s.id(), s.subject())).collect();

    let mut rooms: BTreeMap<&RoomId, Vec<(u32, Option<&str>)>> = BTreeMap::new();
    for assignment in arrangement.assignments() {
        rooms.entry(assignment.room_id()).or_default().push((
            assignment.seat_number(),
            subjects.get(assignment.student_id()).copied(),
        ));
    }

    rooms
        .into_values()
        .map(|mut seats| {
            seats.sort_by_key(|(seat, _)| *seat);
            seats
                .windows(2)
                .filter(|pair| {
                    let (seat_a, subject_a) = pair[0];
                    let (seat_b, subject_b) = pair[1];
                    seat_b == seat_a + 1 && subject_a.is_some() && subject_a == subject_b
                })
                .count()
        })
        .sum()
}
