//! Capacity-constrained room filling

use tracing::debug;

use super::validation::ensure_capacity;
use crate::domain::room::Room;
use crate::domain::seating::{SeatingAssignment, SeatingError};
use crate::domain::student::Student;

/// A room together with the seats already taken in it
#[derive(Debug, Clone)]
pub struct RoomSlot<'a> {
    room: &'a Room,
    occupied: u32,
}

impl<'a> RoomSlot<'a> {
    /// An empty slot
    pub fn new(room: &'a Room) -> Self {
        Self { room, occupied: 0 }
    }

    pub fn room(&self) -> &'a Room {
        self.room
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    /// Seats still free
    pub fn remaining(&self) -> u32 {
        self.room.capacity().saturating_sub(self.occupied)
    }
}

/// Stable ascending sort by capacity; equal capacities keep input order
pub fn sort_by_capacity<'a, I>(rooms: I) -> Vec<&'a Room>
where
    I: IntoIterator<Item = &'a Room>,
{
    let mut sorted: Vec<&'a Room> = rooms.into_iter().collect();
    sorted.sort_by_key(|room| room.capacity());
    sorted
}

/// Empty slots for `rooms` in fill order
pub fn slots_by_capacity<'a, I>(rooms: I) -> Vec<RoomSlot<'a>>
where
    I: IntoIterator<Item = &'a Room>,
{
    sort_by_capacity(rooms)
        .into_iter()
        .map(RoomSlot::new)
        .collect()
}

/// Seats `sequence` into `rooms`, smallest room first.
///
/// Fails without assigning anything when the sequence is longer than the
/// total capacity.
pub fn fill(sequence: &[&Student], rooms: &[Room]) -> Result<Vec<SeatingAssignment>, SeatingError> {
    let mut slots = slots_by_capacity(rooms);
    fill_slots(sequence, &mut slots)
}

/// Seats `sequence` into the residual capacity of `slots`, in slot order
pub fn fill_slots(
    sequence: &[&Student],
    slots: &mut [RoomSlot<'_>],
) -> Result<Vec<SeatingAssignment>, SeatingError> {
    let available: usize = slots.iter().map(|s| s.remaining() as usize).sum();
    ensure_capacity(sequence.len(), available)?;

    Ok(place(sequence, slots.iter_mut()))
}

/// Walks `slots` with a cursor into `sequence`, handing each slot
/// `min(remaining seats, remaining students)`. Stops once the sequence is
/// exhausted; full slots are passed over. Students that do not fit are left
/// unplaced, so callers must check capacity first.
pub(super) fn place<'s, 'r: 's, I>(sequence: &[&Student], slots: I) -> Vec<SeatingAssignment>
where
    I: IntoIterator<Item = &'s mut RoomSlot<'r>>,
{
    let mut assignments = Vec::with_capacity(sequence.len());
    let mut cursor = 0;

    for slot in slots {
        let left = sequence.len() - cursor;
        if left == 0 {
            break;
        }

        let take = (slot.remaining() as usize).min(left);
        if take == 0 {
            continue;
        }

        for student in &sequence[cursor..cursor + take] {
            slot.occupied += 1;
            assignments.push(SeatingAssignment::new(
                student.id().clone(),
                slot.room.id().clone(),
                slot.occupied,
            ));
        }
        cursor += take;

        debug!(
            room = %slot.room.id(),
            seated = take,
            occupied = slot.occupied,
            capacity = slot.room.capacity(),
            "Filled room"
        );
    }

    assignments
}
