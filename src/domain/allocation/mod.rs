//! Allocation domain - subject interleaving and capacity-constrained filling
//!
//! An allocation run validates its inputs, sequences the roster so that
//! neighbours differ in subject, and fills rooms in ascending capacity order.
//! Runs are pure: each owns its random generator and touches no shared state.

mod allocator;
mod filler;
mod random;
mod sequencer;
mod statistics;
mod validation;

pub use allocator::{
    allocate, allocate_with_options, allocate_with_special_requirements, AllocationOptions,
    AllocationStrategy, DEFAULT_ACCESSIBLE_FACILITY,
};
pub use filler::{fill, fill_slots, slots_by_capacity, sort_by_capacity, RoomSlot};
pub use random::seeded_rng;
pub use sequencer::{group_by_subject, interleave, sequence, SubjectGroup};
pub use statistics::{
    adjacent_conflicts, room_occupancy, statistics, RoomOccupancy, SeatingStatistics,
};
pub use validation::{ensure_capacity, total_capacity, validate_inputs};
