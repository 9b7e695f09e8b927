//! Seating domain - assignments, arrangements and allocation errors

mod arrangement;
mod assignment;
mod error;
mod repository;

pub use arrangement::SeatingArrangement;
pub use assignment::{seat_position, seat_tag, SeatingAssignment, SEATS_PER_ROW};
pub use error::{AllocationValidationError, SeatingError};
pub use repository::SeatingRepository;

#[cfg(test)]
pub use repository::MockSeatingRepository;
