//! Room domain - examination rooms and the room source

mod entity;
mod repository;
mod validation;

pub use entity::{Room, RoomId};
pub use repository::RoomRepository;
pub use validation::{
    validate_capacity, validate_layout, validate_room_id, RoomValidationError, MAX_LAYOUT_SEATS,
    MAX_ROOM_ID_LENGTH,
};

#[cfg(test)]
pub use repository::MockRoomRepository;
