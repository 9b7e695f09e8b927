//! Room validation

use thiserror::Error;

/// Maximum length for room IDs
pub const MAX_ROOM_ID_LENGTH: usize = 64;

/// Maximum number of cells in a declared `rows x columns` layout
pub const MAX_LAYOUT_SEATS: u64 = 10_000;

/// Errors that can occur during room validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoomValidationError {
    #[error("Room ID cannot be empty")]
    EmptyId,

    #[error("Room ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Room ID '{0}' cannot contain whitespace")]
    InvalidIdCharacters(String),

    #[error("Room '{0}' must have a capacity greater than 0")]
    ZeroCapacity(String),

    #[error("Room '{room_id}' declares a {rows}x{columns} layout; at most {max} seats are allowed")]
    LayoutTooLarge {
        room_id: String,
        rows: u32,
        columns: u32,
        max: u64,
    },
}

/// Validate a room ID
pub fn validate_room_id(id: &str) -> Result<(), RoomValidationError> {
    if id.is_empty() {
        return Err(RoomValidationError::EmptyId);
    }

    if id.chars().count() > MAX_ROOM_ID_LENGTH {
        return Err(RoomValidationError::IdTooLong(MAX_ROOM_ID_LENGTH));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(RoomValidationError::InvalidIdCharacters(id.to_string()));
    }

    Ok(())
}

/// Validate a room capacity
pub fn validate_capacity(room_id: &str, capacity: u32) -> Result<(), RoomValidationError> {
    if capacity == 0 {
        return Err(RoomValidationError::ZeroCapacity(room_id.to_string()));
    }

    Ok(())
}

/// Validate a declared layout against [`MAX_LAYOUT_SEATS`]
pub fn validate_layout(room_id: &str, rows: u32, columns: u32) -> Result<(), RoomValidationError> {
    let seats = u64::from(rows).checked_mul(u64::from(columns));

    match seats {
        Some(seats) if seats <= MAX_LAYOUT_SEATS => Ok(()),
        _ => Err(RoomValidationError::LayoutTooLarge {
            room_id: room_id.to_string(),
            rows,
            columns,
            max: MAX_LAYOUT_SEATS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_room_ids() {
        assert!(validate_room_id("R1").is_ok());
        assert!(validate_room_id("ROOM001").is_ok());
        assert!(validate_room_id("hall-b").is_ok());
    }

    #[test]
    fn test_invalid_room_ids() {
        assert_eq!(validate_room_id(""), Err(RoomValidationError::EmptyId));
        assert_eq!(
            validate_room_id(&"r".repeat(65)),
            Err(RoomValidationError::IdTooLong(64))
        );
        assert!(matches!(
            validate_room_id("Main Hall"),
            Err(RoomValidationError::InvalidIdCharacters(_))
        ));
    }

    #[test]
    fn test_capacity_validation() {
        assert!(validate_capacity("R1", 1).is_ok());
        assert!(validate_capacity("R1", 45).is_ok());
        assert_eq!(
            validate_capacity("R1", 0),
            Err(RoomValidationError::ZeroCapacity("R1".to_string()))
        );
    }

    #[test]
    fn test_layout_validation() {
        assert!(validate_layout("R1", 0, 0).is_ok());
        assert!(validate_layout("R1", 100, 100).is_ok());
        assert!(matches!(
            validate_layout("R1", 100, 101),
            Err(RoomValidationError::LayoutTooLarge { rows: 100, columns: 101, .. })
        ));
        assert!(validate_layout("R1", u32::MAX, u32::MAX).is_err());
    }
}
