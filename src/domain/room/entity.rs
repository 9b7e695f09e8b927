//! Room entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_capacity, validate_layout, validate_room_id, RoomValidationError};

/// Room identifier - non-empty, no whitespace, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, RoomValidationError> {
        let id = id.into();
        validate_room_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = RoomValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire shape of a room, validated into [`Room`] on deserialization
#[derive(Deserialize)]
struct RoomRecord {
    id: RoomId,
    name: String,
    capacity: u32,
    #[serde(default)]
    rows: u32,
    #[serde(default)]
    columns: u32,
    #[serde(default)]
    facilities: Vec<String>,
}

impl TryFrom<RoomRecord> for Room {
    type Error = RoomValidationError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        Ok(Room::new(record.id, record.name, record.capacity, record.rows, record.columns)?
            .with_facilities(record.facilities))
    }
}

/// A physical examination room
///
/// `rows` and `columns` describe the declared layout. Seat coordinates are
/// derived from a fixed 5-seat row (see [`crate::domain::seating::SEATS_PER_ROW`]),
/// so the declared column count only matters for [`room_layout`] rendering.
///
/// [`room_layout`]: crate::domain::seating::SeatingArrangement::room_layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomRecord")]
pub struct Room {
    id: RoomId,
    name: String,
    capacity: u32,
    rows: u32,
    columns: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    facilities: Vec<String>,
}

impl Room {
    /// Create a new Room; capacity must be positive and the declared layout
    /// at most [`MAX_LAYOUT_SEATS`](super::MAX_LAYOUT_SEATS) cells
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        capacity: u32,
        rows: u32,
        columns: u32,
    ) -> Result<Self, RoomValidationError> {
        validate_capacity(id.as_str(), capacity)?;
        validate_layout(id.as_str(), rows, columns)?;
        Ok(Self {
            id,
            name: name.into(),
            capacity,
            rows,
            columns,
            facilities: Vec::new(),
        })
    }

    /// Builder-style method to set facility tags
    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facilities = facilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn facilities(&self) -> &[String] {
        &self.facilities
    }

    /// Case-insensitive facility lookup
    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities
            .iter()
            .any(|f| f.eq_ignore_ascii_case(facility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_id(id: &str) -> RoomId {
        RoomId::new(id).unwrap()
    }

    #[test]
    fn test_room_creation() {
        let room = Room::new(room_id("ROOM001"), "Main Hall A", 25, 5, 5).unwrap();

        assert_eq!(room.id().as_str(), "ROOM001");
        assert_eq!(room.name(), "Main Hall A");
        assert_eq!(room.capacity(), 25);
        assert_eq!(room.rows(), 5);
        assert_eq!(room.columns(), 5);
        assert!(room.facilities().is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = Room::new(room_id("R0"), "Closet", 0, 0, 0);
        assert_eq!(result, Err(RoomValidationError::ZeroCapacity("R0".to_string())));
    }

    #[test]
    fn test_has_facility_ignores_case() {
        let room = Room::new(room_id("R1"), "Lab", 10, 2, 5)
            .unwrap()
            .with_facilities(["Wheelchair Access", "Projector"]);

        assert!(room.has_facility("wheelchair access"));
        assert!(room.has_facility("Projector"));
        assert!(!room.has_facility("Elevator"));
    }

    #[test]
    fn test_deserialize_validates_capacity() {
        let ok: Room = serde_json::from_str(
            r#"{"id": "R1", "name": "Hall", "capacity": 30, "rows": 6, "columns": 5}"#,
        )
        .unwrap();
        assert_eq!(ok.capacity(), 30);

        let zero: Result<Room, _> =
            serde_json::from_str(r#"{"id": "R2", "name": "Hall", "capacity": 0}"#);
        assert!(zero.is_err());
    }

    #[test]
    fn test_deserialize_rejects_oversized_layout() {
        let result: Result<Room, _> = serde_json::from_str(
            r#"{"id": "R1", "name": "Hall", "capacity": 2, "rows": 100000, "columns": 100000}"#,
        );

        let message = result.unwrap_err().to_string();
        assert!(message.contains("100000x100000"));
    }

    #[test]
    fn test_serialize_roundtrip_keeps_facilities() {
        let room = Room::new(room_id("R1"), "Lab", 10, 2, 5)
            .unwrap()
            .with_facilities(["Wheelchair Access"]);

        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }
}
