//! In-memory room source

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, Room, RoomId, RoomRepository};

/// In-memory implementation of RoomRepository; keeps declaration order
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: RwLock<Vec<Room>>,
}

impl InMemoryRoomRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with rooms
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms: RwLock::new(rooms),
        }
    }

    /// Adds a room
    pub fn add(&self, room: Room) -> Result<(), DomainError> {
        self.rooms
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?
            .push(room);
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn list(&self) -> Result<Vec<Room>, DomainError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(rooms.clone())
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(rooms.iter().find(|r| r.id() == id).cloned())
    }
}
