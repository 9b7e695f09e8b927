//! Room repository trait

use async_trait::async_trait;

use super::{Room, RoomId};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Room source for seating runs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Lists every available room in declaration order
    async fn list(&self) -> Result<Vec<Room>, DomainError>;

    /// Finds a room by ID
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError>;
}
