//! Student repository trait

use async_trait::async_trait;

use super::{Student, StudentId};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Roster source for seating runs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Lists every registered student in registration order
    async fn list(&self) -> Result<Vec<Student>, DomainError>;

    /// Finds a student by ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError>;
}
