//! Seating arrangement repository trait

use async_trait::async_trait;
use uuid::Uuid;

use super::SeatingArrangement;
use crate::domain::error::DomainError;
use crate::domain::exam::ExamId;

#[cfg(test)]
use mockall::automock;

/// Sink for generated arrangements
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SeatingRepository: Send + Sync {
    /// Stores a freshly generated arrangement
    async fn save(&self, arrangement: SeatingArrangement)
        -> Result<SeatingArrangement, DomainError>;

    /// Finds an arrangement by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SeatingArrangement>, DomainError>;

    /// Finds the most recently generated arrangement for an exam
    async fn find_latest_for_exam(
        &self,
        exam_id: &ExamId,
    ) -> Result<Option<SeatingArrangement>, DomainError>;
}
