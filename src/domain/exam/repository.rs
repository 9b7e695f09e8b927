//! Exam repository trait

use async_trait::async_trait;

use super::{Exam, ExamId};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Exam source for seating runs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Finds an exam by ID
    async fn find_by_id(&self, id: &ExamId) -> Result<Option<Exam>, DomainError>;

    /// Lists all exams
    async fn list(&self) -> Result<Vec<Exam>, DomainError>;
}
