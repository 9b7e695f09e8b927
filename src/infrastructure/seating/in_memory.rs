//! In-memory arrangement sink

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, ExamId, SeatingArrangement, SeatingRepository};

/// In-memory implementation of SeatingRepository
#[derive(Debug, Default)]
pub struct InMemorySeatingRepository {
    arrangements: RwLock<HashMap<Uuid, SeatingArrangement>>,
}

impl InMemorySeatingRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeatingRepository for InMemorySeatingRepository {
    async fn save(
        &self,
        arrangement: SeatingArrangement,
    ) -> Result<SeatingArrangement, DomainError> {
        let mut arrangements = self
            .arrangements
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        if arrangements.contains_key(&arrangement.id()) {
            return Err(DomainError::conflict(format!(
                "Arrangement with id '{}' already exists",
                arrangement.id()
            )));
        }

        arrangements.insert(arrangement.id(), arrangement.clone());
        Ok(arrangement)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SeatingArrangement>, DomainError> {
        let arrangements = self
            .arrangements
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(arrangements.get(&id).cloned())
    }

    async fn find_latest_for_exam(
        &self,
        exam_id: &ExamId,
    ) -> Result<Option<SeatingArrangement>, DomainError> {
        let arrangements = self
            .arrangements
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(arrangements
            .values()
            .filter(|a| a.exam_id() == exam_id)
            .max_by_key(|a| a.generated_at())
            .cloned())
    }
}
