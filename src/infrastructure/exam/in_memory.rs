//! In-memory exam repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, Exam, ExamId, ExamRepository};

/// In-memory implementation of ExamRepository
#[derive(Debug, Default)]
pub struct InMemoryExamRepository {
    exams: RwLock<HashMap<String, Exam>>,
}

impl InMemoryExamRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exam, rejecting a second exam with the same ID
    pub fn create(&self, exam: Exam) -> Result<Exam, DomainError> {
        let mut exams = self
            .exams
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        let id = exam.id().as_str().to_string();

        if exams.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Exam with id '{}' already exists",
                id
            )));
        }

        exams.insert(id, exam.clone());
        Ok(exam)
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn find_by_id(&self, id: &ExamId) -> Result<Option<Exam>, DomainError> {
        let exams = self
            .exams
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(exams.get(id.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<Exam>, DomainError> {
        let exams = self
            .exams
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        let mut result: Vec<_> = exams.values().cloned().collect();
        result.sort_by(|a, b| a.exam_date().cmp(&b.exam_date()).then(a.id().cmp(b.id())));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn exam(id: &str, day: u32) -> Exam {
        Exam::new(
            ExamId::new(id).unwrap(),
            "Mathematics",
            NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryExamRepository::new();
        repo.create(exam("EXAM001", 20)).unwrap();

        let found = repo
            .find_by_id(&ExamId::new("EXAM001").unwrap())
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = InMemoryExamRepository::new();
        repo.create(exam("EXAM001", 20)).unwrap();

        let result = repo.create(exam("EXAM001", 21));
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_sorted_by_date() {
        let repo = InMemoryExamRepository::new();
        repo.create(exam("LATE", 22)).unwrap();
        repo.create(exam("EARLY", 19)).unwrap();

        let ids: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, vec!["EARLY", "LATE"]);
    }
}
