//! In-memory roster source

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, Student, StudentId, StudentRepository};

/// In-memory implementation of StudentRepository.
///
/// Keeps registration order and does not deduplicate; duplicate IDs are
/// left for allocation validation to report.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with a roster
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }

    /// Registers one more student
    pub fn add(&self, student: Student) -> Result<(), DomainError> {
        self.students
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?
            .push(student);
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        let students = self
            .students
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(students.clone())
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let students = self
            .students
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(students.iter().find(|s| s.id() == id).cloned())
    }
}
