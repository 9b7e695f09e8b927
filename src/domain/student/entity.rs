//! Student entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_student_id, StudentValidationError};

/// Student identifier - non-empty, no whitespace, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Create a new StudentId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, StudentValidationError> {
        let id = id.into();
        validate_student_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StudentId {
    type Error = StudentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An examinee registered for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within a roster
    id: StudentId,

    /// Display name
    name: String,

    /// Subject (exam) the student sits for; empty is a valid grouping key
    #[serde(default)]
    subject: String,

    /// Special requirement tags (e.g. "Wheelchair Access")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    special_requirements: Vec<String>,
}

impl Student {
    /// Create a new Student
    pub fn new(id: StudentId, name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subject: subject.into(),
            special_requirements: Vec::new(),
        }
    }

    /// Builder-style method to set special requirements
    pub fn with_special_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn special_requirements(&self) -> &[String] {
        &self.special_requirements
    }

    /// Whether the student carries any special requirement tag
    pub fn has_special_requirements(&self) -> bool {
        !self.special_requirements.is_empty()
    }
}
