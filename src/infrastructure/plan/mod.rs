//! JSON plan files - the file boundary of the allocator
//!
//! A plan bundles one exam with its roster and rooms:
//!
//! ```json
//! {
//!   "exam": { "id": "EXAM001", "subject": "Mathematics", "exam_date": "2024-12-20" },
//!   "students": [{ "id": "STU001", "name": "John Doe", "subject": "Mathematics" }],
//!   "rooms": [{ "id": "ROOM001", "name": "Main Hall A", "capacity": 25, "rows": 5, "columns": 5 }]
//! }
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DomainError, Exam, Room, SeatingArrangement, Student};

/// One exam with the students and rooms offered to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub exam: Exam,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl SeatingPlan {
    pub fn new(exam: Exam, students: Vec<Student>, rooms: Vec<Room>) -> Self {
        Self {
            exam,
            students,
            rooms,
        }
    }
}

/// Parses a plan from JSON text
pub fn parse_plan(json: &str) -> Result<SeatingPlan, DomainError> {
    from_json(json, "plan")
}

/// Reads and parses a plan file
pub async fn load_plan(path: &Path) -> Result<SeatingPlan, DomainError> {
    let plan: SeatingPlan = read_json(path, "plan").await?;
    debug!(
        path = %path.display(),
        exam = %plan.exam.id(),
        students = plan.students.len(),
        rooms = plan.rooms.len(),
        "Loaded seating plan"
    );
    Ok(plan)
}

/// Reads a previously written arrangement
pub async fn load_arrangement(path: &Path) -> Result<SeatingArrangement, DomainError> {
    read_json(path, "arrangement").await
}

/// Serializes any output value as pretty or compact JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, DomainError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    result.map_err(|e| DomainError::internal(format!("Failed to serialize output: {}", e)))
}

/// Writes an arrangement to `path`
pub async fn write_arrangement(
    path: &Path,
    arrangement: &SeatingArrangement,
    pretty: bool,
) -> Result<(), DomainError> {
    let json = to_json(arrangement, pretty)?;
    tokio::fs::write(path, json).await.map_err(|e| {
        DomainError::storage(format!("Failed to write '{}': {}", path.display(), e))
    })?;

    debug!(path = %path.display(), arrangement = %arrangement.id(), "Wrote arrangement");
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, DomainError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::storage(format!("Failed to read {} '{}': {}", what, path.display(), e))
    })?;

    from_json(&content, what)
}

fn from_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, DomainError> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("Invalid {} JSON: {}", what, e)))
}
