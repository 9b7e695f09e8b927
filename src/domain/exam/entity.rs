//! Exam entity and related types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_duration, validate_exam_id, validate_schedule, ExamValidationError,
};

/// Exam identifier - non-empty, no whitespace, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExamId(String);

impl ExamId {
    /// Create a new ExamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ExamValidationError> {
        let id = id.into();
        validate_exam_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExamId {
    type Error = ExamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExamId> for String {
    fn from(id: ExamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ExamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of examination sitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    #[default]
    Regular,
    Makeup,
    Final,
    Midterm,
    Quiz,
}

/// Lifecycle status of an exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Wire shape of an exam, validated into [`Exam`] on deserialization
#[derive(Deserialize)]
struct ExamRecord {
    id: ExamId,
    subject: String,
    exam_date: NaiveDate,
    #[serde(default)]
    start_time: Option<NaiveTime>,
    #[serde(default)]
    end_time: Option<NaiveTime>,
    #[serde(default)]
    duration_minutes: Option<u32>,
    #[serde(default)]
    exam_type: ExamType,
    #[serde(default)]
    status: ExamStatus,
}

impl TryFrom<ExamRecord> for Exam {
    type Error = ExamValidationError;

    fn try_from(record: ExamRecord) -> Result<Self, Self::Error> {
        let mut exam = Exam::new(record.id, record.subject, record.exam_date)
            .with_exam_type(record.exam_type)
            .with_status(record.status);

        match (record.start_time, record.end_time) {
            (Some(start), Some(end)) => exam = exam.with_schedule(start, end)?,
            (None, None) => {}
            _ => return Err(ExamValidationError::IncompleteSchedule),
        }

        if let Some(minutes) = record.duration_minutes {
            exam = exam.with_duration(minutes)?;
        }

        Ok(exam)
    }
}

/// An examination session that a seating arrangement is generated for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExamRecord")]
pub struct Exam {
    id: ExamId,
    subject: String,
    exam_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<u32>,
    exam_type: ExamType,
    status: ExamStatus,
}

impl Exam {
    /// Create a new scheduled regular exam
    pub fn new(id: ExamId, subject: impl Into<String>, exam_date: NaiveDate) -> Self {
        Self {
            id,
            subject: subject.into(),
            exam_date,
            start_time: None,
            end_time: None,
            duration_minutes: None,
            exam_type: ExamType::default(),
            status: ExamStatus::default(),
        }
    }

    /// Builder-style method to set the time window
    pub fn with_schedule(
        mut self,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, ExamValidationError> {
        validate_schedule(start, end)?;
        self.start_time = Some(start);
        self.end_time = Some(end);
        Ok(self)
    }

    /// Builder-style method to set the duration
    pub fn with_duration(mut self, minutes: u32) -> Result<Self, ExamValidationError> {
        validate_duration(minutes)?;
        self.duration_minutes = Some(minutes);
        Ok(self)
    }

    pub fn with_exam_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = exam_type;
        self
    }

    pub fn with_status(mut self, status: ExamStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &ExamId {
        &self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn exam_date(&self) -> NaiveDate {
        self.exam_date
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    pub fn exam_type(&self) -> ExamType {
        self.exam_type
    }

    pub fn status(&self) -> ExamStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn test_exam_defaults() {
        let exam = Exam::new(ExamId::new("EXAM001").unwrap(), "Mathematics", date());

        assert_eq!(exam.id().as_str(), "EXAM001");
        assert_eq!(exam.subject(), "Mathematics");
        assert_eq!(exam.exam_type(), ExamType::Regular);
        assert_eq!(exam.status(), ExamStatus::Scheduled);
        assert!(exam.start_time().is_none());
    }

    #[test]
    fn test_exam_schedule_and_duration() {
        let exam = Exam::new(ExamId::new("EXAM002").unwrap(), "Physics", date())
            .with_schedule(
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            )
            .unwrap()
            .with_duration(180)
            .unwrap()
            .with_exam_type(ExamType::Final);

        assert_eq!(exam.duration_minutes(), Some(180));
        assert_eq!(exam.exam_type(), ExamType::Final);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let result = Exam::new(ExamId::new("EXAM003").unwrap(), "Biology", date()).with_duration(10);
        assert!(matches!(
            result,
            Err(ExamValidationError::InvalidDuration { value: 10, .. })
        ));
    }

    #[test]
    fn test_deserialize_exam() {
        let exam: Exam = serde_json::from_str(
            r#"{
                "id": "EXAM001",
                "subject": "Mathematics",
                "exam_date": "2024-12-20",
                "start_time": "09:00:00",
                "end_time": "12:00:00",
                "exam_type": "midterm"
            }"#,
        )
        .unwrap();

        assert_eq!(exam.exam_type(), ExamType::Midterm);
        assert_eq!(exam.start_time(), NaiveTime::from_hms_opt(9, 0, 0));
    }

    #[test]
    fn test_deserialize_rejects_inverted_schedule() {
        let result: Result<Exam, _> = serde_json::from_str(
            r#"{
                "id": "EXAM001",
                "subject": "Mathematics",
                "exam_date": "2024-12-20",
                "start_time": "12:00:00",
                "end_time": "09:00:00"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_half_schedule() {
        let start_only: Result<Exam, _> = serde_json::from_str(
            r#"{
                "id": "EXAM001",
                "subject": "Mathematics",
                "exam_date": "2024-12-20",
                "start_time": "09:00:00"
            }"#,
        );
        let message = start_only.unwrap_err().to_string();
        assert!(message.contains("both a start and an end time"));

        let end_only: Result<Exam, _> = serde_json::from_str(
            r#"{
                "id": "EXAM001",
                "subject": "Mathematics",
                "exam_date": "2024-12-20",
                "end_time": "12:00:00"
            }"#,
        );
        assert!(end_only.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let exam = Exam::new(ExamId::new("EXAM004").unwrap(), "Chemistry", date())
            .with_status(ExamStatus::InProgress);

        let json = serde_json::to_string(&exam).unwrap();
        let back: Exam = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exam);
    }
}
