//! Seating service - fetch inputs, allocate, store the arrangement

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::allocation::{adjacent_conflicts, allocate_with_options, room_occupancy};
use crate::domain::{
    AllocationOptions, DomainError, ExamId, ExamRepository, RoomOccupancy, RoomRepository,
    SeatingArrangement, SeatingAssignment, SeatingRepository, SeatingStatistics, StudentId,
    StudentRepository,
};

/// Orchestrates allocation runs against the roster, room and exam sources
pub struct SeatingService {
    exams: Arc<dyn ExamRepository>,
    students: Arc<dyn StudentRepository>,
    rooms: Arc<dyn RoomRepository>,
    arrangements: Arc<dyn SeatingRepository>,
    options: AllocationOptions,
}

impl SeatingService {
    /// Create a new SeatingService with default allocation options
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        students: Arc<dyn StudentRepository>,
        rooms: Arc<dyn RoomRepository>,
        arrangements: Arc<dyn SeatingRepository>,
    ) -> Self {
        Self {
            exams,
            students,
            rooms,
            arrangements,
            options: AllocationOptions::default(),
        }
    }

    /// Builder-style method to set allocation options
    pub fn with_options(mut self, options: AllocationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AllocationOptions {
        &self.options
    }

    /// Generates and stores a new arrangement for an exam.
    ///
    /// An unknown exam is passed to allocation as absent and surfaces as a
    /// validation error. Nothing is stored when allocation fails.
    #[instrument(skip(self))]
    pub async fn generate(&self, exam_id: &str) -> Result<SeatingArrangement, DomainError> {
        let exam_id = parse_exam_id(exam_id)?;

        let exam = self.exams.find_by_id(&exam_id).await?;
        if exam.is_none() {
            warn!(exam = %exam_id, "Exam not found");
        }

        let students = self.students.list().await?;
        let rooms = self.rooms.list().await?;
        let options = self.options.clone();

        let arrangement = tokio::task::spawn_blocking(move || {
            allocate_with_options(exam.as_ref(), &students, &rooms, &options)
        })
        .await
        .map_err(|e| DomainError::internal(format!("Allocation task failed: {}", e)))??;

        info!(
            arrangement_id = %arrangement.id(),
            students = arrangement.total_students(),
            rooms = arrangement.total_rooms(),
            "Generated seating arrangement"
        );

        self.arrangements.save(arrangement).await
    }

    /// Statistics of the latest arrangement for an exam
    #[instrument(skip(self))]
    pub async fn statistics(&self, exam_id: &str) -> Result<SeatingStatistics, DomainError> {
        let arrangement = self.latest_required(exam_id).await?;
        Ok(crate::domain::statistics(&arrangement))
    }

    /// Per-room seat usage of the latest arrangement for an exam
    #[instrument(skip(self))]
    pub async fn room_occupancy(&self, exam_id: &str) -> Result<Vec<RoomOccupancy>, DomainError> {
        let arrangement = self.latest_required(exam_id).await?;
        let rooms = self.rooms.list().await?;
        Ok(room_occupancy(&arrangement, &rooms))
    }

    /// Same-subject neighbours in the latest arrangement for an exam
    #[instrument(skip(self))]
    pub async fn adjacent_conflicts(&self, exam_id: &str) -> Result<usize, DomainError> {
        let arrangement = self.latest_required(exam_id).await?;
        let students = self.students.list().await?;
        Ok(adjacent_conflicts(&arrangement, &students))
    }

    /// Where a student sits in the latest arrangement for an exam
    #[instrument(skip(self))]
    pub async fn find_student_seat(
        &self,
        exam_id: &str,
        student_id: &str,
    ) -> Result<Option<SeatingAssignment>, DomainError> {
        let student_id = StudentId::new(student_id)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let arrangement = self.latest_required(exam_id).await?;

        Ok(arrangement.find_student(&student_id).cloned())
    }

    async fn latest_required(&self, exam_id: &str) -> Result<SeatingArrangement, DomainError> {
        let exam_id = parse_exam_id(exam_id)?;

        self.arrangements
            .find_latest_for_exam(&exam_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("No seating arrangement for exam '{}'", exam_id))
            })
    }
}

fn parse_exam_id(id: &str) -> Result<ExamId, DomainError> {
    ExamId::new(id).map_err(|e| DomainError::validation(e.to_string()))
}
