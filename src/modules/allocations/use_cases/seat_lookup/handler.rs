use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationRepository;
use crate::modules::exams::adapters::outbound::exam_repository::ExamRepository;
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::primitives::{ExamId, RoomId, StudentId};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("exam_id and stu_id are required")]
    MissingIds,

    #[error("Exam {0} not found")]
    ExamNotFound(ExamId),

    #[error("Student not found")]
    StudentNotFound,

    #[error("Seat not allocated yet")]
    NotAllocated,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatLookup {
    pub exam_id: ExamId,
    pub exam_name: String,
    pub exam_date: Option<NaiveDate>,
    pub session: Option<String>,
    pub stu_id: StudentId,
    pub stu_name: String,
    pub room_id: RoomId,
    pub bench_id: String,
    pub seat_no: u32,
}

pub struct SeatLookupHandler {
    exams: Arc<dyn ExamRepository>,
    students: Arc<dyn StudentRepository>,
    allocations: Arc<dyn AllocationRepository>,
}

impl SeatLookupHandler {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        students: Arc<dyn StudentRepository>,
        allocations: Arc<dyn AllocationRepository>,
    ) -> Self {
        Self {
            exams,
            students,
            allocations,
        }
    }

    pub async fn handle(
        &self,
        exam_id: ExamId,
        stu_id: StudentId,
    ) -> Result<SeatLookup, LookupError> {
        if exam_id <= 0 || stu_id <= 0 {
            return Err(LookupError::MissingIds);
        }
        let exam = self
            .exams
            .get(exam_id)
            .await?
            .ok_or(LookupError::ExamNotFound(exam_id))?;
        let student = self
            .students
            .get(stu_id)
            .await?
            .ok_or(LookupError::StudentNotFound)?;
        let seat = self
            .allocations
            .find_seat(exam_id, stu_id)
            .await?
            .ok_or(LookupError::NotAllocated)?;

        Ok(SeatLookup {
            exam_id,
            exam_name: exam.exam_name,
            exam_date: exam.exam_date,
            session: exam.session,
            stu_id,
            stu_name: student.stu_name,
            room_id: seat.room_id,
            bench_id: seat.bench_id,
            seat_no: seat.seat_no,
        })
    }
}
