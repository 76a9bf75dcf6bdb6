use async_trait::async_trait;

use crate::modules::allocations::core::seat::SeatAssignment;
use crate::shared::core::primitives::{ExamId, RoomId, StudentId};
use crate::shared::infrastructure::repository::RepositoryError;

/// The part of an exam's allocation a run overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationScope {
    Exam,
    Room(RoomId),
}

impl AllocationScope {
    pub fn covers(&self, seat: &SeatAssignment) -> bool {
        match self {
            Self::Exam => true,
            Self::Room(room_id) => &seat.room_id == room_id,
        }
    }
}

#[async_trait]
pub trait AllocationRepository: Send + Sync {
    /// Drops the exam's seats inside `scope` and stores `seats` instead, all or nothing.
    /// Fails with `Conflict` if a seat or a student would be taken twice for the exam.
    async fn replace(
        &self,
        exam_id: ExamId,
        scope: AllocationScope,
        seats: Vec<SeatAssignment>,
    ) -> Result<(), RepositoryError>;

    /// Seats of the exam in room, bench, seat order.
    async fn list_by_exam(
        &self,
        exam_id: ExamId,
        room_id: Option<&str>,
    ) -> Result<Vec<SeatAssignment>, RepositoryError>;

    /// Seats in the room across exams, ordered by exam then position.
    async fn list_by_room(
        &self,
        room_id: &str,
        exam_id: Option<ExamId>,
    ) -> Result<Vec<SeatAssignment>, RepositoryError>;

    async fn find_seat(
        &self,
        exam_id: ExamId,
        stu_id: StudentId,
    ) -> Result<Option<SeatAssignment>, RepositoryError>;
}
