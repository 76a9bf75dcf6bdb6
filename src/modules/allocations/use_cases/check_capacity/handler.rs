use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::modules::allocations::core::capacity::{CapacityReport, assess};
use crate::modules::allocations::core::selection::{
    SelectionError, check_exam_id, check_room_ids, resolve_rooms,
};
use crate::modules::classrooms::adapters::outbound::classroom_repository::ClassroomRepository;
use crate::modules::exams::adapters::outbound::exam_repository::{
    ExamRepository, RegistrationRepository,
};
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::core::primitives::ExamId;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub struct CheckCapacityHandler {
    exams: Arc<dyn ExamRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    classrooms: Arc<dyn ClassroomRepository>,
    students: Arc<dyn StudentRepository>,
}

impl CheckCapacityHandler {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        classrooms: Arc<dyn ClassroomRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            exams,
            registrations,
            classrooms,
            students,
        }
    }

    /// Demand is the exam's registrants, or the whole roster when no exam is given.
    pub async fn handle(
        &self,
        exam_id: Option<ExamId>,
        room_ids: &[String],
    ) -> Result<CapacityReport, ApplicationError> {
        let exam_id = exam_id.map(check_exam_id).transpose()?;
        let room_ids = check_room_ids(room_ids)?;

        let demand = match exam_id {
            Some(exam_id) => {
                if self.exams.get(exam_id).await?.is_none() {
                    return Err(SelectionError::ExamNotFound(exam_id).into());
                }
                self.registrations.list_by_exam(exam_id).await?.len()
            }
            None => self.students.count().await?,
        };

        let mut lookups = Vec::with_capacity(room_ids.len());
        for room_id in room_ids {
            let found = self.classrooms.get(&room_id).await?;
            lookups.push((room_id, found));
        }
        let rooms = resolve_rooms(lookups)?;

        let report = assess(exam_id, demand, &rooms);
        debug!(?exam_id, demand, capacity = report.total_capacity, "capacity checked");
        Ok(report)
    }
}
