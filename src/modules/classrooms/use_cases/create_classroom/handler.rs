use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::classrooms::adapters::outbound::classroom_repository::ClassroomRepository;
use crate::modules::classrooms::core::classroom::Classroom;
use crate::modules::classrooms::use_cases::create_classroom::command::CreateClassroom;
use crate::modules::classrooms::use_cases::create_classroom::decide::decide_create;
use crate::modules::classrooms::use_cases::create_classroom::decision::{DecideError, Decision};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

pub struct CreateClassroomHandler {
    classrooms: Arc<dyn ClassroomRepository>,
}

impl CreateClassroomHandler {
    pub fn new(classrooms: Arc<dyn ClassroomRepository>) -> Self {
        Self { classrooms }
    }

    pub async fn handle(&self, command: CreateClassroom) -> Result<Classroom, ApplicationError> {
        let existing = self.classrooms.get(command.room_id.trim()).await?;
        match decide_create(existing.as_ref(), command) {
            Decision::Accepted { classroom } => {
                self.classrooms
                    .insert(classroom.clone())
                    .await
                    .map_err(|e| match e {
                        RepositoryError::Duplicate(_) => {
                            ApplicationError::Domain(DecideError::AlreadyExists(
                                classroom.room_id.clone(),
                            ))
                        }
                        other => ApplicationError::Repository(other),
                    })?;
                info!(
                    room_id = %classroom.room_id,
                    benches = classroom.layout.len(),
                    capacity = classroom.capacity(),
                    "classroom created"
                );
                Ok(classroom)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
