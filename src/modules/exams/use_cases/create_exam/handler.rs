use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::exams::adapters::outbound::exam_repository::ExamRepository;
use crate::modules::exams::core::exam::Exam;
use crate::modules::exams::use_cases::create_exam::command::CreateExam;
use crate::modules::exams::use_cases::create_exam::decide::decide_create;
use crate::modules::exams::use_cases::create_exam::decision::{DecideError, Decision};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

pub struct CreateExamHandler {
    exams: Arc<dyn ExamRepository>,
}

impl CreateExamHandler {
    pub fn new(exams: Arc<dyn ExamRepository>) -> Self {
        Self { exams }
    }

    pub async fn handle(&self, command: CreateExam) -> Result<Exam, ApplicationError> {
        let existing = self.exams.list().await?;
        match decide_create(&existing, command) {
            Decision::Accepted { exam } => {
                let name = exam.exam_name.clone();
                let stored = self.exams.create(exam).await.map_err(|e| match e {
                    RepositoryError::Duplicate(_) => {
                        ApplicationError::Domain(DecideError::AlreadyExists(name))
                    }
                    other => ApplicationError::Repository(other),
                })?;
                info!(exam_id = stored.id, exam_name = %stored.exam_name, "exam created");
                Ok(stored)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
