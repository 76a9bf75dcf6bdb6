use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::exams::adapters::outbound::exam_repository::{
    ExamRepository, RegistrationRepository,
};
use crate::modules::exams::use_cases::register_year::command::RegisterYear;
use crate::modules::exams::use_cases::register_year::decide::decide_register_year;
use crate::modules::exams::use_cases::register_year::decision::{DecideError, Decision};
use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterYearOutcome {
    pub registered: usize,
    pub already_registered: usize,
}

pub struct RegisterYearHandler {
    exams: Arc<dyn ExamRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    students: Arc<dyn StudentRepository>,
}

impl RegisterYearHandler {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            exams,
            registrations,
            students,
        }
    }

    pub async fn handle(
        &self,
        command: RegisterYear,
    ) -> Result<RegisterYearOutcome, ApplicationError> {
        let exam = self.exams.get(command.exam_id).await?;
        let cohort = self.students.list_by_year(command.year).await?;
        let registered: HashSet<_> = self
            .registrations
            .list_by_exam(command.exam_id)
            .await?
            .into_iter()
            .map(|r| r.stu_id)
            .collect();

        let exam_id = command.exam_id;
        let year = command.year;
        match decide_register_year(exam.as_ref(), &cohort, &registered, command) {
            Decision::Accepted {
                registrations,
                already_registered,
            } => {
                let submitted = registrations.len();
                let registered = self.registrations.insert_many(registrations).await?;
                // Rows registered by a concurrent request count as already registered.
                let already_registered = already_registered + (submitted - registered);
                info!(exam_id, year, registered, already_registered, "year cohort registered");
                Ok(RegisterYearOutcome {
                    registered,
                    already_registered,
                })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
