use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::roster::{RosterError, parse_roster};
use crate::modules::students::use_cases::import_students::decide::decide_import;
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub skipped_duplicates: usize,
}

pub struct ImportStudentsHandler {
    roster_path: PathBuf,
    students: Arc<dyn StudentRepository>,
}

impl ImportStudentsHandler {
    pub fn new(roster_path: impl Into<PathBuf>, students: Arc<dyn StudentRepository>) -> Self {
        Self {
            roster_path: roster_path.into(),
            students,
        }
    }

    pub async fn handle(&self) -> Result<ImportOutcome, ApplicationError> {
        let bytes = tokio::fs::read(&self.roster_path).await.map_err(|e| {
            RosterError::Read(format!("{}: {e}", self.roster_path.display()))
        })?;
        let roster = parse_roster(bytes.as_slice())?;

        let existing: HashSet<_> = self
            .students
            .list()
            .await?
            .into_iter()
            .map(|s| s.stu_id)
            .collect();
        let decision = decide_import(&existing, roster);
        let submitted = decision.accepted.len();
        let inserted = self.students.insert_many(decision.accepted).await?;
        let skipped_duplicates = decision.skipped_duplicates + (submitted - inserted);

        info!(
            inserted,
            skipped = skipped_duplicates,
            path = %self.roster_path.display(),
            "student roster imported"
        );
        Ok(ImportOutcome {
            inserted,
            skipped_duplicates,
        })
    }
}
