// In memory exam catalogue and registration ledger.
//
// Responsibilities
// - Assign sequential exam ids.
// - Keep registrations keyed by (exam, student) so a student is registered once per exam.

use std::collections::{BTreeMap, btree_map::Entry};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::exams::adapters::outbound::exam_repository::{
    ExamRepository, RegistrationRepository,
};
use crate::modules::exams::core::exam::{Exam, NewExam, Registration};
use crate::shared::core::primitives::{ExamId, StudentId};
use crate::shared::infrastructure::repository::{RepositoryError, offline};

#[derive(Default)]
pub struct InMemoryExams {
    exams: RwLock<BTreeMap<ExamId, Exam>>,
    registrations: RwLock<BTreeMap<(ExamId, StudentId), Registration>>,
    is_offline: bool,
}

impl InMemoryExams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl ExamRepository for InMemoryExams {
    async fn create(&self, exam: NewExam) -> Result<Exam, RepositoryError> {
        if self.is_offline {
            return Err(offline("Exams"));
        }
        let mut guard = self.exams.write().await;
        if guard.values().any(|e| e.occupies_same_slot(&exam)) {
            return Err(RepositoryError::Duplicate(format!("exam {}", exam.exam_name)));
        }
        let id = guard.keys().next_back().map_or(1, |last| last + 1);
        let stored = Exam {
            id,
            exam_name: exam.exam_name,
            exam_date: exam.exam_date,
            session: exam.session,
        };
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: ExamId) -> Result<Option<Exam>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Exams"));
        }
        Ok(self.exams.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Exam>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Exams"));
        }
        Ok(self.exams.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryExams {
    async fn insert_many(
        &self,
        registrations: Vec<Registration>,
    ) -> Result<usize, RepositoryError> {
        if self.is_offline {
            return Err(offline("Registrations"));
        }
        let mut guard = self.registrations.write().await;
        let mut inserted = 0;
        for registration in registrations {
            if let Entry::Vacant(slot) = guard.entry((registration.exam_id, registration.stu_id)) {
                slot.insert(registration);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn list_by_exam(&self, exam_id: ExamId) -> Result<Vec<Registration>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Registrations"));
        }
        Ok(self
            .registrations
            .read()
            .await
            .range((exam_id, StudentId::MIN)..=(exam_id, StudentId::MAX))
            .map(|(_, r)| r.clone())
            .collect())
    }
}
