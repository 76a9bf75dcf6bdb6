// In memory student repository.
//
// Purpose
// - Hold the imported roster without a database.

use std::collections::{BTreeMap, btree_map::Entry};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::students::adapters::outbound::student_repository::StudentRepository;
use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::StudentId;
use crate::shared::infrastructure::repository::{RepositoryError, offline};

#[derive(Default)]
pub struct InMemoryStudents {
    rows: RwLock<BTreeMap<StudentId, Student>>,
    is_offline: bool,
}

impl InMemoryStudents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(offline("Students"));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudents {
    async fn insert_many(&self, students: Vec<Student>) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let mut inserted = 0;
        for student in students {
            if let Entry::Vacant(slot) = guard.entry(student.stu_id) {
                slot.insert(student);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn get(&self, stu_id: StudentId) -> Result<Option<Student>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&stu_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn list_by_year(&self, year: u32) -> Result<Vec<Student>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|s| s.year == year)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.len())
    }
}
