use async_trait::async_trait;

use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::StudentId;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts students whose id is not stored yet and returns how many were added.
    async fn insert_many(&self, students: Vec<Student>) -> Result<usize, RepositoryError>;
    async fn get(&self, stu_id: StudentId) -> Result<Option<Student>, RepositoryError>;
    /// All students ordered by `stu_id`.
    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;
    async fn list_by_year(&self, year: u32) -> Result<Vec<Student>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
