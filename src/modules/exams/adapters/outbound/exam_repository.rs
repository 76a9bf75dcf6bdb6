use async_trait::async_trait;

use crate::modules::exams::core::exam::{Exam, NewExam, Registration};
use crate::shared::core::primitives::ExamId;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Assigns the next sequential id. Fails with `Duplicate` if an exam occupies the same slot.
    async fn create(&self, exam: NewExam) -> Result<Exam, RepositoryError>;
    async fn get(&self, id: ExamId) -> Result<Option<Exam>, RepositoryError>;
    /// All exams ordered by id.
    async fn list(&self) -> Result<Vec<Exam>, RepositoryError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Inserts registrations whose (exam, student) key is free and returns how many were stored.
    async fn insert_many(&self, registrations: Vec<Registration>)
    -> Result<usize, RepositoryError>;
    /// Registrations of one exam ordered by `stu_id`.
    async fn list_by_exam(&self, exam_id: ExamId) -> Result<Vec<Registration>, RepositoryError>;
}
