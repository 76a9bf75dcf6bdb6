use async_trait::async_trait;

use crate::modules::classrooms::core::classroom::Classroom;
use crate::shared::infrastructure::repository::RepositoryError;

#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    /// Fails with `Duplicate` if the room id is taken.
    async fn insert(&self, classroom: Classroom) -> Result<(), RepositoryError>;
    async fn get(&self, room_id: &str) -> Result<Option<Classroom>, RepositoryError>;
    /// All rooms ordered by `room_id`.
    async fn list(&self) -> Result<Vec<Classroom>, RepositoryError>;
}
