use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::classrooms::adapters::outbound::classroom_repository::ClassroomRepository;
use crate::modules::classrooms::core::classroom::Classroom;
use crate::shared::core::primitives::RoomId;
use crate::shared::infrastructure::repository::{RepositoryError, offline};

#[derive(Default)]
pub struct InMemoryClassrooms {
    rows: RwLock<BTreeMap<RoomId, Classroom>>,
    is_offline: bool,
}

impl InMemoryClassrooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl ClassroomRepository for InMemoryClassrooms {
    async fn insert(&self, classroom: Classroom) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(offline("Classrooms"));
        }
        match self.rows.write().await.entry(classroom.room_id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!(
                "classroom {}",
                classroom.room_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(classroom);
                Ok(())
            }
        }
    }

    async fn get(&self, room_id: &str) -> Result<Option<Classroom>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Classrooms"));
        }
        Ok(self.rows.read().await.get(room_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Classroom>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Classrooms"));
        }
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
