// In memory seat ledger.
//
// Responsibilities
// - Swap a run's seats in under one write lock so readers never see a half-written run.
// - Refuse a swap that would seat one student twice or put two students on one seat.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::allocations::adapters::outbound::allocation_repository::{
    AllocationRepository, AllocationScope,
};
use crate::modules::allocations::core::seat::{SeatAssignment, position_order};
use crate::shared::core::primitives::{ExamId, StudentId};
use crate::shared::infrastructure::repository::{RepositoryError, offline};

#[derive(Default)]
pub struct InMemoryAllocations {
    seats: RwLock<Vec<SeatAssignment>>,
    is_offline: bool,
}

impl InMemoryAllocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

fn check_unique<'a>(
    exam_id: ExamId,
    seats: impl Iterator<Item = &'a SeatAssignment>,
) -> Result<(), RepositoryError> {
    let mut slots = HashSet::new();
    let mut students = HashSet::new();
    for seat in seats {
        if seat.exam_id != exam_id {
            return Err(RepositoryError::Conflict(format!(
                "seat for exam {} written under exam {exam_id}",
                seat.exam_id
            )));
        }
        if !students.insert(seat.stu_id) {
            return Err(RepositoryError::Conflict(format!(
                "student {} seated twice for exam {exam_id}",
                seat.stu_id
            )));
        }
        if !slots.insert(seat.slot()) {
            return Err(RepositoryError::Conflict(format!(
                "seat {}/{}/{} taken twice for exam {exam_id}",
                seat.room_id, seat.bench_id, seat.seat_no
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl AllocationRepository for InMemoryAllocations {
    async fn replace(
        &self,
        exam_id: ExamId,
        scope: AllocationScope,
        seats: Vec<SeatAssignment>,
    ) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(offline("Allocations"));
        }
        if let Some(outside) = seats.iter().find(|s| !scope.covers(s)) {
            return Err(RepositoryError::Conflict(format!(
                "seat in room {} is outside the replaced scope",
                outside.room_id
            )));
        }

        let mut guard = self.seats.write().await;
        let kept = guard
            .iter()
            .filter(|s| s.exam_id == exam_id && !scope.covers(s));
        check_unique(exam_id, kept.chain(seats.iter()))?;

        guard.retain(|s| s.exam_id != exam_id || !scope.covers(s));
        guard.extend(seats);
        Ok(())
    }

    async fn list_by_exam(
        &self,
        exam_id: ExamId,
        room_id: Option<&str>,
    ) -> Result<Vec<SeatAssignment>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Allocations"));
        }
        let mut seats: Vec<_> = self
            .seats
            .read()
            .await
            .iter()
            .filter(|s| s.exam_id == exam_id && room_id.is_none_or(|r| s.room_id == r))
            .cloned()
            .collect();
        seats.sort_by(position_order);
        Ok(seats)
    }

    async fn list_by_room(
        &self,
        room_id: &str,
        exam_id: Option<ExamId>,
    ) -> Result<Vec<SeatAssignment>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Allocations"));
        }
        let mut seats: Vec<_> = self
            .seats
            .read()
            .await
            .iter()
            .filter(|s| s.room_id == room_id && exam_id.is_none_or(|e| s.exam_id == e))
            .cloned()
            .collect();
        seats.sort_by(|a, b| a.exam_id.cmp(&b.exam_id).then_with(|| position_order(a, b)));
        Ok(seats)
    }

    async fn find_seat(
        &self,
        exam_id: ExamId,
        stu_id: StudentId,
    ) -> Result<Option<SeatAssignment>, RepositoryError> {
        if self.is_offline {
            return Err(offline("Allocations"));
        }
        Ok(self
            .seats
            .read()
            .await
            .iter()
            .find(|s| s.exam_id == exam_id && s.stu_id == stu_id)
            .cloned())
    }
}
