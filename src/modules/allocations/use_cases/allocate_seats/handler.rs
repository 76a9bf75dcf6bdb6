use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::allocations::adapters::outbound::allocation_repository::{
    AllocationRepository, AllocationScope,
};
use crate::modules::allocations::core::planner::AllocationPlan;
use crate::modules::allocations::core::seat::SeatAssignment;
use crate::modules::allocations::core::selection::{check_exam_id, check_room_ids};
use crate::modules::allocations::use_cases::allocate_seats::command::{
    AllocateSeats, AllocationTarget,
};
use crate::modules::allocations::use_cases::allocate_seats::decide::{
    AllocationInputs, decide_allocation,
};
use crate::modules::allocations::use_cases::allocate_seats::decision::{DecideError, Decision};
use crate::modules::classrooms::adapters::outbound::classroom_repository::ClassroomRepository;
use crate::modules::exams::adapters::outbound::exam_repository::{
    ExamRepository, RegistrationRepository,
};
use crate::shared::core::primitives::{ExamId, RoomId};
use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    pub run_id: Uuid,
    pub exam_id: ExamId,
    pub scope: AllocationScope,
    pub considered: usize,
    pub plan: AllocationPlan,
}

pub struct AllocateSeatsHandler {
    exams: Arc<dyn ExamRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    classrooms: Arc<dyn ClassroomRepository>,
    allocations: Arc<dyn AllocationRepository>,
    runs: Mutex<()>,
}

impl AllocateSeatsHandler {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        classrooms: Arc<dyn ClassroomRepository>,
        allocations: Arc<dyn AllocationRepository>,
    ) -> Self {
        Self {
            exams,
            registrations,
            classrooms,
            allocations,
            runs: Mutex::new(()),
        }
    }

    /// Runs are serialized: a run reads the current seats and writes its own under one lock.
    pub async fn handle(
        &self,
        command: AllocateSeats,
    ) -> Result<AllocationOutcome, ApplicationError> {
        let exam_id = check_exam_id(command.exam_id).map_err(DecideError::from)?;
        let target = match command.target {
            AllocationTarget::Room(room_id) => AllocationTarget::Room(
                check_room_ids(&[room_id])
                    .map_err(DecideError::from)?
                    .remove(0),
            ),
            AllocationTarget::Rooms(room_ids) => {
                AllocationTarget::Rooms(check_room_ids(&room_ids).map_err(DecideError::from)?)
            }
        };
        let room_ids: Vec<RoomId> = match &target {
            AllocationTarget::Room(room_id) => vec![room_id.clone()],
            AllocationTarget::Rooms(room_ids) => room_ids.clone(),
        };

        let _run = self.runs.lock().await;

        let exam = self.exams.get(exam_id).await?;
        let mut rooms = Vec::with_capacity(room_ids.len());
        for room_id in room_ids {
            let found = self.classrooms.get(&room_id).await?;
            rooms.push((room_id, found));
        }
        let registrations = self.registrations.list_by_exam(exam_id).await?;
        let current = self.allocations.list_by_exam(exam_id, None).await?;

        let inputs = AllocationInputs {
            exam_id,
            exam: exam.as_ref(),
            rooms,
            registrations: &registrations,
            current: &current,
        };
        match decide_allocation(&target, inputs) {
            Decision::Accepted {
                scope,
                plan,
                considered,
            } => {
                let run_id = Uuid::now_v7();
                let seats = plan
                    .placements
                    .iter()
                    .map(|p| SeatAssignment {
                        exam_id,
                        stu_id: p.stu_id,
                        room_id: p.slot.room_id.clone(),
                        bench_id: p.slot.bench_id.clone(),
                        seat_no: p.slot.seat_no,
                        run_id,
                    })
                    .collect();
                self.allocations
                    .replace(exam_id, scope.clone(), seats)
                    .await?;

                let waiting = plan.waiting.len();
                if waiting > 0 {
                    warn!(%run_id, exam_id, waiting, "not every registrant got a seat");
                }
                info!(
                    %run_id,
                    exam_id,
                    ?scope,
                    allocated = plan.placements.len(),
                    "seats allocated"
                );
                Ok(AllocationOutcome {
                    run_id,
                    exam_id,
                    scope,
                    considered,
                    plan,
                })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
