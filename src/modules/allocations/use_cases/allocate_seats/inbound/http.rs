use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::allocations::use_cases::allocate_seats::command::{
    AllocateSeats, AllocationTarget,
};
use crate::modules::allocations::use_cases::allocate_seats::decision::DecideError;
use crate::modules::allocations::use_cases::allocate_seats::handler::ApplicationError;
use crate::shared::core::primitives::{ExamId, RoomId, StudentId};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AllocateBody {
    #[serde(default)]
    pub exam_id: ExamId,
    #[serde(default)]
    pub room_id: String,
}

#[derive(Deserialize)]
pub struct AllocateMultiBody {
    #[serde(default)]
    pub exam_id: ExamId,
    #[serde(default)]
    pub rooms: Vec<String>,
}

#[derive(Serialize)]
pub struct AllocateResponse {
    pub message: &'static str,
    pub exam_id: ExamId,
    pub room_id: RoomId,
    pub run_id: Uuid,
    pub allocated: usize,
    pub waiting: usize,
}

#[derive(Serialize)]
pub struct RoomAllocation {
    pub room_id: RoomId,
    pub capacity: usize,
    pub allocated: usize,
}

#[derive(Serialize)]
pub struct AllocateMultiResponse {
    pub message: &'static str,
    pub exam_id: ExamId,
    pub run_id: Uuid,
    pub total_registered: usize,
    pub allocated: usize,
    pub waiting: usize,
    pub rooms: Vec<RoomAllocation>,
    pub waiting_students: Vec<StudentId>,
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DecideError::Selection(reason)) => reason.into(),
            ApplicationError::Domain(reason @ DecideError::NoRegistrations(_)) => {
                ApiError::conflict(reason.to_string())
            }
            ApplicationError::Repository(e) => e.into(),
        }
    }
}

pub async fn handle_single(
    State(state): State<AppState>,
    body: Result<Json<AllocateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let command = AllocateSeats {
        exam_id: body.exam_id,
        target: AllocationTarget::Room(body.room_id),
    };
    let outcome = state.allocate_seats_handler.handle(command).await?;
    let room = outcome.plan.rooms.first();

    Ok(Json(AllocateResponse {
        message: "Allocation completed",
        exam_id: outcome.exam_id,
        room_id: room.map(|r| r.room_id.clone()).unwrap_or_default(),
        run_id: outcome.run_id,
        allocated: outcome.plan.placements.len(),
        waiting: outcome.plan.waiting.len(),
    }))
}

pub async fn handle_multi(
    State(state): State<AppState>,
    body: Result<Json<AllocateMultiBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let command = AllocateSeats {
        exam_id: body.exam_id,
        target: AllocationTarget::Rooms(body.rooms),
    };
    let outcome = state.allocate_seats_handler.handle(command).await?;

    Ok(Json(AllocateMultiResponse {
        message: "Multi-room allocation completed",
        exam_id: outcome.exam_id,
        run_id: outcome.run_id,
        total_registered: outcome.considered,
        allocated: outcome.plan.placements.len(),
        waiting: outcome.plan.waiting.len(),
        rooms: outcome
            .plan
            .rooms
            .into_iter()
            .map(|r| RoomAllocation {
                room_id: r.room_id,
                capacity: r.capacity,
                allocated: r.allocated,
            })
            .collect(),
        waiting_students: outcome.plan.waiting,
    }))
}
