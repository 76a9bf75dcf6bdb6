use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::classrooms::core::classroom::Layout;
use crate::modules::classrooms::use_cases::create_classroom::command::CreateClassroom;
use crate::modules::classrooms::use_cases::create_classroom::decision::DecideError;
use crate::modules::classrooms::use_cases::create_classroom::handler::ApplicationError;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

fn default_seats_per_bench() -> u32 {
    2
}

#[derive(Deserialize)]
pub struct CreateClassroomBody {
    pub room_id: String,
    #[serde(default = "default_seats_per_bench")]
    pub seats_per_bench: u32,
    pub layout: Layout,
}

#[derive(Serialize)]
pub struct CreateClassroomResponse {
    pub message: &'static str,
    pub room_id: String,
    pub seats_per_bench: u32,
    pub benches_created: usize,
    pub capacity: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateClassroomBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let command = CreateClassroom {
        room_id: body.room_id,
        seats_per_bench: body.seats_per_bench,
        layout: body.layout,
    };

    match state.create_classroom_handler.handle(command).await {
        Ok(classroom) => Ok((
            StatusCode::CREATED,
            Json(CreateClassroomResponse {
                message: "Classroom created",
                benches_created: classroom.layout.len(),
                capacity: classroom.capacity(),
                room_id: classroom.room_id,
                seats_per_bench: classroom.seats_per_bench,
            }),
        )),
        Err(ApplicationError::Domain(reason @ DecideError::AlreadyExists(_))) => {
            Err(ApiError::conflict(reason.to_string()))
        }
        Err(ApplicationError::Domain(reason)) => Err(ApiError::bad_request(reason.to_string())),
        Err(ApplicationError::Repository(e)) => Err(e.into()),
    }
}
