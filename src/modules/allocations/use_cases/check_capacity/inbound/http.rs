use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::allocations::use_cases::check_capacity::handler::ApplicationError;
use crate::shared::core::primitives::{ExamId, blank_as_none};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CapacityQuery {
    #[serde(default)]
    pub room_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub exam_id: Option<ExamId>,
}

#[derive(Deserialize)]
pub struct CapacityBody {
    #[serde(default)]
    pub exam_id: ExamId,
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Selection(reason) => reason.into(),
            ApplicationError::Repository(e) => e.into(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<CapacityQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let report = state
        .check_capacity_handler
        .handle(query.exam_id, &[query.room_id])
        .await?;
    Ok(Json(report))
}

pub async fn handle_multi(
    State(state): State<AppState>,
    body: Result<Json<CapacityBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let report = state
        .check_capacity_handler
        .handle(Some(body.exam_id), &body.rooms)
        .await?;
    Ok(Json(report))
}
