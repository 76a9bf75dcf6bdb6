use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::allocations::use_cases::seat_lookup::handler::LookupError;
use crate::shared::core::primitives::{ExamId, StudentId, blank_as_none};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SeatLookupQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub exam_id: Option<ExamId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub stu_id: Option<StudentId>,
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::MissingIds => ApiError::bad_request(err.to_string()),
            LookupError::Repository(e) => e.into(),
            _ => ApiError::not_found(err.to_string()),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<SeatLookupQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let found = state
        .seat_lookup_handler
        .handle(query.exam_id.unwrap_or(0), query.stu_id.unwrap_or(0))
        .await?;
    Ok(Json(found))
}
