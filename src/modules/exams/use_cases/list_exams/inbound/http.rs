use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.exams.list().await?))
}
