use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::students::use_cases::import_students::handler::ApplicationError;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ImportStudentsResponse {
    pub message: &'static str,
    pub inserted: usize,
    pub skipped_duplicates: usize,
}

// The request body is `{}`; nothing in it is read.
pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    match state.import_students_handler.handle().await {
        Ok(outcome) => Ok(Json(ImportStudentsResponse {
            message: "Student import completed",
            inserted: outcome.inserted,
            skipped_duplicates: outcome.skipped_duplicates,
        })),
        Err(ApplicationError::Roster(e)) => Err(ApiError::bad_request(e.to_string())),
        Err(ApplicationError::Repository(e)) => Err(e.into()),
    }
}
