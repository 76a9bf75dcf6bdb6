use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::exams::use_cases::register_year::command::RegisterYear;
use crate::modules::exams::use_cases::register_year::decision::DecideError;
use crate::modules::exams::use_cases::register_year::handler::ApplicationError;
use crate::shared::core::primitives::ExamId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterYearBody {
    pub year: u32,
}

#[derive(Serialize)]
pub struct RegisterYearResponse {
    pub message: &'static str,
    pub exam_id: ExamId,
    pub year: u32,
    pub registered: usize,
    pub already_registered: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ExamId>, PathRejection>,
    body: Result<Json<RegisterYearBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(exam_id) = path?;
    let Json(body) = body?;

    let command = RegisterYear {
        exam_id,
        year: body.year,
    };

    match state.register_year_handler.handle(command).await {
        Ok(outcome) => Ok(Json(RegisterYearResponse {
            message: "Registration completed",
            exam_id,
            year: body.year,
            registered: outcome.registered,
            already_registered: outcome.already_registered,
        })),
        Err(ApplicationError::Domain(reason @ DecideError::InvalidYear)) => {
            Err(ApiError::bad_request(reason.to_string()))
        }
        Err(ApplicationError::Domain(reason)) => Err(ApiError::not_found(reason.to_string())),
        Err(ApplicationError::Repository(e)) => Err(e.into()),
    }
}
