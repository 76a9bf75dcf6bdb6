use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::exams::use_cases::create_exam::command::CreateExam;
use crate::modules::exams::use_cases::create_exam::decision::DecideError;
use crate::modules::exams::use_cases::create_exam::handler::ApplicationError;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateExamBody {
    pub exam_name: String,
    pub exam_date: Option<String>,
    pub session: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateExamBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;

    let command = CreateExam {
        exam_name: body.exam_name,
        exam_date: body.exam_date,
        session: body.session,
    };

    match state.create_exam_handler.handle(command).await {
        Ok(exam) => Ok((StatusCode::CREATED, Json(exam))),
        Err(ApplicationError::Domain(reason @ DecideError::AlreadyExists(_))) => {
            Err(ApiError::conflict(reason.to_string()))
        }
        Err(ApplicationError::Domain(reason)) => Err(ApiError::bad_request(reason.to_string())),
        Err(ApplicationError::Repository(e)) => Err(e.into()),
    }
}
