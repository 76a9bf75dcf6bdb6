use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::core::primitives::{ExamId, StudentId};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct RegistrantView {
    pub stu_id: StudentId,
    pub stu_name: String,
    pub year: u32,
    pub subject: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ExamId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(exam_id) = path?;
    if state.exams.get(exam_id).await?.is_none() {
        return Err(ApiError::not_found(format!("Exam {exam_id} not found")));
    }
    let names: HashMap<StudentId, String> = state
        .students
        .list()
        .await?
        .into_iter()
        .map(|s| (s.stu_id, s.stu_name))
        .collect();
    let registrants: Vec<RegistrantView> = state
        .registrations
        .list_by_exam(exam_id)
        .await?
        .into_iter()
        .map(|r| RegistrantView {
            stu_name: names.get(&r.stu_id).cloned().unwrap_or_default(),
            stu_id: r.stu_id,
            year: r.year,
            subject: r.subject_code,
        })
        .collect();
    Ok(Json(registrants))
}
