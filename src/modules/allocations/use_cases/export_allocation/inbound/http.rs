use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use crate::modules::allocations::use_cases::export_allocation::{pdf, workbook};
use crate::modules::allocations::use_cases::list_allocations::queries::AllocationRow;
use crate::shared::core::primitives::{ExamId, blank_as_none};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub room_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub exam_id: Option<ExamId>,
}

async fn load_rows(state: &AppState, query: &ExportQuery) -> Result<Vec<AllocationRow>, ApiError> {
    let room_id = query.room_id.trim();
    if room_id.is_empty() {
        return Err(ApiError::bad_request("room_id is required"));
    }
    if state.classrooms.get(room_id).await?.is_none() {
        return Err(ApiError::not_found(format!("Classroom {room_id} not found")));
    }
    let rows = state
        .allocation_queries
        .by_room(room_id, query.exam_id)
        .await?;
    if rows.is_empty() {
        return Err(ApiError::not_found("No allocation found. Run /allocate first."));
    }
    Ok(rows)
}

fn attachment(content_type: &'static str, file_name: String, body: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
}

pub async fn handle_excel(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let rows = load_rows(&state, &query).await?;
    let room_id = query.room_id.trim();
    let body = workbook::render_workbook(&rows).map_err(|e| ApiError::internal(e.to_string()))?;
    info!(room_id, rows = rows.len(), "allocation exported as workbook");
    Ok(attachment(
        workbook::CONTENT_TYPE,
        format!("allocation_{room_id}.xlsx"),
        body,
    ))
}

pub async fn handle_pdf(
    State(state): State<AppState>,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let rows = load_rows(&state, &query).await?;
    let room_id = query.room_id.trim();
    let body = pdf::render_pdf(room_id, &rows);
    info!(room_id, rows = rows.len(), "allocation exported as pdf");
    Ok(attachment(
        pdf::CONTENT_TYPE,
        format!("allocation_{room_id}.pdf"),
        body,
    ))
}
