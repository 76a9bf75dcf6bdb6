use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::primitives::ExamId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AllocationFilter {
    pub room_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<ExamId>, PathRejection>,
    filter: Result<Query<AllocationFilter>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(exam_id) = path?;
    let Query(filter) = filter?;
    if state.exams.get(exam_id).await?.is_none() {
        return Err(ApiError::not_found(format!("Exam {exam_id} not found")));
    }
    let rows = state
        .allocation_queries
        .by_exam(exam_id, filter.room_id.as_deref())
        .await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod list_allocations_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::allocations::adapters::outbound::allocation_repository::AllocationScope;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::allocations::seat;
    use crate::tests::fixtures::exams::{NewExamBuilder, seed_exam};
    use crate::tests::fixtures::students::{StudentBuilder, seed_students};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/exams/{exam_id}/allocations", get(handle))
            .with_state(state)
    }

    async fn seeded_state() -> AppState {
        let state = AppState::in_memory("students.csv");
        seed_exam(&state, NewExamBuilder::new().build()).await;
        seed_students(
            &state,
            vec![
                StudentBuilder::new().stu_id(1).build(),
                StudentBuilder::new().stu_id(2).stu_name("Ben Okafor").build(),
            ],
        )
        .await;
        state
            .allocations
            .replace(
                1,
                AllocationScope::Exam,
                vec![seat(1, 1, "A", "1", 1), seat(1, 2, "B", "1", 1)],
            )
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn it_should_return_the_seats_of_one_room() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::get("/exams/1/allocations?room_id=B")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["stu_name"], "Ben Okafor");
        assert_eq!(json[0]["seat_no"], 1);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_exam() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::get("/exams/3/allocations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_a_json_400_for_a_malformed_exam_id() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::get("/exams/abc/allocations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }
}
