use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::classrooms::core::classroom::{Bench, Classroom, Layout};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ClassroomView {
    pub room_id: String,
    pub seats_per_bench: u32,
    pub layout: Layout,
    pub capacity: usize,
}

impl From<Classroom> for ClassroomView {
    fn from(classroom: Classroom) -> Self {
        Self {
            capacity: classroom.capacity(),
            room_id: classroom.room_id,
            seats_per_bench: classroom.seats_per_bench,
            layout: classroom.layout,
        }
    }
}

#[derive(Serialize)]
pub struct BenchesResponse {
    pub room_id: String,
    pub total_benches: usize,
    pub capacity: usize,
    pub benches: Vec<Bench>,
}

pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let classrooms = state.classrooms.list().await?;
    Ok(Json(
        classrooms
            .into_iter()
            .map(ClassroomView::from)
            .collect::<Vec<_>>(),
    ))
}

pub async fn handle_benches(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(room_id) = path?;
    let classroom = state
        .classrooms
        .get(&room_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Classroom {room_id} not found")))?;
    let benches = classroom.benches();
    Ok(Json(BenchesResponse {
        total_benches: benches.len(),
        capacity: classroom.capacity(),
        room_id: classroom.room_id,
        benches,
    }))
}

#[cfg(test)]
mod list_classrooms_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::classrooms::{ClassroomBuilder, seed_classrooms};

    use super::{handle, handle_benches};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/classrooms", get(handle))
            .route("/classrooms/{room_id}/benches", get(handle_benches))
            .with_state(state)
    }

    async fn seeded_state() -> AppState {
        let state = AppState::in_memory("students.csv");
        seed_classrooms(
            &state,
            vec![
                ClassroomBuilder::new()
                    .room_id("B201")
                    .seats_per_bench(2)
                    .bench("10", 3)
                    .bench("2", 1)
                    .build(),
            ],
        )
        .await;
        state
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_rooms_and_their_capacity() {
        let response = app(seeded_state().await)
            .oneshot(Request::get("/classrooms").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "room_id": "B201",
                "seats_per_bench": 2,
                "layout": {"10": 3, "2": 1},
                "capacity": 3
            }])
        );
    }

    #[tokio::test]
    async fn it_should_list_benches_in_natural_order() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::get("/classrooms/B201/benches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["total_benches"], 2);
        assert_eq!(json["benches"][0]["bench_id"], "2");
        assert_eq!(json["benches"][1]["seat_count"], 2);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_room() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::get("/classrooms/Z999/benches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
