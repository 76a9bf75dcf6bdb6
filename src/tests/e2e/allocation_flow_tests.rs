use std::collections::{HashMap, HashSet};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::app;
use crate::shell::state::AppState;
use crate::tests::fixtures::roster::RosterFile;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn allocates_a_year_cohort_across_two_rooms() {
    let roster = RosterFile::with_rows(&[
        "1,Asha Rao,2,CS301",
        "2,Ben Okafor,2,EE210",
        "3,Chen Li,2,CS301",
        "4,Dara Singh,2,EE210",
        "5,Eli Novak,2,ME110",
        "6,Farah Aziz,2,CS301",
        "7,Goran Petrov,2,EE210",
        "8,Hana Sato,1,CS301",
    ]);
    let app = app(AppState::in_memory(roster.path()));

    let (status, json) = call(&app, post("/students/import", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["inserted"], 8);

    for (room_id, benches) in [("A101", 2), ("B201", 3)] {
        let layout: HashMap<String, u32> = (1..=benches).map(|b| (b.to_string(), 2)).collect();
        let (status, _) = call(
            &app,
            post(
                "/classrooms/create",
                json!({"room_id": room_id, "seats_per_bench": 2, "layout": layout}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, exam) = call(
        &app,
        post(
            "/exams/create",
            json!({"exam_name": "Data Structures", "exam_date": "2026-11-20", "session": "FN"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let exam_id = exam["id"].as_i64().unwrap();

    let (status, json) = call(
        &app,
        post(&format!("/exams/{exam_id}/register/year"), json!({"year": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["registered"], 7);

    let (_, report) = call(
        &app,
        post(
            "/capacity-check/multi",
            json!({"exam_id": exam_id, "rooms": ["A101", "B201"]}),
        ),
    )
    .await;
    assert_eq!(report["total_capacity"], 10);
    assert_eq!(report["fits"], true);

    let (status, run) = call(
        &app,
        post(
            "/allocate/multi",
            json!({"exam_id": exam_id, "rooms": ["A101", "B201"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(run["allocated"], 7);
    assert_eq!(run["waiting"], 0);
    assert_eq!(run["rooms"][0]["allocated"], 3);
    assert_eq!(run["rooms"][1]["allocated"], 4);

    let (_, seats) = call(&app, get(&format!("/exams/{exam_id}/allocations"))).await;
    let seats = seats.as_array().unwrap();
    assert_eq!(seats.len(), 7);
    let positions: HashSet<_> = seats
        .iter()
        .map(|s| (s["room_id"].clone(), s["bench_id"].clone(), s["seat_no"].clone()))
        .collect();
    assert_eq!(positions.len(), 7);

    let mut benches: HashMap<(String, String), Vec<String>> = HashMap::new();
    for seat in seats {
        benches
            .entry((
                seat["room_id"].as_str().unwrap().to_string(),
                seat["bench_id"].as_str().unwrap().to_string(),
            ))
            .or_default()
            .push(seat["subject"].as_str().unwrap().to_string());
    }
    for mates in benches.values().filter(|m| m.len() == 2) {
        assert_ne!(mates[0], mates[1], "bench-mates share a subject: {mates:?}");
    }

    let (status, found) = call(
        &app,
        get(&format!("/public/seat-lookup?exam_id={exam_id}&stu_id=5")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["stu_name"], "Eli Novak");

    let (status, _) = call(
        &app,
        get(&format!("/public/seat-lookup?exam_id={exam_id}&stu_id=8")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get(&format!(
            "/export/allocation/pdf?room_id=B201&exam_id={exam_id}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn single_room_runs_fill_rooms_one_after_another() {
    let roster = RosterFile::with_rows(&[
        "1,Asha Rao,3,CS301",
        "2,Ben Okafor,3,EE210",
        "3,Chen Li,3,CS301",
    ]);
    let app = app(AppState::in_memory(roster.path()));
    call(&app, post("/students/import", json!({}))).await;
    for room_id in ["A101", "B201"] {
        call(
            &app,
            post(
                "/classrooms/create",
                json!({"room_id": room_id, "layout": {"1": 2}}),
            ),
        )
        .await;
    }
    call(&app, post("/exams/create", json!({"exam_name": "Circuits"}))).await;
    call(&app, post("/exams/1/register/year", json!({"year": 3}))).await;

    let (_, first) = call(&app, post("/allocate", json!({"exam_id": 1, "room_id": "A101"}))).await;
    assert_eq!(first["allocated"], 2);
    assert_eq!(first["waiting"], 1);

    let (_, second) = call(&app, post("/allocate", json!({"exam_id": 1, "room_id": "B201"}))).await;
    assert_eq!(second["allocated"], 1);
    assert_eq!(second["waiting"], 0);

    let (_, seats) = call(&app, get("/exams/1/allocations?room_id=A101")).await;
    assert_eq!(seats.as_array().unwrap().len(), 2);
}
