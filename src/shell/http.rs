use std::time::Duration;

use axum::{
    Extension, Json, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::allocations::use_cases::allocate_seats::inbound::http as allocate_http;
use crate::modules::allocations::use_cases::check_capacity::inbound::http as capacity_http;
use crate::modules::allocations::use_cases::export_allocation::inbound::http as export_http;
use crate::modules::allocations::use_cases::list_allocations::inbound::http as list_allocations_http;
use crate::modules::allocations::use_cases::seat_lookup::inbound::http as seat_lookup_http;
use crate::modules::classrooms::use_cases::create_classroom::inbound::http as create_classroom_http;
use crate::modules::classrooms::use_cases::list_classrooms::inbound::http as list_classrooms_http;
use crate::modules::exams::use_cases::create_exam::inbound::http as create_exam_http;
use crate::modules::exams::use_cases::list_exams::inbound::http as list_exams_http;
use crate::modules::exams::use_cases::list_registrations::inbound::http as list_registrations_http;
use crate::modules::exams::use_cases::register_year::inbound::http as register_year_http;
use crate::modules::students::use_cases::import_students::inbound::http as import_students_http;
use crate::modules::students::use_cases::list_students::inbound::http as list_students_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "message": "Seat Allocator API is running" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/students", get(list_students_http::handle))
        .route("/students/import", post(import_students_http::handle))
        .route("/classrooms", get(list_classrooms_http::handle))
        .route("/classrooms/create", post(create_classroom_http::handle))
        .route(
            "/classrooms/{room_id}/benches",
            get(list_classrooms_http::handle_benches),
        )
        .route("/exams", get(list_exams_http::handle))
        .route("/exams/create", post(create_exam_http::handle))
        .route(
            "/exams/{exam_id}/register/year",
            post(register_year_http::handle),
        )
        .route(
            "/exams/{exam_id}/registrations",
            get(list_registrations_http::handle),
        )
        .route(
            "/exams/{exam_id}/allocations",
            get(list_allocations_http::handle),
        )
        .route("/allocate", post(allocate_http::handle_single))
        .route("/allocate/multi", post(allocate_http::handle_multi))
        .route("/capacity-check", get(capacity_http::handle))
        .route("/capacity-check/multi", post(capacity_http::handle_multi))
        .route("/export/allocation/excel", get(export_http::handle_excel))
        .route("/export/allocation/pdf", get(export_http::handle_pdf))
        .route("/public/seat-lookup", get(seat_lookup_http::handle))
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

/// REST routes plus `/gql`, with tracing and CORS.
pub fn app(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    router(state)
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
