// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::exam, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the exam submission and result routes under `/api/exam`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, submission service).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let exam_routes = Router::new()
        .route("/answers", post(exam::submit_answers))
        .route("/results/student/{student_id}", get(exam::list_student_results))
        .route(
            "/{exam_id}/answers/student/{student_id}",
            get(exam::list_student_answers),
        );

    Router::new()
        .nest("/api/exam", exam_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
