// src/handlers/exam.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::submission::{SubmissionResponse, SubmitAnswersRequest},
    services::SubmissionService,
    store::SchoolStore,
};

/// Submits a student's answers for an exam.
///
/// * Validates the request, the exam and the student.
/// * Stores one answer record per question.
/// * Grades the answers and stores the exam result.
/// * Mails the result report to the student (failures are only logged).
pub async fn submit_answers(
    State(service): State<Arc<SubmissionService>>,
    payload: Result<Json<SubmitAnswersRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected submission body: {}", e.body_text());
        AppError::BadRequest("missing input or bad request".to_string())
    })?;

    let outcome = service.submit(req).await?;

    Ok(Json(SubmissionResponse {
        success: true,
        message: outcome.message.text().to_string(),
        result: outcome.result,
        questions: outcome.questions,
    }))
}

/// Lists all exam results of a student, newest first.
pub async fn list_student_results(
    State(store): State<Arc<dyn SchoolStore>>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    store
        .find_user(student_id)
        .await?
        .ok_or(AppError::NotFound("Student not found".to_string()))?;

    let results = store.list_results_for_student(student_id).await?;

    Ok(Json(results))
}

/// Lists the stored answers of one student for one exam.
pub async fn list_student_answers(
    State(store): State<Arc<dyn SchoolStore>>,
    Path((exam_id, student_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let answers = store.list_student_answers(exam_id, student_id).await?;

    Ok(Json(answers))
}
