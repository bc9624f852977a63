// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const ANSWERS_SAVE_FAILED_MESSAGE: &str = "Failed to post the student answers";
pub const RESULT_SAVE_FAILED_MESSAGE: &str = "Failed to store student exam result";

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict (e.g., exam already submitted)
    Conflict(String),

    /// The answer batch could not be stored.
    /// Reported as 400 to keep the existing client contract.
    AnswersSaveFailed(String),

    /// The exam result could not be stored after grading.
    /// Answer records written before this point are kept.
    ResultSaveFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a `{ success: false, message }` JSON body with the matching status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::AnswersSaveFailed(msg) => {
                tracing::error!("Answer batch save failed: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ANSWERS_SAVE_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::ResultSaveFailed(msg) => {
                tracing::error!("Exam result save failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RESULT_SAVE_FAILED_MESSAGE.to_string(),
                )
            }
        };
        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
