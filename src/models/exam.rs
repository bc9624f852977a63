// src/models/exam.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// An exam joined with the course and grade it is scheduled for.
/// Built from `exams`, `courses` and `grades`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamDetail {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub course_id: i64,
    pub course_name: String,

    pub grade_id: i64,
    pub grade_name: String,
}
