// src/models/student_answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'student_answers' table in the database.
/// One row per (exam, question, student); never updated.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentAnswerRecord {
    pub id: i64,
    pub exam_id: i64,
    pub question_id: i64,
    pub student_id: i64,

    /// Option index the student chose.
    pub answer: i32,

    /// Epoch milliseconds, shared by every record of one submission.
    pub submitted_at: String,
}

/// Insert form of [`StudentAnswerRecord`].
#[derive(Debug, Clone)]
pub struct NewStudentAnswer {
    pub exam_id: i64,
    pub question_id: i64,
    pub student_id: i64,
    pub answer: i32,
    pub submitted_at: String,
}
