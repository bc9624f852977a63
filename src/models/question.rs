// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'questions' table in the database.
/// The stored answer key; never carries a student's choice.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: i64,

    pub exam_id: i64,

    /// The text content of the question.
    pub question: String,

    /// List of options (e.g., ["Option A", "Option B"]).
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Points awarded for a correct answer.
    pub marks: i32,

    /// Index into `options` of the correct answer.
    pub correct_answer: i32,
}
