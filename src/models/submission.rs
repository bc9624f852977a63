// src/models/submission.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{exam_result::ExamResult, question::QuestionDefinition};

/// DTO for submitting a student's answers for one exam.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(required(message = "exam_id is required"), range(min = 1))]
    pub exam_id: Option<i64>,

    #[validate(required(message = "student_id is required"), range(min = 1))]
    pub student_id: Option<i64>,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "At least one answer must be submitted"),
        custom(function = validate_unique_questions),
        nested
    )]
    pub answers: Vec<SubmittedAnswer>,
}

/// The option a student picked for one question.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmittedAnswer {
    #[validate(range(min = 1))]
    pub question_id: i64,

    #[validate(range(min = 0, message = "Answer index cannot be negative"))]
    pub answer: i32,
}

/// Rejects submissions that answer the same question twice.
fn validate_unique_questions(answers: &[SubmittedAnswer]) -> Result<(), validator::ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for a in answers {
        if !seen.insert(a.question_id) {
            return Err(validator::ValidationError::new("duplicate_question"));
        }
    }
    Ok(())
}

/// A stored question paired with the student's choice, echoed back after grading.
#[derive(Debug, Clone, Serialize)]
pub struct GradedQuestion {
    pub question_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub marks: i32,
    pub correct_answer: i32,
    pub submitted_answer: i32,
    pub is_correct: bool,
}

impl GradedQuestion {
    pub fn new(definition: &QuestionDefinition, submitted: &SubmittedAnswer) -> Self {
        Self {
            question_id: definition.id,
            question: definition.question.clone(),
            options: definition.options.0.clone(),
            marks: definition.marks,
            correct_answer: definition.correct_answer,
            submitted_answer: submitted.answer,
            is_correct: definition.correct_answer == submitted.answer,
        }
    }
}

/// Response body of a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub result: ExamResult,
    pub questions: Vec<GradedQuestion>,
}
