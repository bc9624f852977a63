// src/models/exam_result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UnknownVariant;
use crate::config::PASSING_PERCENTAGE;

/// Pass/fail outcome of a graded exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl ResultStatus {
    /// Status for a rounded percentage against the fixed 35% threshold.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= PASSING_PERCENTAGE {
            ResultStatus::Pass
        } else {
            ResultStatus::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "Pass",
            ResultStatus::Fail => "Fail",
        }
    }

    pub fn message(&self) -> SubmissionMessage {
        match self {
            ResultStatus::Pass => SubmissionMessage::CongratulationsPass,
            ResultStatus::Fail => SubmissionMessage::Failed,
        }
    }
}

impl TryFrom<String> for ResultStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Pass" => Ok(ResultStatus::Pass),
            "Fail" => Ok(ResultStatus::Fail),
            _ => Err(UnknownVariant {
                kind: "result status",
                value,
            }),
        }
    }
}

/// Message returned to the student after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMessage {
    CongratulationsPass,
    Failed,
}

impl SubmissionMessage {
    pub fn text(&self) -> &'static str {
        match self {
            SubmissionMessage::CongratulationsPass => "Congratulations, you have passed the exam!",
            SubmissionMessage::Failed => "Sorry, you have failed the exam.",
        }
    }
}

/// Represents the 'exam_results' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub total_questions: i32,
    pub total_correct_answers: i32,
    pub total_wrong_answers: i32,
    pub total_marks: i32,
    pub score: i32,

    /// Rounded to two decimals.
    pub percentage: f64,

    #[sqlx(try_from = "String")]
    pub result_status: ResultStatus,

    /// Epoch milliseconds of the submission.
    pub submitted_at: String,
}

/// Insert form of [`ExamResult`].
#[derive(Debug, Clone)]
pub struct NewExamResult {
    pub exam_id: i64,
    pub student_id: i64,
    pub total_questions: i32,
    pub total_correct_answers: i32,
    pub total_wrong_answers: i32,
    pub total_marks: i32,
    pub score: i32,
    pub percentage: f64,
    pub result_status: ResultStatus,
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_stored_text() {
        assert_eq!(ResultStatus::try_from("Pass".to_string()).unwrap(), ResultStatus::Pass);
        assert_eq!(ResultStatus::try_from("Fail".to_string()).unwrap(), ResultStatus::Fail);
        assert!(ResultStatus::try_from("PASS".to_string()).is_err());
    }

    #[test]
    fn test_status_selects_message() {
        assert_eq!(ResultStatus::Pass.message(), SubmissionMessage::CongratulationsPass);
        assert_eq!(ResultStatus::Fail.message(), SubmissionMessage::Failed);
    }
}
