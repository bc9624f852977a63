// src/services/grading.rs

use crate::{
    error::AppError,
    models::{
        exam_result::{NewExamResult, ResultStatus},
        question::QuestionDefinition,
        submission::SubmittedAnswer,
    },
};

/// Aggregate statistics of one graded submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub total_questions: i32,
    pub total_correct_answers: i32,
    pub total_wrong_answers: i32,
    pub total_marks: i32,
    pub score: i32,
    /// Rounded to two decimals.
    pub percentage: f64,
    pub result_status: ResultStatus,
}

impl GradeSummary {
    pub fn into_new_result(self, exam_id: i64, student_id: i64, submitted_at: &str) -> NewExamResult {
        NewExamResult {
            exam_id,
            student_id,
            total_questions: self.total_questions,
            total_correct_answers: self.total_correct_answers,
            total_wrong_answers: self.total_wrong_answers,
            total_marks: self.total_marks,
            score: self.score,
            percentage: self.percentage,
            result_status: self.result_status,
            submitted_at: submitted_at.to_string(),
        }
    }
}

/// Grades stored questions against the student's choices in one pass.
///
/// Fails with `BadRequest` when the summed marks do not fit the stored `INT` columns.
pub fn grade(answered: &[(QuestionDefinition, SubmittedAnswer)]) -> Result<GradeSummary, AppError> {
    let mut total_correct_answers = 0;
    let mut total_wrong_answers = 0;
    let mut total_marks: i32 = 0;
    let mut score: i32 = 0;

    for (question, submitted) in answered {
        total_marks = total_marks
            .checked_add(question.marks)
            .ok_or_else(marks_out_of_range)?;
        if submitted.answer == question.correct_answer {
            total_correct_answers += 1;
            score = score.checked_add(question.marks).ok_or_else(marks_out_of_range)?;
        } else {
            total_wrong_answers += 1;
        }
    }

    let total_questions = i32::try_from(answered.len()).map_err(|_| {
        AppError::BadRequest("Too many answers in one submission".to_string())
    })?;
    let percentage = percentage_of(score, total_marks);

    Ok(GradeSummary {
        total_questions,
        total_correct_answers,
        total_wrong_answers,
        total_marks,
        score,
        percentage,
        result_status: ResultStatus::from_percentage(percentage),
    })
}

fn marks_out_of_range() -> AppError {
    AppError::BadRequest("Total marks of the exam are out of range".to_string())
}

/// `score / total_marks * 100` rounded half-up to two decimals.
/// Zero total marks yields 0.0.
pub fn percentage_of(score: i32, total_marks: i32) -> f64 {
    if total_marks <= 0 {
        return 0.0;
    }

    let raw = f64::from(score) * 100.0 / f64::from(total_marks);
    (raw * 100.0).round() / 100.0
}
