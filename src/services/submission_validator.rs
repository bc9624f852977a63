// src/services/submission_validator.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::AppError,
    models::{
        exam::ExamDetail,
        submission::{SubmitAnswersRequest, SubmittedAnswer},
        user::User,
    },
    store::SchoolStore,
};

/// A request that passed structural and referential checks.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub exam: ExamDetail,
    pub student: User,
    pub answers: Vec<SubmittedAnswer>,
}

/// Checks a submission before anything is written.
pub struct SubmissionValidator {
    store: Arc<dyn SchoolStore>,
}

impl SubmissionValidator {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }

    /// Resolves the exam and the student a request refers to.
    ///
    /// Fails with `BadRequest` on a malformed request, an unknown exam, or a
    /// user that is missing or not a student. Read-only.
    pub async fn validate(&self, req: SubmitAnswersRequest) -> Result<ValidatedSubmission, AppError> {
        req.validate()?;

        let (Some(exam_id), Some(student_id)) = (req.exam_id, req.student_id) else {
            return Err(AppError::BadRequest("missing input or bad request".to_string()));
        };

        let exam = self
            .store
            .find_exam(exam_id)
            .await?
            .ok_or(AppError::BadRequest("Exam not found".to_string()))?;

        let student = self
            .store
            .find_user(student_id)
            .await?
            .filter(User::is_student)
            .ok_or(AppError::BadRequest("Student not found".to_string()))?;

        Ok(ValidatedSubmission {
            exam,
            student,
            answers: req.answers,
        })
    }
}
