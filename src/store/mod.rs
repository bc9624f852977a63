// src/store/mod.rs

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        exam::ExamDetail,
        exam_result::{ExamResult, NewExamResult},
        question::QuestionDefinition,
        student_answer::{NewStudentAnswer, StudentAnswerRecord},
        user::User,
    },
};

pub mod postgres;

pub use postgres::PgStore;

/// Persistence used by the submission workflow.
///
/// Every method is a single statement; callers get no transaction spanning
/// several calls.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Exam with its course and grade names.
    async fn find_exam(&self, id: i64) -> Result<Option<ExamDetail>, AppError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_question(&self, id: i64) -> Result<Option<QuestionDefinition>, AppError>;

    async fn find_exam_result(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<ExamResult>, AppError>;

    /// Inserts all answers of one submission in a single batch.
    async fn save_student_answers(
        &self,
        answers: &[NewStudentAnswer],
    ) -> Result<Vec<StudentAnswerRecord>, AppError>;

    async fn save_exam_result(&self, result: &NewExamResult) -> Result<ExamResult, AppError>;

    /// Results of one student, newest first.
    async fn list_results_for_student(&self, student_id: i64) -> Result<Vec<ExamResult>, AppError>;

    async fn list_student_answers(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Vec<StudentAnswerRecord>, AppError>;
}
