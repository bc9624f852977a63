// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::SchoolStore;
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

const EXAM_RESULT_COLUMNS: &str = "id, exam_id, student_id, total_questions, total_correct_answers, \
     total_wrong_answers, total_marks, score, percentage, result_status, submitted_at";

const STUDENT_ANSWER_COLUMNS: &str = "id, exam_id, question_id, student_id, answer, submitted_at";

/// `SchoolStore` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolStore for PgStore {
    async fn find_exam(&self, id: i64) -> Result<Option<ExamDetail>, AppError> {
        let exam = sqlx::query_as::<_, ExamDetail>(
            r#"
            SELECT
                e.id,
                e.name,
                e.start_time,
                e.end_time,
                c.id as course_id,
                c.name as course_name,
                g.id as grade_id,
                g.name as grade_name
            FROM exams e
            JOIN courses c ON e.course_id = c.id
            JOIN grades g ON c.grade_id = g.id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch exam {}: {:?}", id, e);
            AppError::from(e)
        })?;

        Ok(exam)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email_id, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_question(&self, id: i64) -> Result<Option<QuestionDefinition>, AppError> {
        let question = sqlx::query_as::<_, QuestionDefinition>(
            r#"
            SELECT id, exam_id, question, options, marks, correct_answer
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn find_exam_result(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<ExamResult>, AppError> {
        let sql = format!(
            "SELECT {} FROM exam_results WHERE exam_id = $1 AND student_id = $2",
            EXAM_RESULT_COLUMNS
        );

        let result = sqlx::query_as::<_, ExamResult>(&sql)
            .bind(exam_id)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    async fn save_student_answers(
        &self,
        answers: &[NewStudentAnswer],
    ) -> Result<Vec<StudentAnswerRecord>, AppError> {
        if answers.is_empty() {
            return Ok(Vec::new());
        }

        // Single multi-row INSERT
        let mut query_builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO student_answers (exam_id, question_id, student_id, answer, submitted_at) ",
        );

        query_builder.push_values(answers, |mut row, a| {
            row.push_bind(a.exam_id)
                .push_bind(a.question_id)
                .push_bind(a.student_id)
                .push_bind(a.answer)
                .push_bind(a.submitted_at.clone());
        });
        query_builder.push(" RETURNING ");
        query_builder.push(STUDENT_ANSWER_COLUMNS);

        let saved = query_builder
            .build_query_as::<StudentAnswerRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn save_exam_result(&self, result: &NewExamResult) -> Result<ExamResult, AppError> {
        let sql = format!(
            r#"
            INSERT INTO exam_results (
                exam_id, student_id, total_questions, total_correct_answers,
                total_wrong_answers, total_marks, score, percentage, result_status, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            EXAM_RESULT_COLUMNS
        );

        let saved = sqlx::query_as::<_, ExamResult>(&sql)
            .bind(result.exam_id)
            .bind(result.student_id)
            .bind(result.total_questions)
            .bind(result.total_correct_answers)
            .bind(result.total_wrong_answers)
            .bind(result.total_marks)
            .bind(result.score)
            .bind(result.percentage)
            .bind(result.result_status.as_str())
            .bind(&result.submitted_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn list_results_for_student(&self, student_id: i64) -> Result<Vec<ExamResult>, AppError> {
        let sql = format!(
            "SELECT {} FROM exam_results WHERE student_id = $1 ORDER BY id DESC",
            EXAM_RESULT_COLUMNS
        );

        let results = sqlx::query_as::<_, ExamResult>(&sql)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(results)
    }

    async fn list_student_answers(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Vec<StudentAnswerRecord>, AppError> {
        let sql = format!(
            "SELECT {} FROM student_answers WHERE exam_id = $1 AND student_id = $2 ORDER BY id",
            STUDENT_ANSWER_COLUMNS
        );

        let answers = sqlx::query_as::<_, StudentAnswerRecord>(&sql)
            .bind(exam_id)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(answers)
    }
}
