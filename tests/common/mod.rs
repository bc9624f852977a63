// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use school_backend::{
    error::AppError,
    models::{
        exam::ExamDetail,
        exam_result::{ExamResult, NewExamResult},
        question::QuestionDefinition,
        student_answer::{NewStudentAnswer, StudentAnswerRecord},
        user::{User, UserRole},
    },
    routes,
    services::{Mailer, ReportRenderer, SubmissionService, mailer::MailError},
    state::AppState,
    store::SchoolStore,
};
use sqlx::types::Json;

pub const EXAM_ID: i64 = 1;
pub const ZERO_MARK_EXAM_ID: i64 = 2;
pub const OVERSIZED_EXAM_ID: i64 = 3;
pub const STUDENT_ID: i64 = 7;
pub const TEACHER_ID: i64 = 8;
pub const STUDENT_EMAIL: &str = "lisa@springfield.edu";

#[derive(Default)]
struct Tables {
    exams: HashMap<i64, ExamDetail>,
    users: HashMap<i64, User>,
    questions: HashMap<i64, QuestionDefinition>,
    answers: Vec<StudentAnswerRecord>,
    results: Vec<ExamResult>,
}

/// In-memory `SchoolStore` with switches to make the write paths fail.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    pub fail_answer_save: AtomicBool,
    pub fail_result_save: AtomicBool,
    /// Stores and returns one answer fewer than it was given.
    pub truncate_answer_batch: AtomicBool,
}

impl MemoryStore {
    /// Exam 1 (Grade 10 / Mathematics / Midterm) with questions 1 and 2,
    /// marks [5, 5], correct indices [1, 2].
    /// Exam 2 holds a single zero-mark question 3.
    /// Exam 3 holds questions 4 and 5 worth `i32::MAX` marks each.
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut t = store.tables.lock().unwrap();

            for (id, name) in [
                (EXAM_ID, "Midterm"),
                (ZERO_MARK_EXAM_ID, "Practice Quiz"),
                (OVERSIZED_EXAM_ID, "Final"),
            ] {
                t.exams.insert(
                    id,
                    ExamDetail {
                        id,
                        name: name.to_string(),
                        start_time: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
                        end_time: Utc.with_ymd_and_hms(2024, 3, 5, 11, 0, 0).unwrap(),
                        course_id: 2,
                        course_name: "Mathematics".to_string(),
                        grade_id: 1,
                        grade_name: "Grade 10".to_string(),
                    },
                );
            }

            t.users.insert(
                STUDENT_ID,
                User {
                    id: STUDENT_ID,
                    first_name: "Lisa".to_string(),
                    last_name: "Simpson".to_string(),
                    email_id: STUDENT_EMAIL.to_string(),
                    role: UserRole::Student,
                },
            );
            t.users.insert(
                TEACHER_ID,
                User {
                    id: TEACHER_ID,
                    first_name: "Edna".to_string(),
                    last_name: "Krabappel".to_string(),
                    email_id: "edna@springfield.edu".to_string(),
                    role: UserRole::Teacher,
                },
            );

            for (id, exam_id, marks, correct) in [
                (1, EXAM_ID, 5, 1),
                (2, EXAM_ID, 5, 2),
                (3, ZERO_MARK_EXAM_ID, 0, 1),
                (4, OVERSIZED_EXAM_ID, i32::MAX, 1),
                (5, OVERSIZED_EXAM_ID, i32::MAX, 1),
            ] {
                t.questions.insert(
                    id,
                    QuestionDefinition {
                        id,
                        exam_id,
                        question: format!("Question {}", id),
                        options: Json(vec!["A".into(), "B".into(), "C".into(), "D".into()]),
                        marks,
                        correct_answer: correct,
                    },
                );
            }
        }
        store
    }

    pub fn answers(&self) -> Vec<StudentAnswerRecord> {
        self.tables.lock().unwrap().answers.clone()
    }

    pub fn results(&self) -> Vec<ExamResult> {
        self.tables.lock().unwrap().results.clone()
    }

    pub fn question(&self, id: i64) -> QuestionDefinition {
        self.tables.lock().unwrap().questions[&id].clone()
    }
}

#[async_trait]
impl SchoolStore for MemoryStore {
    async fn find_exam(&self, id: i64) -> Result<Option<ExamDetail>, AppError> {
        Ok(self.tables.lock().unwrap().exams.get(&id).cloned())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.tables.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_question(&self, id: i64) -> Result<Option<QuestionDefinition>, AppError> {
        Ok(self.tables.lock().unwrap().questions.get(&id).cloned())
    }

    async fn find_exam_result(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Option<ExamResult>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .results
            .iter()
            .find(|r| r.exam_id == exam_id && r.student_id == student_id)
            .cloned())
    }

    async fn save_student_answers(
        &self,
        answers: &[NewStudentAnswer],
    ) -> Result<Vec<StudentAnswerRecord>, AppError> {
        if self.fail_answer_save.load(Ordering::SeqCst) {
            return Err(AppError::InternalServerError("connection reset".to_string()));
        }

        let kept = if self.truncate_answer_batch.load(Ordering::SeqCst) {
            &answers[..answers.len().saturating_sub(1)]
        } else {
            answers
        };

        let mut t = self.tables.lock().unwrap();
        let mut saved = Vec::with_capacity(kept.len());
        for a in kept {
            let record = StudentAnswerRecord {
                id: t.answers.len() as i64 + 1,
                exam_id: a.exam_id,
                question_id: a.question_id,
                student_id: a.student_id,
                answer: a.answer,
                submitted_at: a.submitted_at.clone(),
            };
            t.answers.push(record.clone());
            saved.push(record);
        }
        Ok(saved)
    }

    async fn save_exam_result(&self, result: &NewExamResult) -> Result<ExamResult, AppError> {
        if self.fail_result_save.load(Ordering::SeqCst) {
            return Err(AppError::InternalServerError("disk full".to_string()));
        }

        let mut t = self.tables.lock().unwrap();
        let saved = ExamResult {
            id: t.results.len() as i64 + 1,
            exam_id: result.exam_id,
            student_id: result.student_id,
            total_questions: result.total_questions,
            total_correct_answers: result.total_correct_answers,
            total_wrong_answers: result.total_wrong_answers,
            total_marks: result.total_marks,
            score: result.score,
            percentage: result.percentage,
            result_status: result.result_status,
            submitted_at: result.submitted_at.clone(),
        };
        t.results.push(saved.clone());
        Ok(saved)
    }

    async fn list_results_for_student(&self, student_id: i64) -> Result<Vec<ExamResult>, AppError> {
        let mut results: Vec<ExamResult> = self
            .tables
            .lock()
            .unwrap()
            .results
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(results)
    }

    async fn list_student_answers(
        &self,
        exam_id: i64,
        student_id: i64,
    ) -> Result<Vec<StudentAnswerRecord>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .answers
            .iter()
            .filter(|a| a.exam_id == exam_id && a.student_id == student_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Keeps every message it is asked to send; optionally refuses all of them.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        if self.fail {
            return Err("smtp relay unreachable".into());
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}

pub fn submission_service(store: Arc<MemoryStore>, mailer: Arc<RecordingMailer>) -> SubmissionService {
    SubmissionService::new(store, mailer, ReportRenderer::new("Springfield High"))
}

/// Spawns the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(store: Arc<MemoryStore>, mailer: Arc<RecordingMailer>) -> String {
    let state = AppState {
        submissions: Arc::new(submission_service(store.clone(), mailer)),
        store,
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
