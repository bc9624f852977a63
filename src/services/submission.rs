// src/services/submission.rs

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{
        exam::ExamDetail,
        exam_result::{ExamResult, SubmissionMessage},
        question::QuestionDefinition,
        student_answer::NewStudentAnswer,
        submission::{GradedQuestion, SubmitAnswersRequest, SubmittedAnswer},
        user::User,
    },
    services::{
        grading,
        mailer::Mailer,
        report::ReportRenderer,
        submission_validator::{SubmissionValidator, ValidatedSubmission},
    },
    store::SchoolStore,
    utils::time::now_epoch_millis,
};

/// What a completed submission reports back to the caller.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub message: SubmissionMessage,
    pub result: ExamResult,
    pub questions: Vec<GradedQuestion>,
}

/// Runs one exam submission end to end:
/// validate, record answers, grade, store the result, notify the student.
///
/// The answer batch and the result are two separate writes. If the result
/// cannot be stored, the answers already written stay in place.
pub struct SubmissionService {
    store: Arc<dyn SchoolStore>,
    mailer: Arc<dyn Mailer>,
    validator: SubmissionValidator,
    renderer: ReportRenderer,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SchoolStore>, mailer: Arc<dyn Mailer>, renderer: ReportRenderer) -> Self {
        Self {
            validator: SubmissionValidator::new(store.clone()),
            store,
            mailer,
            renderer,
        }
    }

    pub async fn submit(&self, req: SubmitAnswersRequest) -> Result<SubmissionOutcome, AppError> {
        tracing::info!("Request received for add student answers");

        let ValidatedSubmission {
            exam,
            student,
            answers,
        } = self.validator.validate(req).await.inspect_err(|e| {
            tracing::warn!("Submission rejected: {}", e);
        })?;

        if self.store.find_exam_result(exam.id, student.id).await?.is_some() {
            tracing::warn!(
                "Duplicate submission for exam {} by student {}",
                exam.id,
                student.id
            );
            return Err(AppError::Conflict(
                "Exam has already been submitted by this student".to_string(),
            ));
        }

        let answered = self.resolve_questions(&exam, answers).await?;

        // Graded before any write; an out-of-range total aborts with nothing stored
        let summary = grading::grade(&answered)?;

        if summary.total_marks == 0 {
            return Err(AppError::BadRequest(
                "Exam must have at least one scored question".to_string(),
            ));
        }

        tracing::info!(
            "Submission validated: exam {} student {} ({} answers)",
            exam.id,
            student.id,
            answered.len()
        );

        let submitted_at = now_epoch_millis();
        self.record_answers(&exam, &student, &answered, &submitted_at)
            .await?;

        tracing::info!(
            "Graded exam {} for student {}: {}/{} ({:.2}%)",
            exam.id,
            student.id,
            summary.score,
            summary.total_marks,
            summary.percentage
        );

        let new_result = summary.into_new_result(exam.id, student.id, &submitted_at);
        let result = self
            .store
            .save_exam_result(&new_result)
            .await
            .map_err(|e| AppError::ResultSaveFailed(e.to_string()))?;

        self.notify(&exam, &student, &result).await;

        let questions = answered
            .iter()
            .map(|(q, a)| GradedQuestion::new(q, a))
            .collect();

        Ok(SubmissionOutcome {
            message: result.result_status.message(),
            result,
            questions,
        })
    }

    /// Pairs every submitted answer with its stored question.
    /// Runs before any write, so a bad id leaves nothing behind.
    async fn resolve_questions(
        &self,
        exam: &ExamDetail,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<Vec<(QuestionDefinition, SubmittedAnswer)>, AppError> {
        let mut answered = Vec::with_capacity(answers.len());

        for answer in answers {
            let question = self
                .store
                .find_question(answer.question_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Question {} not found", answer.question_id))
                })?;

            if question.exam_id != exam.id {
                return Err(AppError::BadRequest(format!(
                    "Question {} does not belong to exam {}",
                    question.id, exam.id
                )));
            }

            answered.push((question, answer));
        }

        Ok(answered)
    }

    async fn record_answers(
        &self,
        exam: &ExamDetail,
        student: &User,
        answered: &[(QuestionDefinition, SubmittedAnswer)],
        submitted_at: &str,
    ) -> Result<(), AppError> {
        let records: Vec<NewStudentAnswer> = answered
            .iter()
            .map(|(question, submitted)| NewStudentAnswer {
                exam_id: exam.id,
                question_id: question.id,
                student_id: student.id,
                answer: submitted.answer,
                submitted_at: submitted_at.to_string(),
            })
            .collect();

        let saved = self
            .store
            .save_student_answers(&records)
            .await
            .map_err(|e| AppError::AnswersSaveFailed(e.to_string()))?;

        if saved.len() != records.len() {
            return Err(AppError::AnswersSaveFailed(format!(
                "stored {} of {} answers",
                saved.len(),
                records.len()
            )));
        }

        Ok(())
    }

    /// Best-effort; a delivery failure is only logged.
    async fn notify(&self, exam: &ExamDetail, student: &User, result: &ExamResult) {
        let subject = self.renderer.subject(exam);
        let body = self.renderer.render(exam, result);

        match self.mailer.send(&student.email_id, &subject, &body).await {
            Ok(()) => tracing::info!("Exam Result Mail Sent to {}", student.email_id),
            Err(e) => tracing::error!(
                "Failed to send Exam Result Mail to {}: {}",
                student.email_id,
                e
            ),
        }
    }
}
