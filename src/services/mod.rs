// src/services/mod.rs

pub mod grading;
pub mod mailer;
pub mod report;
pub mod submission;
pub mod submission_validator;

pub use mailer::{LogMailer, Mailer, SmtpMailer};
pub use report::ReportRenderer;
pub use submission::{SubmissionOutcome, SubmissionService};
pub use submission_validator::{SubmissionValidator, ValidatedSubmission};
