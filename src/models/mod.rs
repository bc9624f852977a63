// src/models/mod.rs

use std::fmt;

pub mod exam;
pub mod exam_result;
pub mod question;
pub mod student_answer;
pub mod submission;
pub mod user;

/// Raised when a text column holds a value that maps to no enum variant.
#[derive(Debug)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}
