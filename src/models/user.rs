// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UnknownVariant;

/// Role a user holds in the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl TryFrom<String> for UserRole {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            _ => Err(UnknownVariant {
                kind: "user role",
                value,
            }),
        }
    }
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Address result notifications are sent to.
    pub email_id: String,

    #[sqlx(try_from = "String")]
    pub role: UserRole,
}

impl User {
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}
