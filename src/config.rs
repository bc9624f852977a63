// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Minimum percentage a student needs to pass an exam.
pub const PASSING_PERCENTAGE: f64 = 35.0;

pub const DEFAULT_INSTITUTION_NAME: &str = "School Management System";

/// SMTP relay settings. Only present when `SMTP_HOST` is set.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub server_port: u16,

    /// Display name used to sign result notifications.
    pub institution_name: String,

    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let institution_name = env::var("INSTITUTION_NAME")
            .unwrap_or_else(|_| DEFAULT_INSTITUTION_NAME.to_string());

        let smtp = env::var("SMTP_HOST").ok().map(|host| {
            let username = env::var("SMTP_USERNAME").ok();
            let from = env::var("MAIL_FROM")
                .ok()
                .or_else(|| username.clone())
                .unwrap_or_else(|| format!("no-reply@{}", host));

            SmtpConfig {
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(587),
                password: env::var("SMTP_PASSWORD").ok(),
                host,
                username,
                from,
            }
        });

        Self {
            database_url,
            rust_log,
            server_port,
            institution_name,
            smtp,
        }
    }
}
