// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{services::SubmissionService, store::SchoolStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
    pub submissions: Arc<SubmissionService>,
}

impl FromRef<AppState> for Arc<dyn SchoolStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SubmissionService> {
    fn from_ref(state: &AppState) -> Self {
        state.submissions.clone()
    }
}
