//! Backend contract consumed by the session store and dashboard pages.
//!
//! DESIGN
//! ======
//! Pages and the session store only see `dyn Backend`; whether answers come
//! from the in-process mock or a real HTTP service is a configuration choice
//! made once in `app.rs`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation resolves to `Result<_, ApiError>` and never panics; the
//! caller decides how to present the error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;

use super::http::HttpBackend;
use super::mock::{Latency, MockBackend};
use super::types::{
    AnalysisProgress, AnalysisResults, ApiError, ChatReply, DeleteReceipt, DocumentSummary, FileRecord, Profile,
    ProfileUpdate, SessionRecord, TokenGrant, TokenStatus, UpdatedProfile, UploadFile,
};
use crate::config::{BackendMode, ClientConfig};
use crate::util::storage::KeyValueStore;

pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const SIGNUP_FIELDS_REQUIRED: &str = "All fields are required";

/// Fail with a validation error if any field is empty.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] carrying `message`.
pub fn require_fields(fields: &[&str], message: &str) -> Result<(), ApiError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ApiError::Validation(message.to_owned()));
    }
    Ok(())
}

/// Operations the product expects from its service.
///
/// Futures are `?Send`: they run on the browser event loop via `spawn_local`.
#[async_trait(?Send)]
pub trait Backend: Send + Sync {
    // --- auth ---

    async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError>;

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionRecord, ApiError>;

    async fn login_with_google(&self) -> Result<SessionRecord, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn verify_token(&self) -> Result<TokenStatus, ApiError>;

    async fn refresh_token(&self) -> Result<TokenGrant, ApiError>;

    // --- files ---

    async fn upload_file(&self, file: Option<UploadFile>) -> Result<FileRecord, ApiError>;

    async fn get_analysis_status(&self, file_id: &str) -> Result<AnalysisProgress, ApiError>;

    async fn get_analysis_results(&self, file_id: &str) -> Result<AnalysisResults, ApiError>;

    async fn get_user_files(&self) -> Result<Vec<FileRecord>, ApiError>;

    async fn delete_file(&self, file_id: &str) -> Result<DeleteReceipt, ApiError>;

    // --- documents ---

    async fn get_summary(&self, document_id: &str) -> Result<DocumentSummary, ApiError>;

    async fn chat_with_document(&self, document_id: &str, message: &str) -> Result<ChatReply, ApiError>;

    // --- profile ---

    async fn get_profile(&self) -> Result<Profile, ApiError>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UpdatedProfile, ApiError>;
}

/// Shared backend handle provided through Leptos context.
#[derive(Clone)]
pub struct ApiClient(Arc<dyn Backend>);

impl ApiClient {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self(backend)
    }

    /// Backend chosen by `config`, sharing `storage` for the bearer token.
    pub fn from_config(config: &ClientConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let backend: Arc<dyn Backend> = match config.backend {
            BackendMode::Mock => {
                let latency = if config.mock_latency { Latency::simulated() } else { Latency::none() };
                log::info!("using mock backend (latency: {})", config.mock_latency);
                Arc::new(MockBackend::new(storage, latency))
            }
            BackendMode::Http => {
                log::info!("using http backend at {}", config.api_base_url);
                Arc::new(HttpBackend::new(&config.api_base_url, config.request_timeout, storage))
            }
        };
        Self::new(backend)
    }

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.0)
    }
}

impl Deref for ApiClient {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
