//! In-process backend that fabricates every answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This stands in for the document-analysis service. It validates input the
//! way the service would, waits a fixed simulated latency, then returns
//! canned or randomized data. The only side effect is the bearer token kept
//! under `authToken` in durable storage.
//!
//! Validation always runs before the latency so bad input fails fast.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use uuid::Uuid;

use super::api::{Backend, LOGIN_FIELDS_REQUIRED, SIGNUP_FIELDS_REQUIRED, require_fields};
use super::types::{
    AnalysisProgress, AnalysisResults, AnalysisStatus, ApiError, ChatReply, DeleteReceipt, DocumentSummary, Entity,
    FileRecord, MAX_UPLOAD_BYTES, PDF_CONTENT_TYPE, Profile, ProfileUpdate, SessionRecord, Sentiment, TokenGrant,
    TokenStatus, UpdatedProfile, UploadFile, UploadRejection,
};
use crate::util::delay;
use crate::util::identity::{avatar_url, display_name_from_email};
use crate::util::storage::{AUTH_TOKEN_KEY, KeyValueStore};

pub const GOOGLE_USER_NAME: &str = "Google User";
pub const GOOGLE_USER_EMAIL: &str = "user@gmail.com";

const MOCK_SUMMARY: &str = "This is a mock summary generated by the AI after analyzing your document. It highlights \
the main arguments, identifies key entities, and provides a concise overview of the content to help you quickly \
grasp the core information without reading the entire file.";

const MOCK_DOCUMENT_SUMMARY: &str =
    "This is a comprehensive summary of the document content, highlighting key points and insights.";

const MOCK_CHAT_RESPONSE: &str = "This is a RAG-generated answer based on the document content. The AI has analyzed \
the document and provided this response based on the available information.";

/// Per-operation simulated latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    pub auth: Duration,
    pub oauth: Duration,
    pub quick: Duration,
    pub upload: Duration,
    pub analysis: Duration,
    pub listing: Duration,
    pub chat: Duration,
}

impl Latency {
    /// Delays that feel like a real service.
    pub fn simulated() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            oauth: Duration::from_millis(1500),
            quick: Duration::from_millis(500),
            upload: Duration::from_millis(2000),
            analysis: Duration::from_millis(1000),
            listing: Duration::from_millis(800),
            chat: Duration::from_millis(1500),
        }
    }

    /// Answer immediately.
    pub fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            oauth: Duration::ZERO,
            quick: Duration::ZERO,
            upload: Duration::ZERO,
            analysis: Duration::ZERO,
            listing: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }
}

pub struct MockBackend {
    storage: Arc<dyn KeyValueStore>,
    latency: Latency,
}

impl MockBackend {
    pub fn new(storage: Arc<dyn KeyValueStore>, latency: Latency) -> Self {
        Self { storage, latency }
    }

    fn issue_token(&self, prefix: &str) -> Result<String, ApiError> {
        let token = format!("{prefix}_{}", Utc::now().timestamp_millis());
        self.storage.set(AUTH_TOKEN_KEY, &token)?;
        Ok(token)
    }

    fn fabricate_session(&self, name: &str, email: &str, token_prefix: &str) -> Result<SessionRecord, ApiError> {
        Ok(SessionRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            avatar: avatar_url(name),
            token: Some(self.issue_token(token_prefix)?),
            updated_at: None,
        })
    }
}

/// Check an upload against the accepted type and size.
///
/// # Errors
///
/// Returns the first rule the file breaks: presence, then type, then size.
pub fn validate_upload(file: Option<&UploadFile>) -> Result<&UploadFile, UploadRejection> {
    let file = file.ok_or(UploadRejection::MissingFile)?;
    if file.content_type != PDF_CONTENT_TYPE {
        return Err(UploadRejection::NotPdf);
    }
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(file)
}

/// Map a random roll onto a status and its progress percentage.
pub(crate) fn progress_from_roll(status_roll: usize, percent_roll: u8) -> (AnalysisStatus, u8) {
    let status = AnalysisStatus::ALL[status_roll % AnalysisStatus::ALL.len()];
    let progress = if status == AnalysisStatus::Completed { 100 } else { percent_roll % 90 };
    (status, progress)
}

fn fixed_date(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap_or_default()
}

/// The canned file list every mock account owns.
pub(crate) fn sample_files() -> Vec<FileRecord> {
    vec![
        FileRecord {
            id: "1".to_owned(),
            name: "sample-document-1.pdf".to_owned(),
            size: 1_024_000,
            content_type: None,
            upload_date: fixed_date(2024, 1, 15, 10, 30),
            status: AnalysisStatus::Completed,
            analysis_id: "analysis_1".to_owned(),
        },
        FileRecord {
            id: "2".to_owned(),
            name: "sample-document-2.pdf".to_owned(),
            size: 2_048_000,
            content_type: None,
            upload_date: fixed_date(2024, 1, 14, 15, 45),
            status: AnalysisStatus::Processing,
            analysis_id: "analysis_2".to_owned(),
        },
    ]
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[email, password], LOGIN_FIELDS_REQUIRED)?;
        delay::sleep(self.latency.auth).await;
        self.fabricate_session(display_name_from_email(email), email, "mock_token")
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[name, email, password], SIGNUP_FIELDS_REQUIRED)?;
        delay::sleep(self.latency.auth).await;
        self.fabricate_session(name, email, "mock_token")
    }

    async fn login_with_google(&self) -> Result<SessionRecord, ApiError> {
        delay::sleep(self.latency.oauth).await;
        self.fabricate_session(GOOGLE_USER_NAME, GOOGLE_USER_EMAIL, "google_token")
    }

    async fn logout(&self) -> Result<(), ApiError> {
        delay::sleep(self.latency.quick).await;
        self.storage.remove(AUTH_TOKEN_KEY);
        Ok(())
    }

    async fn verify_token(&self) -> Result<TokenStatus, ApiError> {
        if self.storage.get(AUTH_TOKEN_KEY).is_none() {
            return Err(ApiError::MissingToken);
        }
        delay::sleep(self.latency.quick).await;
        Ok(TokenStatus { valid: true })
    }

    async fn refresh_token(&self) -> Result<TokenGrant, ApiError> {
        delay::sleep(self.latency.quick).await;
        let token = self.issue_token("refreshed_token")?;
        Ok(TokenGrant { token })
    }

    async fn upload_file(&self, file: Option<UploadFile>) -> Result<FileRecord, ApiError> {
        let file = validate_upload(file.as_ref())?;
        delay::sleep(self.latency.upload).await;
        let now = Utc::now();
        log::info!("mock upload accepted: {} ({} bytes)", file.name, file.size());
        Ok(FileRecord {
            id: Uuid::new_v4().to_string(),
            name: file.name.clone(),
            size: file.size(),
            content_type: Some(file.content_type.clone()),
            upload_date: now,
            status: AnalysisStatus::Uploaded,
            analysis_id: format!("analysis_{}", now.timestamp_millis()),
        })
    }

    async fn get_analysis_status(&self, file_id: &str) -> Result<AnalysisProgress, ApiError> {
        delay::sleep(self.latency.quick).await;
        let (status, progress) = {
            let mut rng = rand::rng();
            progress_from_roll(rng.random_range(0..AnalysisStatus::ALL.len()), rng.random_range(0..90))
        };
        Ok(AnalysisProgress { file_id: file_id.to_owned(), status, progress })
    }

    async fn get_analysis_results(&self, file_id: &str) -> Result<AnalysisResults, ApiError> {
        delay::sleep(self.latency.analysis).await;
        Ok(AnalysisResults {
            file_id: file_id.to_owned(),
            summary: MOCK_SUMMARY.to_owned(),
            key_points: vec![
                "Key point 1: Important information extracted from the document".to_owned(),
                "Key point 2: Another significant finding".to_owned(),
                "Key point 3: Additional insights from the analysis".to_owned(),
            ],
            entities: vec![
                Entity { name: "Entity 1".to_owned(), kind: "Person".to_owned(), confidence: 0.95 },
                Entity { name: "Entity 2".to_owned(), kind: "Organization".to_owned(), confidence: 0.87 },
                Entity { name: "Entity 3".to_owned(), kind: "Location".to_owned(), confidence: 0.92 },
            ],
            sentiment: Sentiment::Positive,
            confidence: 0.88,
            created_at: Utc::now(),
        })
    }

    async fn get_user_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        delay::sleep(self.latency.listing).await;
        Ok(sample_files())
    }

    async fn delete_file(&self, file_id: &str) -> Result<DeleteReceipt, ApiError> {
        delay::sleep(self.latency.quick).await;
        Ok(DeleteReceipt { file_id: file_id.to_owned(), deleted: true })
    }

    async fn get_summary(&self, document_id: &str) -> Result<DocumentSummary, ApiError> {
        delay::sleep(self.latency.analysis).await;
        Ok(DocumentSummary {
            id: document_id.to_owned(),
            title: "Document Summary".to_owned(),
            content: MOCK_DOCUMENT_SUMMARY.to_owned(),
            word_count: 250,
            created_at: Utc::now(),
        })
    }

    async fn chat_with_document(&self, document_id: &str, message: &str) -> Result<ChatReply, ApiError> {
        delay::sleep(self.latency.chat).await;
        Ok(ChatReply {
            id: Uuid::new_v4().to_string(),
            document_id: document_id.to_owned(),
            user_message: message.to_owned(),
            ai_response: MOCK_CHAT_RESPONSE.to_owned(),
            timestamp: Utc::now(),
            confidence: 0.85,
        })
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        delay::sleep(self.latency.quick).await;
        Ok(Profile {
            id: "1".to_owned(),
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            avatar: avatar_url("John Doe"),
            join_date: fixed_date(2024, 1, 1, 0, 0),
            total_files: 5,
            total_analysis: 12,
        })
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UpdatedProfile, ApiError> {
        delay::sleep(self.latency.analysis).await;
        Ok(UpdatedProfile { fields: update.clone(), updated_at: Utc::now() })
    }
}
