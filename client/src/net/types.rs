//! Wire DTOs shared by the mock and HTTP backends.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the JSON kept in `localStorage` and
//! the envelopes exchanged with an HTTP backend share one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::storage::StorageError;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// The only accepted upload content type.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// =============================================================================
// SESSION
// =============================================================================

/// The authenticated viewer, mirrored in durable storage under `user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque identifier assigned when the session was created.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Avatar image URL derived from `name`.
    pub avatar: String,
    /// Bearer credential, when the backend issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Set by the most recent profile update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatus {
    pub valid: bool,
}

// =============================================================================
// FILES + ANALYSIS
// =============================================================================

/// A file picked by the viewer for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Lifecycle of a document's analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Uploaded,
    Processing,
    Analyzing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub const ALL: [Self; 5] = [Self::Uploaded, Self::Processing, Self::Analyzing, Self::Completed, Self::Failed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploaded => "Uploaded",
            Self::Processing => "Processing",
            Self::Analyzing => "Analyzing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }

    /// Whether the analysis has finished; checking again cannot change it.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// An uploaded document as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub status: AnalysisStatus,
    pub analysis_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisProgress {
    pub file_id: String,
    pub status: AnalysisStatus,
    /// Percent complete; 100 once completed.
    pub progress: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    pub file_id: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub entities: Vec<Entity>,
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub file_id: String,
    pub deleted: bool,
}

// =============================================================================
// DOCUMENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub word_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub id: String,
    pub document_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
    pub confidence: f32,
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub join_date: DateTime<Utc>,
    pub total_files: u32,
    pub total_analysis: u32,
}

/// Fields the viewer may change; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }
}

/// Echo of an applied [`ProfileUpdate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfile {
    #[serde(flatten)]
    pub fields: ProfileUpdate,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// ERRORS + ENVELOPE
// =============================================================================

/// Why an upload was refused before any work happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("No file provided")]
    MissingFile,
    #[error("Only PDF files are allowed")]
    NotPdf,
    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// Failure of a backend or session operation. `Display` is the message shown
/// to the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Upload(#[from] UploadRejection),
    #[error("No token found")]
    MissingToken,
    #[error("Not signed in")]
    NotSignedIn,
    #[error("Request timeout. Please try again.")]
    Timeout,
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Remote(String),
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
    #[error("not available on server")]
    Unavailable,
}

/// Discriminated `{success, data | error}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self { success: true, data: Some(data), error: None },
            Err(e) => Self { success: false, data: None, error: Some(e.to_string()) },
        }
    }

    /// Convert the envelope back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] for `success: false`, or when a successful
    /// envelope carries no `data`.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Remote(
                self.error.unwrap_or_else(|| "An error occurred".to_owned()),
            ));
        }
        self.data.ok_or_else(|| ApiError::Remote("response missing data".to_owned()))
    }
}

/// Success payload for operations that return nothing (`{}` on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
