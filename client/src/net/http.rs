//! `Backend` over HTTP, for when a real document-analysis service exists.
//!
//! Client-side (hydrate): `gloo-net` requests raced against a timeout; the
//! request is aborted through an `AbortController` when the timer wins.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`].
//!
//! Responses are `{success, data | error}` envelopes. Requests carry
//! `Authorization: Bearer <token>` whenever a token is stored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::api::{Backend, LOGIN_FIELDS_REQUIRED, SIGNUP_FIELDS_REQUIRED, require_fields};
use super::mock::validate_upload;
use super::types::{
    AnalysisProgress, AnalysisResults, ApiError, ChatReply, DeleteReceipt, DocumentSummary, Empty, FileRecord,
    Profile, ProfileUpdate, SessionRecord, TokenGrant, TokenStatus, UpdatedProfile, UploadFile, UploadRejection,
};
use crate::util::storage::{AUTH_TOKEN_KEY, KeyValueStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One REST endpoint of the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    Login,
    Signup,
    GoogleLogin,
    Logout,
    VerifyToken,
    RefreshToken,
    Upload,
    AnalysisStatus(&'a str),
    AnalysisResults(&'a str),
    Files,
    DeleteFile(&'a str),
    Summary(&'a str),
    Chat(&'a str),
    Profile,
    UpdateProfile,
}

impl Route<'_> {
    pub(crate) fn method(self) -> Method {
        match self {
            Self::VerifyToken
            | Self::AnalysisStatus(_)
            | Self::AnalysisResults(_)
            | Self::Files
            | Self::Summary(_)
            | Self::Profile => Method::Get,
            Self::UpdateProfile => Method::Put,
            Self::DeleteFile(_) => Method::Delete,
            Self::Login
            | Self::Signup
            | Self::GoogleLogin
            | Self::Logout
            | Self::RefreshToken
            | Self::Upload
            | Self::Chat(_) => Method::Post,
        }
    }

    pub(crate) fn path(self) -> String {
        match self {
            Self::Login => "/auth/login".to_owned(),
            Self::Signup => "/auth/signup".to_owned(),
            Self::GoogleLogin => "/auth/google".to_owned(),
            Self::Logout => "/auth/logout".to_owned(),
            Self::VerifyToken => "/auth/verify".to_owned(),
            Self::RefreshToken => "/auth/refresh".to_owned(),
            Self::Upload | Self::Files => "/files".to_owned(),
            Self::AnalysisStatus(id) => format!("/files/{id}/status"),
            Self::AnalysisResults(id) => format!("/files/{id}/results"),
            Self::DeleteFile(id) => format!("/files/{id}"),
            Self::Summary(id) => format!("/documents/{id}/summary"),
            Self::Chat(id) => format!("/documents/{id}/chat"),
            Self::Profile | Self::UpdateProfile => "/users/profile".to_owned(),
        }
    }
}

/// Request payload shapes.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum Body {
    None,
    Json(serde_json::Value),
    File(UploadFile),
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub struct HttpBackend {
    base_url: String,
    timeout: Duration,
    storage: Arc<dyn KeyValueStore>,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration, storage: Arc<dyn KeyValueStore>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), timeout, storage }
    }

    pub(crate) fn url(&self, route: Route<'_>) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    fn remember_token(&self, token: Option<&str>) {
        if let Some(token) = token {
            if let Err(e) = self.storage.set(AUTH_TOKEN_KEY, token) {
                log::warn!("could not persist auth token: {e}");
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, route: Route<'_>, body: Body) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::Request;

            let url = self.url(route);
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(web_sys::AbortController::signal);

            let mut builder = match route.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .abort_signal(signal.as_ref());
            if let Some(token) = self.storage.get(AUTH_TOKEN_KEY) {
                builder = builder.header("Authorization", &bearer(&token));
            }

            let request = match body {
                Body::None => builder.build(),
                Body::Json(value) => builder.json(&value),
                Body::File(file) => builder
                    .header("Content-Type", &file.content_type)
                    .header("X-File-Name", &file.name)
                    .body(js_sys::Uint8Array::from(file.bytes.as_slice())),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = match select(Box::pin(request.send()), Box::pin(gloo_timers::future::sleep(self.timeout))).await {
                Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
                Either::Right(((), _)) => {
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                    log::warn!("request to {url} timed out after {:?}", self.timeout);
                    return Err(ApiError::Timeout);
                }
            };

            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }
            let envelope: super::types::ApiResponse<T> =
                response.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
            envelope.into_result()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (route, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[email, password], LOGIN_FIELDS_REQUIRED)?;
        let payload = serde_json::json!({ "email": email, "password": password });
        let record: SessionRecord = self.send(Route::Login, Body::Json(payload)).await?;
        self.remember_token(record.token.as_deref());
        Ok(record)
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[name, email, password], SIGNUP_FIELDS_REQUIRED)?;
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let record: SessionRecord = self.send(Route::Signup, Body::Json(payload)).await?;
        self.remember_token(record.token.as_deref());
        Ok(record)
    }

    async fn login_with_google(&self) -> Result<SessionRecord, ApiError> {
        let record: SessionRecord = self.send(Route::GoogleLogin, Body::None).await?;
        self.remember_token(record.token.as_deref());
        Ok(record)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = self.send::<Empty>(Route::Logout, Body::None).await;
        // The local credential goes regardless of what the server said.
        self.storage.remove(AUTH_TOKEN_KEY);
        result.map(|_| ())
    }

    async fn verify_token(&self) -> Result<TokenStatus, ApiError> {
        if self.storage.get(AUTH_TOKEN_KEY).is_none() {
            return Err(ApiError::MissingToken);
        }
        self.send(Route::VerifyToken, Body::None).await
    }

    async fn refresh_token(&self) -> Result<TokenGrant, ApiError> {
        let grant: TokenGrant = self.send(Route::RefreshToken, Body::None).await?;
        self.remember_token(Some(&grant.token));
        Ok(grant)
    }

    async fn upload_file(&self, file: Option<UploadFile>) -> Result<FileRecord, ApiError> {
        let file = file.ok_or(UploadRejection::MissingFile)?;
        validate_upload(Some(&file))?;
        self.send(Route::Upload, Body::File(file)).await
    }

    async fn get_analysis_status(&self, file_id: &str) -> Result<AnalysisProgress, ApiError> {
        self.send(Route::AnalysisStatus(file_id), Body::None).await
    }

    async fn get_analysis_results(&self, file_id: &str) -> Result<AnalysisResults, ApiError> {
        self.send(Route::AnalysisResults(file_id), Body::None).await
    }

    async fn get_user_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.send(Route::Files, Body::None).await
    }

    async fn delete_file(&self, file_id: &str) -> Result<DeleteReceipt, ApiError> {
        self.send(Route::DeleteFile(file_id), Body::None).await
    }

    async fn get_summary(&self, document_id: &str) -> Result<DocumentSummary, ApiError> {
        self.send(Route::Summary(document_id), Body::None).await
    }

    async fn chat_with_document(&self, document_id: &str, message: &str) -> Result<ChatReply, ApiError> {
        let payload = serde_json::json!({ "message": message });
        self.send(Route::Chat(document_id), Body::Json(payload)).await
    }

    async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.send(Route::Profile, Body::None).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UpdatedProfile, ApiError> {
        let payload = serde_json::to_value(update).map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(Route::UpdateProfile, Body::Json(payload)).await
    }
}
