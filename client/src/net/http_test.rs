use super::*;
use crate::util::storage::MemoryStorage;
use futures::executor::block_on;

fn backend() -> (Arc<MemoryStorage>, HttpBackend) {
    let storage = Arc::new(MemoryStorage::new());
    let backend = HttpBackend::new("http://localhost:3001/api/", Duration::from_secs(10), storage.clone());
    (storage, backend)
}

// =============================================================
// Endpoint table
// =============================================================

#[test]
fn auth_routes() {
    assert_eq!((Route::Login.method(), Route::Login.path()), (Method::Post, "/auth/login".to_owned()));
    assert_eq!(Route::Signup.path(), "/auth/signup");
    assert_eq!(Route::GoogleLogin.path(), "/auth/google");
    assert_eq!(Route::Logout.method(), Method::Post);
    assert_eq!((Route::VerifyToken.method(), Route::VerifyToken.path()), (Method::Get, "/auth/verify".to_owned()));
    assert_eq!(Route::RefreshToken.path(), "/auth/refresh");
}

#[test]
fn file_routes_embed_id() {
    assert_eq!(Route::Upload.method(), Method::Post);
    assert_eq!(Route::Files.method(), Method::Get);
    assert_eq!(Route::Upload.path(), Route::Files.path());
    assert_eq!(Route::AnalysisStatus("f1").path(), "/files/f1/status");
    assert_eq!(Route::AnalysisResults("f1").path(), "/files/f1/results");
    assert_eq!((Route::DeleteFile("f1").method(), Route::DeleteFile("f1").path()), (Method::Delete, "/files/f1".to_owned()));
}

#[test]
fn document_and_profile_routes() {
    assert_eq!(Route::Summary("d1").path(), "/documents/d1/summary");
    assert_eq!((Route::Chat("d1").method(), Route::Chat("d1").path()), (Method::Post, "/documents/d1/chat".to_owned()));
    assert_eq!(Route::Profile.method(), Method::Get);
    assert_eq!(Route::UpdateProfile.method(), Method::Put);
    assert_eq!(Route::UpdateProfile.path(), "/users/profile");
}

#[test]
fn url_joins_base_without_double_slash() {
    let (_, backend) = backend();
    assert_eq!(backend.url(Route::Login), "http://localhost:3001/api/auth/login");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("mock_token_1"), "Bearer mock_token_1");
}

// =============================================================
// Local checks run before any request
// =============================================================

#[test]
fn login_validation_happens_locally() {
    let (_, backend) = backend();
    let err = block_on(backend.login("", "pw")).unwrap_err();
    assert_eq!(err, ApiError::Validation(LOGIN_FIELDS_REQUIRED.to_owned()));
}

#[test]
fn signup_validation_happens_locally() {
    let (_, backend) = backend();
    let err = block_on(backend.signup("Jane", "", "pw")).unwrap_err();
    assert_eq!(err.to_string(), SIGNUP_FIELDS_REQUIRED);
}

#[test]
fn verify_token_without_stored_token_fails_fast() {
    let (_, backend) = backend();
    assert_eq!(block_on(backend.verify_token()), Err(ApiError::MissingToken));
}

#[test]
fn upload_rules_apply_before_sending() {
    let (_, backend) = backend();
    assert_eq!(
        block_on(backend.upload_file(None)),
        Err(ApiError::Upload(UploadRejection::MissingFile))
    );
    let text = UploadFile { name: "a.txt".to_owned(), content_type: "text/plain".to_owned(), bytes: vec![1] };
    assert_eq!(block_on(backend.upload_file(Some(text))), Err(ApiError::Upload(UploadRejection::NotPdf)));
}

// =============================================================
// Off-browser behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_off_browser() {
    let (_, backend) = backend();
    assert_eq!(block_on(backend.get_user_files()), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.login("a@b.com", "x")), Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_drops_local_token_even_when_request_fails() {
    let (storage, backend) = backend();
    storage.set(AUTH_TOKEN_KEY, "mock_token_1").unwrap();
    assert_eq!(block_on(backend.logout()), Err(ApiError::Unavailable));
    assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
}
