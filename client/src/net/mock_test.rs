use super::*;
use crate::util::storage::MemoryStorage;
use futures::executor::block_on;

fn backend() -> (Arc<MemoryStorage>, MockBackend) {
    let storage = Arc::new(MemoryStorage::new());
    let backend = MockBackend::new(storage.clone(), Latency::none());
    (storage, backend)
}

fn pdf(size: usize) -> UploadFile {
    UploadFile { name: "report.pdf".to_owned(), content_type: PDF_CONTENT_TYPE.to_owned(), bytes: vec![0; size] }
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_derives_name_and_stores_token() {
    let (storage, backend) = backend();
    let record = block_on(backend.login("jane.doe@x.com", "pw")).unwrap();
    assert_eq!(record.name, "jane.doe");
    assert_eq!(record.email, "jane.doe@x.com");
    assert_eq!(record.avatar, avatar_url("jane.doe"));
    let token = record.token.unwrap();
    assert!(token.starts_with("mock_token_"));
    assert_eq!(storage.get(AUTH_TOKEN_KEY), Some(token));
}

#[test]
fn login_rejects_empty_fields_without_touching_storage() {
    let (storage, backend) = backend();
    for (email, password) in [("", "pw"), ("a@b.com", ""), ("", "")] {
        let err = block_on(backend.login(email, password)).unwrap_err();
        assert_eq!(err, ApiError::Validation("Email and password are required".to_owned()));
    }
    assert!(storage.is_empty());
}

#[test]
fn signup_keeps_name_verbatim() {
    let (_, backend) = backend();
    let record = block_on(backend.signup("Jane", "jane@x.com", "pw")).unwrap();
    assert_eq!(record.name, "Jane");
    assert_eq!(record.email, "jane@x.com");
}

#[test]
fn signup_requires_every_field() {
    let (_, backend) = backend();
    let err = block_on(backend.signup("", "jane@x.com", "pw")).unwrap_err();
    assert_eq!(err.to_string(), "All fields are required");
}

#[test]
fn each_session_gets_a_fresh_id() {
    let (_, backend) = backend();
    let a = block_on(backend.login("a@b.com", "x")).unwrap();
    let b = block_on(backend.login("a@b.com", "x")).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn google_login_is_fixed_identity() {
    let (storage, backend) = backend();
    let record = block_on(backend.login_with_google()).unwrap();
    assert_eq!(record.name, GOOGLE_USER_NAME);
    assert_eq!(record.email, GOOGLE_USER_EMAIL);
    assert_eq!(record.avatar, "https://ui-avatars.com/api/?name=Google%20User&background=193A83&color=fff");
    assert!(storage.get(AUTH_TOKEN_KEY).unwrap().starts_with("google_token_"));
}

#[test]
fn logout_clears_token_and_is_idempotent() {
    let (storage, backend) = backend();
    block_on(backend.login("a@b.com", "x")).unwrap();
    block_on(backend.logout()).unwrap();
    assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
    block_on(backend.logout()).unwrap();
}

#[test]
fn verify_token_requires_stored_token() {
    let (_, backend) = backend();
    assert_eq!(block_on(backend.verify_token()), Err(ApiError::MissingToken));
    block_on(backend.login("a@b.com", "x")).unwrap();
    assert_eq!(block_on(backend.verify_token()), Ok(TokenStatus { valid: true }));
}

#[test]
fn refresh_token_replaces_stored_token() {
    let (storage, backend) = backend();
    let grant = block_on(backend.refresh_token()).unwrap();
    assert!(grant.token.starts_with("refreshed_token_"));
    assert_eq!(storage.get(AUTH_TOKEN_KEY), Some(grant.token));
}

// =============================================================
// Upload
// =============================================================

#[test]
fn upload_without_file_fails() {
    let (_, backend) = backend();
    let err = block_on(backend.upload_file(None)).unwrap_err();
    assert_eq!(err, ApiError::Upload(UploadRejection::MissingFile));
    assert_eq!(err.to_string(), "No file provided");
}

#[test]
fn upload_rejects_non_pdf() {
    let (_, backend) = backend();
    let file = UploadFile { name: "notes.docx".to_owned(), content_type: "application/msword".to_owned(), bytes: vec![1] };
    let err = block_on(backend.upload_file(Some(file))).unwrap_err();
    assert_eq!(err, ApiError::Upload(UploadRejection::NotPdf));
}

#[test]
fn upload_accepts_exactly_ten_mebibytes() {
    let (_, backend) = backend();
    let size = usize::try_from(MAX_UPLOAD_BYTES).unwrap();
    let record = block_on(backend.upload_file(Some(pdf(size)))).unwrap();
    assert_eq!(record.size, MAX_UPLOAD_BYTES);
    assert_eq!(record.status, AnalysisStatus::Uploaded);
    assert_eq!(record.content_type.as_deref(), Some(PDF_CONTENT_TYPE));
    assert!(record.analysis_id.starts_with("analysis_"));
}

#[test]
fn upload_rejects_one_byte_over_limit() {
    let (_, backend) = backend();
    let size = usize::try_from(MAX_UPLOAD_BYTES).unwrap() + 1;
    let err = block_on(backend.upload_file(Some(pdf(size)))).unwrap_err();
    assert_eq!(err, ApiError::Upload(UploadRejection::TooLarge));
}

#[test]
fn upload_type_check_runs_before_size_check() {
    let oversized_text = UploadFile {
        name: "big.txt".to_owned(),
        content_type: "text/plain".to_owned(),
        bytes: vec![0; usize::try_from(MAX_UPLOAD_BYTES).unwrap() + 1],
    };
    assert_eq!(validate_upload(Some(&oversized_text)).unwrap_err(), UploadRejection::NotPdf);
}

// =============================================================
// Analysis + documents
// =============================================================

#[test]
fn progress_is_full_only_when_completed() {
    for status_roll in 0..10 {
        for percent_roll in [0u8, 45, 89, 200, 255] {
            let (status, progress) = progress_from_roll(status_roll, percent_roll);
            if status == AnalysisStatus::Completed {
                assert_eq!(progress, 100);
            } else {
                assert!(progress < 90, "{status:?} {progress}");
            }
        }
    }
}

#[test]
fn analysis_status_echoes_file_id() {
    let (_, backend) = backend();
    let progress = block_on(backend.get_analysis_status("42")).unwrap();
    assert_eq!(progress.file_id, "42");
    assert!(progress.progress == 100 || progress.progress < 90);
}

#[test]
fn analysis_results_are_canned() {
    let (_, backend) = backend();
    let results = block_on(backend.get_analysis_results("7")).unwrap();
    assert_eq!(results.file_id, "7");
    assert_eq!(results.key_points.len(), 3);
    assert_eq!(results.entities.len(), 3);
    assert_eq!(results.sentiment, Sentiment::Positive);
}

#[test]
fn user_files_are_the_two_samples() {
    let (_, backend) = backend();
    let files = block_on(backend.get_user_files()).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "sample-document-1.pdf");
    assert_eq!(files[1].status, AnalysisStatus::Processing);
}

#[test]
fn delete_file_acknowledges() {
    let (_, backend) = backend();
    let receipt = block_on(backend.delete_file("2")).unwrap();
    assert_eq!(receipt, DeleteReceipt { file_id: "2".to_owned(), deleted: true });
}

#[test]
fn chat_echoes_question() {
    let (_, backend) = backend();
    let reply = block_on(backend.chat_with_document("1", "What is this about?")).unwrap();
    assert_eq!(reply.document_id, "1");
    assert_eq!(reply.user_message, "What is this about?");
    assert!(!reply.ai_response.is_empty());
}

#[test]
fn summary_uses_requested_id() {
    let (_, backend) = backend();
    let summary = block_on(backend.get_summary("doc-9")).unwrap();
    assert_eq!(summary.id, "doc-9");
    assert_eq!(summary.word_count, 250);
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_is_fixed() {
    let (_, backend) = backend();
    let profile = block_on(backend.get_profile()).unwrap();
    assert_eq!(profile.name, "John Doe");
    assert_eq!(profile.total_files, 5);
}

#[test]
fn update_profile_echoes_fields() {
    let (_, backend) = backend();
    let update = ProfileUpdate { name: Some("New".to_owned()), ..ProfileUpdate::default() };
    let echoed = block_on(backend.update_profile(&update)).unwrap();
    assert_eq!(echoed.fields, update);
}
