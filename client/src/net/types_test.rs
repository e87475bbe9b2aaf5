use super::*;

// =============================================================
// SessionRecord
// =============================================================

#[test]
fn session_record_omits_absent_token_and_update_stamp() {
    let record = SessionRecord {
        id: "u1".to_owned(),
        name: "a".to_owned(),
        email: "a@b.com".to_owned(),
        avatar: "https://ui-avatars.com/api/?name=a&background=193A83&color=fff".to_owned(),
        token: None,
        updated_at: None,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "u1",
            "name": "a",
            "email": "a@b.com",
            "avatar": "https://ui-avatars.com/api/?name=a&background=193A83&color=fff",
        })
    );
}

#[test]
fn session_record_reads_legacy_shape_without_token() {
    let raw = r#"{"id":"1700000000000","name":"jane","email":"jane@x.com","avatar":"https://example.test/a.png"}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.name, "jane");
    assert!(record.token.is_none());
    assert!(record.updated_at.is_none());
}

// =============================================================
// Files
// =============================================================

#[test]
fn analysis_status_serializes_lowercase() {
    assert_eq!(serde_json::to_value(AnalysisStatus::Analyzing).unwrap(), "analyzing");
    let parsed: AnalysisStatus = serde_json::from_str("\"failed\"").unwrap();
    assert_eq!(parsed, AnalysisStatus::Failed);
}

#[test]
fn analysis_status_terminal_states() {
    assert!(AnalysisStatus::Completed.is_terminal());
    assert!(AnalysisStatus::Failed.is_terminal());
    assert!(!AnalysisStatus::Processing.is_terminal());
}

#[test]
fn file_record_uses_wire_field_names() {
    let raw = r#"{
        "id": "1",
        "name": "sample-document-1.pdf",
        "size": 1024000,
        "uploadDate": "2024-01-15T10:30:00Z",
        "status": "completed",
        "analysisId": "analysis_1"
    }"#;
    let file: FileRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(file.analysis_id, "analysis_1");
    assert_eq!(file.status, AnalysisStatus::Completed);
    assert!(file.content_type.is_none());
}

#[test]
fn entity_kind_maps_to_type_field() {
    let entity = Entity { name: "Entity 1".to_owned(), kind: "Person".to_owned(), confidence: 0.95 };
    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(json["type"], "Person");
}

#[test]
fn upload_file_size_counts_bytes() {
    let file = UploadFile { name: "a.pdf".to_owned(), content_type: PDF_CONTENT_TYPE.to_owned(), bytes: vec![0; 42] };
    assert_eq!(file.size(), 42);
}

// =============================================================
// Profile
// =============================================================

#[test]
fn updated_profile_flattens_echoed_fields() {
    let updated = UpdatedProfile {
        fields: ProfileUpdate { name: Some("Jane".to_owned()), email: None, avatar: None },
        updated_at: "2024-02-01T00:00:00Z".parse().unwrap(),
    };
    let json = serde_json::to_value(&updated).unwrap();
    assert_eq!(json["name"], "Jane");
    assert_eq!(json["updatedAt"], "2024-02-01T00:00:00Z");
    assert!(json.get("email").is_none());
}

#[test]
fn profile_update_empty_when_no_fields() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(!ProfileUpdate { avatar: Some("x".to_owned()), ..ProfileUpdate::default() }.is_empty());
}

// =============================================================
// Errors + envelope
// =============================================================

#[test]
fn api_error_messages_match_user_copy() {
    assert_eq!(ApiError::Timeout.to_string(), "Request timeout. Please try again.");
    assert_eq!(ApiError::Http(503).to_string(), "HTTP error! status: 503");
    assert_eq!(ApiError::MissingToken.to_string(), "No token found");
    assert_eq!(ApiError::from(UploadRejection::NotPdf).to_string(), "Only PDF files are allowed");
    assert_eq!(ApiError::from(UploadRejection::TooLarge).to_string(), "File size must be less than 10MB");
}

#[test]
fn envelope_success_carries_data() {
    let envelope = ApiResponse::from_result(Ok::<_, ApiError>(TokenStatus { valid: true }));
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "data": { "valid": true } }));
}

#[test]
fn envelope_failure_carries_message() {
    let envelope = ApiResponse::<TokenStatus>::from_result(Err(ApiError::MissingToken));
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "error": "No token found" }));
}

#[test]
fn envelope_failure_converts_to_remote_error() {
    let envelope: ApiResponse<TokenStatus> =
        serde_json::from_str(r#"{"success":false,"error":"Email and password are required"}"#).unwrap();
    assert_eq!(
        envelope.into_result(),
        Err(ApiError::Remote("Email and password are required".to_owned()))
    );
}

#[test]
fn envelope_success_without_data_is_an_error() {
    let envelope: ApiResponse<TokenStatus> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(matches!(envelope.into_result(), Err(ApiError::Remote(_))));
}

#[test]
fn empty_payload_round_trips_as_object() {
    let envelope: ApiResponse<Empty> = serde_json::from_str(r#"{"success":true,"data":{}}"#).unwrap();
    assert_eq!(envelope.into_result(), Ok(Empty {}));
}
