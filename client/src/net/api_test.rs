use futures::executor::block_on;

use super::*;
use crate::util::storage::{AUTH_TOKEN_KEY, MemoryStorage};

#[test]
fn require_fields_passes_when_all_present() {
    assert_eq!(require_fields(&["a", "b"], "missing"), Ok(()));
    assert_eq!(require_fields(&[], "missing"), Ok(()));
}

#[test]
fn require_fields_fails_on_any_empty() {
    assert_eq!(require_fields(&["a", ""], "missing"), Err(ApiError::Validation("missing".to_owned())));
    assert_eq!(
        require_fields(&["", "", ""], SIGNUP_FIELDS_REQUIRED).map_err(|e| e.to_string()),
        Err(SIGNUP_FIELDS_REQUIRED.to_owned())
    );
}

#[test]
fn mock_config_selects_mock_backend() {
    let config = ClientConfig { mock_latency: false, ..ClientConfig::default() };
    let storage = Arc::new(MemoryStorage::new());
    let api = ApiClient::from_config(&config, storage.clone());

    let record = block_on(api.login("a@b.com", "x")).unwrap();
    assert_eq!(record.name, "a");
    assert!(storage.get(AUTH_TOKEN_KEY).is_some_and(|t| t.starts_with("mock_token_")));
}

#[test]
fn http_config_is_unavailable_off_browser() {
    let config = ClientConfig { backend: BackendMode::Http, ..ClientConfig::default() };
    let api = ApiClient::from_config(&config, Arc::new(MemoryStorage::new()));
    assert_eq!(block_on(api.get_user_files()), Err(ApiError::Unavailable));
}

#[test]
fn clones_share_one_backend() {
    let api = ApiClient::new(Arc::new(MockBackend::new(Arc::new(MemoryStorage::new()), Latency::none())));
    let other = api.clone();
    assert!(Arc::ptr_eq(&api.backend(), &other.backend()));
}
