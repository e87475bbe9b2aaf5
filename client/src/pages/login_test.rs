use super::*;

#[test]
fn login_input_trims_email_only() {
    assert_eq!(
        login_input("  user@example.com  ", " secret "),
        Ok(("user@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(login_input("", "pw"), Err(LOGIN_REQUIRED_MESSAGE));
    assert_eq!(login_input("   ", "pw"), Err(LOGIN_REQUIRED_MESSAGE));
    assert_eq!(login_input("a@b.com", ""), Err(LOGIN_REQUIRED_MESSAGE));
}
