use super::*;

#[test]
fn signup_input_trims_name_and_email() {
    assert_eq!(
        signup_input(" Jane ", " jane@x.com ", "pw"),
        Ok(SignupInput { name: "Jane".to_owned(), email: "jane@x.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn signup_input_requires_every_field() {
    assert_eq!(signup_input("", "jane@x.com", "pw"), Err(SIGNUP_REQUIRED_MESSAGE));
    assert_eq!(signup_input("Jane", "  ", "pw"), Err(SIGNUP_REQUIRED_MESSAGE));
    assert_eq!(signup_input("Jane", "jane@x.com", ""), Err(SIGNUP_REQUIRED_MESSAGE));
}
