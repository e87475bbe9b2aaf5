use super::*;

#[test]
fn validate_contact_trims_fields() {
    assert_eq!(
        validate_contact("  Ada ", " ada@example.com ", " hello \n"),
        Ok(ContactMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "hello".to_owned(),
        })
    );
}

#[test]
fn validate_contact_requires_every_field() {
    assert_eq!(validate_contact("", "a@b.com", "hi"), Err(CONTACT_FIELDS_REQUIRED));
    assert_eq!(validate_contact("Ada", "   ", "hi"), Err(CONTACT_FIELDS_REQUIRED));
    assert_eq!(validate_contact("Ada", "a@b.com", "  "), Err(CONTACT_FIELDS_REQUIRED));
}

#[test]
fn validate_contact_rejects_malformed_email() {
    for email in ["ada", "@b.com", "ada@", "a@b@c"] {
        assert_eq!(validate_contact("Ada", email, "hi"), Err(CONTACT_EMAIL_INVALID), "{email}");
    }
}
