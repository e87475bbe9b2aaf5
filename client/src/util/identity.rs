//! Display-name and avatar derivation for fabricated sessions.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";
const AVATAR_BACKGROUND: &str = "193A83";
const AVATAR_COLOR: &str = "fff";

/// Local part of `email` (everything before the first `@`).
///
/// An address without `@` is returned whole.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Deterministic avatar URL for a display name.
pub fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_BASE}?name={}&background={AVATAR_BACKGROUND}&color={AVATAR_COLOR}",
        urlencoding::encode(name)
    )
}

/// Initials shown when the avatar image cannot load.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
