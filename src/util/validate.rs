//! Client-side registration field checks.
//!
//! These gate the register call only; the server re-validates everything.
//! Login uses a single length precondition enforced by the session manager
//! instead.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Usernames are runs of ASCII alphanumerics separated by single `-` or `_`.
pub fn valid_username(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    // Tracks "at start or just after a separator".
    let mut boundary = true;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            boundary = false;
        } else if (c == '-' || c == '_') && !boundary {
            boundary = true;
        } else {
            return false;
        }
    }
    !boundary
}

/// Structural email check: non-empty local part, a dotted host, and an
/// alphabetic top-level domain of at least two characters.
pub fn valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Passwords must be longer than five characters.
pub fn valid_password(value: &str) -> bool {
    value.chars().count() > 5
}
