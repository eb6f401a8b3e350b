//! Credential validation for the login gate.
//!
//! Login is a navigational gate, not real authentication: credentials are
//! validated structurally, then compared exactly against the user list from
//! the snapshot. No session or token is created on success.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::store::models::User;

/// Minimum password length accepted by the form.
pub const PASSWORD_MIN_LEN: usize = 4;
/// Maximum password length accepted by the form.
pub const PASSWORD_MAX_LEN: usize = 20;

/// Standard email syntax, with no TLD allow-list: local part, `@`, and a
/// domain containing at least one dot. No surrounding whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// A structural rule violation, with its user-facing message as `Display`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Email must be a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {PASSWORD_MIN_LEN} characters")]
    PasswordTooShort,
    #[error("Password must be at most {PASSWORD_MAX_LEN} characters")]
    PasswordTooLong,
}

/// A failed login attempt.
///
/// `InvalidCredentials` deliberately does not distinguish an unknown email
/// from a wrong password.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Validate a credential pair structurally before any data lookup.
///
/// Rules are checked in field order (email before password) and the first
/// violated rule wins.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > PASSWORD_MAX_LEN {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Exact-match scan of the user list. Both fields compare case-sensitively.
#[must_use]
pub fn find_user<'a>(users: &'a [User], email: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|user| user.email == email && user.password == password)
}

/// Validate and then look up the credential pair.
///
/// # Errors
///
/// Returns the first violated structural rule, or the generic
/// `InvalidCredentials` when no user matches.
pub fn login<'a>(users: &'a [User], email: &str, password: &str) -> Result<&'a User, LoginError> {
    validate_credentials(email, password)?;
    find_user(users, email, password).ok_or(LoginError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User {
                id: 1,
                email: "a@b.com".to_string(),
                password: "pass1".to_string(),
            },
            User {
                id: 2,
                email: "c@d.org".to_string(),
                password: "secret99".to_string(),
            },
        ]
    }

    #[test]
    fn test_valid_credentials_pass_structure() {
        assert!(validate_credentials("a@b.com", "pass1").is_ok());
    }

    #[test]
    fn test_email_checked_before_password() {
        // Both fields invalid: the email rule wins.
        assert_eq!(
            validate_credentials("not-an-email", "x"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_credentials("", ""),
            Err(ValidationError::EmailRequired)
        );
    }

    #[test]
    fn test_email_syntax() {
        assert_eq!(
            validate_credentials("missing-at.com", "pass1"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_credentials("no-domain@", "pass1"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_credentials("no-dot@host", "pass1"),
            Err(ValidationError::EmailInvalid)
        );
        // No TLD allow-list: any suffix is fine.
        assert!(validate_credentials("a@b.xyz", "pass1").is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        assert_eq!(
            validate_credentials("a@b.com", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        // Exactly 4 characters passes structure.
        assert!(validate_credentials("a@b.com", "abcd").is_ok());
        // Exactly 20 characters passes structure.
        assert!(validate_credentials("a@b.com", &"x".repeat(20)).is_ok());
        assert_eq!(
            validate_credentials("a@b.com", &"x".repeat(21)),
            Err(ValidationError::PasswordTooLong)
        );
    }

    #[test]
    fn test_short_password_message_names_minimum() {
        let message = ValidationError::PasswordTooShort.to_string();
        assert_eq!(message, "Password must be at least 4 characters");
    }

    #[test]
    fn test_find_user_exact_match() {
        let users = sample_users();
        assert_eq!(find_user(&users, "a@b.com", "pass1").map(|u| u.id), Some(1));
        assert!(find_user(&users, "a@b.com", "wrong").is_none());
        assert!(find_user(&users, "unknown@b.com", "pass1").is_none());
    }

    #[test]
    fn test_find_user_case_sensitive() {
        let users = sample_users();
        assert!(find_user(&users, "A@B.com", "pass1").is_none());
        assert!(find_user(&users, "a@b.com", "PASS1").is_none());
    }

    #[test]
    fn test_login_empty_user_list_is_generic_failure() {
        let users: Vec<User> = Vec::new();
        assert_eq!(
            login(&users, "anyone@example.com", "validpw"),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_generic_failure_message() {
        let users = sample_users();
        let err = login(&users, "a@b.com", "wrong").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        // Same message whether the email exists or not.
        let err = login(&users, "ghost@b.com", "wrong").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_login_success() {
        let users = sample_users();
        let user = login(&users, "c@d.org", "secret99").unwrap();
        assert_eq!(user.id, 2);
    }
}
