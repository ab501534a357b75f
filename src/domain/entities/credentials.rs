//! Credentials entity and its validation schema.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use validator::Validate;

/// Email shape accepted by the form: one `@`, no whitespace, and a dot in
/// the domain part. The sign-in page embeds this same pattern.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// A sign-in attempt as typed by the user and sent to the server.
///
/// The `validator` attributes are the single schema shared by the form
/// controller and the credential check handler.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(regex(path = "*EMAIL_REGEX", message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// "Remember me" checkbox. Optional on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember: Option<bool>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember: None,
        }
    }

    pub fn with_remember(mut self, remember: bool) -> Self {
        self.remember = Some(remember);
        self
    }
}

// Passwords must not end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Names of the fields a [`Credentials`] value is made of.
///
/// The declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CredentialField {
    Email,
    Password,
    Remember,
}

impl CredentialField {
    pub const ALL: [CredentialField; 3] = [Self::Email, Self::Password, Self::Remember];

    /// JSON / form name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Remember => "remember",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_pass() {
        let creds = Credentials::new("demo@blogify.test", "password123");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let creds = Credentials::new("not-an-email", "password123");
        let errors = creds.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(!errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_email_needs_dotted_domain() {
        assert!(Credentials::new("demo@localhost", "password123").validate().is_err());
        assert!(Credentials::new("a@b", "password123").validate().is_err());
        assert!(Credentials::new("a@b.c", "password123").validate().is_ok());
        assert!(Credentials::new("a b@c.de", "password123").validate().is_err());
        assert!(Credentials::new("a@@b.de", "password123").validate().is_err());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(Credentials::new("a@b.co", "12345").validate().is_err());
        assert!(Credentials::new("a@b.co", "123456").validate().is_ok());
    }

    #[test]
    fn test_remember_is_optional_on_the_wire() {
        let creds: Credentials =
            serde_json::from_str(r#"{"email":"a@b.co","password":"secret1"}"#).unwrap();
        assert_eq!(creds.remember, None);

        let json = serde_json::to_value(creds.with_remember(true)).unwrap();
        assert_eq!(json["remember"], true);
    }

    #[test]
    fn test_remember_must_be_boolean() {
        let parsed = serde_json::from_str::<Credentials>(
            r#"{"email":"a@b.co","password":"secret1","remember":"yes"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.co", "hunter22"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in CredentialField::ALL {
            assert_eq!(CredentialField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(CredentialField::from_name("username"), None);
    }
}
