//! Core sign-in data structures.

pub mod credentials;
pub mod field_errors;

pub use credentials::{CredentialField, Credentials, EMAIL_PATTERN};
pub use field_errors::FieldErrors;
