//! Domain layer containing the sign-in entities and the verification seam.
//!
//! Nothing in here knows about HTTP, templates or terminals. Both the
//! credential check handler and the client-side form controller build on
//! the same [`entities::Credentials`] schema so the two sides always agree
//! on what a well-formed sign-in attempt looks like.
//!
//! # Modules
//!
//! - [`entities`] - Credentials, field names and the field error map
//! - [`verifier`] - The `verify(email, password) -> bool` trait

pub mod entities;
pub mod verifier;

pub use verifier::CredentialVerifier;

#[cfg(test)]
pub use verifier::MockCredentialVerifier;
