//! Infrastructure layer: concrete implementations of domain traits.
//!
//! # Modules
//!
//! - [`example_verifier`] - Verifier accepting a single demo credential pair

pub mod example_verifier;

pub use example_verifier::ExampleCredentialVerifier;
