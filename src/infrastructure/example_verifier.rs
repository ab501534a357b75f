//! Hard-coded demo credential verifier.

use async_trait::async_trait;

use crate::domain::CredentialVerifier;

/// Email of the only account the demo endpoint accepts.
pub const EXAMPLE_EMAIL: &str = "demo@blogify.test";

/// Password of the only account the demo endpoint accepts.
pub const EXAMPLE_PASSWORD: &str = "password123";

/// Accepts exactly one plaintext email/password pair.
///
/// Placeholder until a real verification strategy exists. Comparison is
/// exact: no case folding, no trimming.
#[derive(Debug, Clone)]
pub struct ExampleCredentialVerifier {
    email: String,
    password: String,
}

impl ExampleCredentialVerifier {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for ExampleCredentialVerifier {
    fn default() -> Self {
        Self::new(EXAMPLE_EMAIL, EXAMPLE_PASSWORD)
    }
}

#[async_trait]
impl CredentialVerifier for ExampleCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}
