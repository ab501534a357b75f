//! Credential verification seam.

use async_trait::async_trait;

/// Decides whether an email/password pair is acceptable.
///
/// The credential check handler only shapes requests and responses; which
/// pairs are accepted is entirely up to the implementation plugged in here.
///
/// # Implementations
///
/// - [`crate::infrastructure::ExampleCredentialVerifier`] - single hard-coded demo pair
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the pair is accepted.
    async fn verify(&self, email: &str, password: &str) -> bool;
}
