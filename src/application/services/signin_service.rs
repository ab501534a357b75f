//! Credential check service behind the mock sign-in endpoint.

use std::sync::Arc;

use crate::domain::CredentialVerifier;
use crate::domain::entities::Credentials;
use crate::error::AppError;
use crate::infrastructure::ExampleCredentialVerifier;
use crate::infrastructure::example_verifier::{EXAMPLE_EMAIL, EXAMPLE_PASSWORD};

/// Display name reported for the demo account.
pub const DEMO_DISPLAY_NAME: &str = "Demo User";

/// Account data echoed back after a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInUser {
    pub email: String,
    pub name: String,
}

/// Checks already schema-valid credentials against a [`CredentialVerifier`].
///
/// Stateless: no attempt counters, no lockout, no sessions. Identical input
/// always gives identical output.
pub struct SignInService {
    verifier: Arc<dyn CredentialVerifier>,
    display_name: String,
    rejection_message: String,
}

impl SignInService {
    /// Creates a service around the given verifier.
    ///
    /// # Arguments
    ///
    /// - `verifier` - decides which pairs are accepted
    /// - `display_name` - name echoed back for accepted users
    /// - `rejection_message` - fixed message for well-formed but rejected pairs
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        display_name: impl Into<String>,
        rejection_message: impl Into<String>,
    ) -> Self {
        Self {
            verifier,
            display_name: display_name.into(),
            rejection_message: rejection_message.into(),
        }
    }

    /// Service wired to the single demo account.
    pub fn example() -> Self {
        Self::new(
            Arc::new(ExampleCredentialVerifier::default()),
            DEMO_DISPLAY_NAME,
            format!(
                "Invalid credentials. Use the example account {EXAMPLE_EMAIL} / {EXAMPLE_PASSWORD} to sign in."
            ),
        )
    }

    /// Verifies the email/password pair.
    ///
    /// `remember` is accepted but has no effect: nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the fixed rejection message if
    /// the verifier refuses the pair.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignedInUser, AppError> {
        if !self
            .verifier
            .verify(&credentials.email, &credentials.password)
            .await
        {
            tracing::warn!(email = %credentials.email, "Rejected sign-in attempt");
            return Err(AppError::unauthorized(self.rejection_message.clone()));
        }

        tracing::info!(
            email = %credentials.email,
            remember = credentials.remember.unwrap_or(false),
            "Sign-in accepted"
        );

        Ok(SignedInUser {
            email: credentials.email.clone(),
            name: self.display_name.clone(),
        })
    }
}
