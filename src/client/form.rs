//! Sign-in form controller.
//!
//! Per submission the form moves through
//!
//! ```text
//! Idle -> Validating -> Idle (field errors)
//!                    -> Submitting -> NavigatingAway
//!                                  -> Idle (server error)
//! ```
//!
//! `Validating` is synchronous and never observable from outside, so it has
//! no [`FormPhase`] of its own. `Submitting` is the only phase in which
//! submitting is refused.

use validator::Validate;

use super::navigator::{Navigator, SUCCESS_DESTINATION};
use super::transport::{SignInReply, SignInTransport, TransportError};
use crate::api::dto::signin::SignInUser;
use crate::domain::entities::{CredentialField, Credentials, FieldErrors};

/// Banner text when the server refuses without saying why.
pub const SIGNIN_FAILED_MESSAGE: &str = "Sign in failed";

/// Banner text when the request failed and the error has no text.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Something went wrong";

/// A change to one field, tagged with the field's own value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Email(String),
    Password(String),
    Remember(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> CredentialField {
        match self {
            FieldUpdate::Email(_) => CredentialField::Email,
            FieldUpdate::Password(_) => CredentialField::Password,
            FieldUpdate::Remember(_) => CredentialField::Remember,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    NavigatingAway,
}

/// Result of trying to start a submission.
#[derive(Debug)]
pub enum SubmitStart {
    /// Validation passed; send these credentials and report back with
    /// [`SignInForm::finish_submit`].
    Send(Credentials),

    /// Validation failed; field errors are set.
    Invalid,

    /// A request is already in flight.
    Busy,
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Client-side validation failed; nothing was sent.
    ValidationRejected,

    /// The server accepted the credentials.
    Success {
        destination: String,
        user: Option<SignInUser>,
    },

    /// The server answered with a non-success status.
    CredentialRejected { message: String },

    /// No usable response came back.
    TransportFailure { message: String },

    /// Submit was disabled; nothing happened.
    Ignored,
}

/// Form state for a single visit of the sign-in page.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    email: String,
    password: String,
    remember: bool,
    field_errors: FieldErrors,
    server_error: Option<String>,
    phase: FormPhase,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field, clearing that field's error and any banner error.
    /// Errors on other fields are left alone.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.field_errors.clear(update.field());
        self.server_error = None;

        match update {
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Password(password) => self.password = password,
            FieldUpdate::Remember(remember) => self.remember = remember,
        }
    }

    /// Runs the credentials schema over the current values.
    ///
    /// Replaces the whole field error map: with the first violation per
    /// field on failure, with nothing on success.
    pub fn validate(&mut self) -> bool {
        match self.credentials().validate() {
            Ok(()) => {
                self.field_errors.clear_all();
                true
            }
            Err(errors) => {
                self.field_errors = FieldErrors::from_validation(&errors);
                tracing::debug!(fields = self.field_errors.len(), "sign-in form is invalid");
                false
            }
        }
    }

    /// First half of a submission: validate and, if valid, enter
    /// `Submitting`.
    ///
    /// The caller owns the request; every [`SubmitStart::Send`] must be
    /// followed by exactly one [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_submitting() {
            return SubmitStart::Busy;
        }

        if !self.validate() {
            return SubmitStart::Invalid;
        }

        self.phase = FormPhase::Submitting;
        self.server_error = None;

        SubmitStart::Send(self.credentials())
    }

    /// Second half of a submission: fold the request result into form state.
    ///
    /// Loading always ends here, whichever way the request went.
    pub fn finish_submit(
        &mut self,
        result: Result<SignInReply, TransportError>,
    ) -> SubmissionOutcome {
        self.phase = FormPhase::Idle;

        match result {
            Ok(reply) if reply.status.is_success() => {
                self.phase = FormPhase::NavigatingAway;
                SubmissionOutcome::Success {
                    destination: SUCCESS_DESTINATION.to_string(),
                    user: reply.body.user,
                }
            }
            Ok(reply) => {
                let message = non_empty(reply.body.message)
                    .unwrap_or_else(|| SIGNIN_FAILED_MESSAGE.to_string());
                tracing::info!(status = %reply.status, "sign-in refused by server");
                self.server_error = Some(message.clone());
                SubmissionOutcome::CredentialRejected { message }
            }
            Err(err) => {
                let message = non_empty(Some(err.to_string()))
                    .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string());
                tracing::warn!(error = %err, "sign-in request failed");
                self.server_error = Some(message.clone());
                SubmissionOutcome::TransportFailure { message }
            }
        }
    }

    /// Full submission: validate, send, update state, navigate on success.
    ///
    /// Stands in for the form's submit event, so there is no default
    /// browser submission to suppress. A failure only ends this attempt;
    /// the user can correct the input and submit again.
    pub async fn submit<T, N>(&mut self, transport: &T, navigator: &mut N) -> SubmissionOutcome
    where
        T: SignInTransport + ?Sized,
        N: Navigator + ?Sized,
    {
        let credentials = match self.begin_submit() {
            SubmitStart::Send(credentials) => credentials,
            SubmitStart::Invalid => return SubmissionOutcome::ValidationRejected,
            SubmitStart::Busy => return SubmissionOutcome::Ignored,
        };

        let result = transport.send(&credentials).await;
        let outcome = self.finish_submit(result);

        if let SubmissionOutcome::Success { destination, .. } = &outcome {
            navigator.navigate(destination);
        }

        outcome
    }

    /// The full field set as it would be sent.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone()).with_remember(self.remember)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn field_error(&self, field: CredentialField) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Banner-level error, if any.
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Loading indicator.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::signin::SignInResponse;
    use crate::client::navigator::MockNavigator;
    use crate::client::transport::MockSignInTransport;
    use axum::http::StatusCode;

    fn filled(email: &str, password: &str) -> SignInForm {
        let mut form = SignInForm::new();
        form.update_field(FieldUpdate::Email(email.to_string()));
        form.update_field(FieldUpdate::Password(password.to_string()));
        form
    }

    fn reply(status: StatusCode, body: SignInResponse) -> SignInReply {
        SignInReply { status, body }
    }

    fn demo_user() -> SignInUser {
        SignInUser {
            email: "demo@blogify.test".to_string(),
            name: "Demo User".to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_bad_emails() {
        for email in ["", "not-an-email", "demo@", "@blogify.test", "demo blogify.test"] {
            let mut form = filled(email, "password123");

            assert!(!form.validate(), "{email:?} should be rejected");

            let message = form.field_error(CredentialField::Email).unwrap();
            assert!(message.to_lowercase().contains("email"));
        }
    }

    #[test]
    fn test_validate_rejects_short_password() {
        for password in ["", "1", "12345"] {
            let mut form = filled("demo@blogify.test", password);

            assert!(!form.validate());
            assert!(form.field_error(CredentialField::Password).is_some());
            assert!(form.field_error(CredentialField::Email).is_none());
        }
    }

    #[test]
    fn test_validate_accepts_and_clears_errors() {
        let mut form = filled("bad", "123");
        assert!(!form.validate());
        assert_eq!(form.field_errors().len(), 2);

        form.update_field(FieldUpdate::Email("demo@blogify.test".to_string()));
        form.update_field(FieldUpdate::Password("123456".to_string()));

        assert!(form.validate());
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_validate_replaces_previous_map() {
        let mut form = filled("bad", "password123");
        assert!(!form.validate());
        assert!(form.field_error(CredentialField::Email).is_some());

        // Fix email without going through update_field's clearing path.
        form.email = "demo@blogify.test".to_string();
        form.password = "123".to_string();

        assert!(!form.validate());
        assert!(form.field_error(CredentialField::Email).is_none());
        assert!(form.field_error(CredentialField::Password).is_some());
    }

    #[test]
    fn test_update_clears_only_its_own_error_and_the_banner() {
        let mut form = filled("bad", "123");
        assert!(!form.validate());
        form.server_error = Some("Invalid credentials".to_string());

        form.update_field(FieldUpdate::Email("demo@blogify.test".to_string()));

        assert!(form.field_error(CredentialField::Email).is_none());
        assert!(form.field_error(CredentialField::Password).is_some());
        assert!(form.server_error().is_none());
    }

    #[test]
    fn test_remember_update_clears_banner() {
        let mut form = SignInForm::new();
        form.server_error = Some("nope".to_string());

        form.update_field(FieldUpdate::Remember(true));

        assert!(form.remember());
        assert!(form.server_error().is_none());
        assert_eq!(form.credentials().remember, Some(true));
    }

    #[tokio::test]
    async fn test_submit_invalid_sends_nothing() {
        let mut transport = MockSignInTransport::new();
        transport.expect_send().times(0);
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);

        let mut form = filled("not-an-email", "123");
        let outcome = form.submit(&transport, &mut navigator).await;

        assert_eq!(outcome, SubmissionOutcome::ValidationRejected);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.field_error(CredentialField::Email).is_some());
    }

    #[tokio::test]
    async fn test_submit_success_navigates_to_dashboard() {
        let mut transport = MockSignInTransport::new();
        transport
            .expect_send()
            .withf(|req| req.email == "demo@blogify.test" && req.remember == Some(true))
            .times(1)
            .returning(|_| Ok(reply(StatusCode::OK, SignInResponse::success(demo_user()))));

        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|path| path == "/dashboard")
            .times(1)
            .return_const(());

        let mut form = filled("demo@blogify.test", "password123");
        form.update_field(FieldUpdate::Remember(true));

        let outcome = form.submit(&transport, &mut navigator).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                destination: "/dashboard".to_string(),
                user: Some(demo_user()),
            }
        );
        assert_eq!(form.phase(), FormPhase::NavigatingAway);
        assert!(form.server_error().is_none());
    }

    #[tokio::test]
    async fn test_submit_rejected_shows_server_message() {
        let mut transport = MockSignInTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(reply(
                StatusCode::UNAUTHORIZED,
                SignInResponse::failure("Invalid credentials. Use the example account."),
            ))
        });
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);

        let mut form = filled("demo@blogify.test", "wrongpass");
        let outcome = form.submit(&transport, &mut navigator).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::CredentialRejected {
                message: "Invalid credentials. Use the example account.".to_string()
            }
        );
        assert!(!form.is_submitting());
        assert_eq!(
            form.server_error(),
            Some("Invalid credentials. Use the example account.")
        );
        assert!(form.field_errors().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejected_without_message_uses_fallback() {
        let mut transport = MockSignInTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(reply(
                StatusCode::BAD_REQUEST,
                SignInResponse {
                    ok: false,
                    message: None,
                    user: None,
                },
            ))
        });
        let mut navigator = MockNavigator::new();

        let mut form = filled("demo@blogify.test", "password123");
        form.submit(&transport, &mut navigator).await;

        assert_eq!(form.server_error(), Some(SIGNIN_FAILED_MESSAGE));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_submit_transport_failure_uses_error_text() {
        let mut transport = MockSignInTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(TransportError::UrlParse(url::ParseError::EmptyHost)));
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);

        let mut form = filled("demo@blogify.test", "password123");
        let outcome = form.submit(&transport, &mut navigator).await;

        let expected = TransportError::UrlParse(url::ParseError::EmptyHost).to_string();
        assert_eq!(
            outcome,
            SubmissionOutcome::TransportFailure {
                message: expected.clone()
            }
        );
        assert_eq!(form.server_error(), Some(expected.as_str()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut form = filled("demo@blogify.test", "password123");

        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert!(matches!(form.begin_submit(), SubmitStart::Busy));

        form.finish_submit(Ok(reply(
            StatusCode::UNAUTHORIZED,
            SignInResponse::failure("nope"),
        )));

        assert!(form.can_submit());
        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));
    }

    #[test]
    fn test_validate_rejects_email_without_dotted_domain() {
        let mut form = filled("demo@localhost", "password123");

        assert!(!form.validate());
        assert!(form.field_error(CredentialField::Email).is_some());
    }

    #[test]
    fn test_finish_submit_success_with_empty_body() {
        let mut form = filled("demo@blogify.test", "password123");
        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));

        let body: SignInResponse = serde_json::from_str("{}").unwrap();
        let outcome = form.finish_submit(Ok(reply(StatusCode::OK, body)));

        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                destination: "/dashboard".to_string(),
                user: None,
            }
        );
        assert_eq!(form.phase(), FormPhase::NavigatingAway);
    }

    #[test]
    fn test_finish_submit_error_body_without_message_uses_fallback() {
        let mut form = filled("demo@blogify.test", "password123");
        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));

        let body: SignInResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        let outcome = form.finish_submit(Ok(reply(StatusCode::INTERNAL_SERVER_ERROR, body)));

        assert_eq!(
            outcome,
            SubmissionOutcome::CredentialRejected {
                message: SIGNIN_FAILED_MESSAGE.to_string(),
            }
        );
        assert_eq!(form.server_error(), Some(SIGNIN_FAILED_MESSAGE));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_banner() {
        let mut form = filled("demo@blogify.test", "password123");
        form.server_error = Some("old".to_string());

        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));
        assert!(form.server_error().is_none());
    }

    #[test]
    fn test_resubmit_after_failure_is_independent() {
        let mut form = filled("demo@blogify.test", "wrongpass");

        assert!(matches!(form.begin_submit(), SubmitStart::Send(_)));
        form.finish_submit(Ok(reply(
            StatusCode::UNAUTHORIZED,
            SignInResponse::failure("nope"),
        )));
        assert_eq!(form.server_error(), Some("nope"));

        form.update_field(FieldUpdate::Password("password123".to_string()));

        match form.begin_submit() {
            SubmitStart::Send(creds) => assert_eq!(creds.password, "password123"),
            other => panic!("expected Send, got {other:?}"),
        }
    }
}
