//! Sign-in page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::client::SignInForm;
use crate::client::transport::SIGNIN_ENDPOINT;
use crate::client::navigator::SUCCESS_DESTINATION;
use crate::domain::entities::{CredentialField, EMAIL_PATTERN};

/// Template for the sign-in page.
///
/// Renders `templates/signin.html` from a [`SignInForm`] snapshot:
/// - Email, password and "remember me" inputs
/// - Inline error slot per field
/// - Banner slot for server-level errors
#[derive(Template, WebTemplate)]
#[template(path = "signin.html")]
pub struct SignInTemplate {
    pub email: String,
    pub remember: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub server_error: Option<String>,
    pub submit_disabled: bool,
    pub endpoint: &'static str,
    pub destination: &'static str,
    pub email_pattern: &'static str,
}

impl From<&SignInForm> for SignInTemplate {
    fn from(form: &SignInForm) -> Self {
        Self {
            email: form.email().to_string(),
            remember: form.remember(),
            email_error: form.field_error(CredentialField::Email).map(str::to_string),
            password_error: form
                .field_error(CredentialField::Password)
                .map(str::to_string),
            server_error: form.server_error().map(str::to_string),
            submit_disabled: !form.can_submit(),
            endpoint: SIGNIN_ENDPOINT,
            destination: SUCCESS_DESTINATION,
            email_pattern: EMAIL_PATTERN,
        }
    }
}

/// Renders the sign-in page for a fresh form.
///
/// # Endpoint
///
/// `GET /signin`
///
/// The page posts credentials as JSON to `/api/auth/mock-signin` and moves
/// to `/dashboard` on success. The password is never pre-filled.
pub async fn signin_page_handler() -> impl IntoResponse {
    SignInTemplate::from(&SignInForm::new())
}
