//! Handler for the mock sign-in endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::signin::{SignInRequest, SignInResponse};
use crate::error::{AppError, INVALID_REQUEST_MESSAGE};
use crate::state::AppState;

/// Checks a credential payload against the configured verifier.
///
/// # Endpoint
///
/// `POST /api/auth/mock-signin`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "demo@blogify.test",
///   "password": "password123",
///   "remember": true            // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "user": { "email": "demo@blogify.test", "name": "Demo User" }
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not JSON, has the wrong shape, or breaks a
///   field constraint. The message is the first field violation, otherwise
///   `"Invalid request"`.
/// - **401 Unauthorized**: well-formed credentials that the verifier rejects.
///
/// The body is read raw so that a missing or wrong `Content-Type` is still
/// answered with the sign-in failure shape.
pub async fn signin_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SignInResponse>, AppError> {
    let payload: SignInRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Unparseable sign-in payload");
        AppError::bad_request(INVALID_REQUEST_MESSAGE)
    })?;

    payload.validate().inspect_err(|e| {
        tracing::debug!(errors = %e, "Sign-in payload failed validation");
    })?;

    let user = state.signin_service.sign_in(&payload).await?;

    Ok(Json(SignInResponse::success(user.into())))
}
