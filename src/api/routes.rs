//! API route configuration.
//!
//! Every endpoint here is public: the sign-in check is what a client calls
//! before it has any credentials to present.

use crate::api::handlers::signin_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Path of the mock credential check, relative to the `/api` prefix.
pub const SIGNIN_PATH: &str = "/auth/mock-signin";

/// All API routes.
///
/// # Endpoints
///
/// - `POST /auth/mock-signin` - Check credentials against the demo account
pub fn public_routes() -> Router<AppState> {
    Router::new().route(SIGNIN_PATH, post(signin_handler))
}
