//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::signin_page_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /signin` - Sign-in page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/signin", get(signin_page_handler))
}
