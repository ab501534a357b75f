#![allow(dead_code)]

use axum::{Router, routing::post};
use axum_test::TestServer;
use blogify_signin::api::handlers::signin_handler;
use blogify_signin::state::AppState;

pub const DEMO_EMAIL: &str = "demo@blogify.test";
pub const DEMO_PASSWORD: &str = "password123";

pub fn create_test_state() -> AppState {
    AppState::example()
}

pub fn signin_server() -> TestServer {
    let app = Router::new()
        .route("/api/auth/mock-signin", post(signin_handler))
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}
