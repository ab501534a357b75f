//! # Blogify sign-in
//!
//! A sign-in form controller and the mock credential check it talks to.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credentials schema, field error map, verifier trait
//! - **Application Layer** ([`application`]) - Credential check service
//! - **Infrastructure Layer** ([`infrastructure`]) - Example verifier with the demo account
//! - **API Layer** ([`api`]) - `POST /api/auth/mock-signin` handler and DTOs
//! - **Web Layer** ([`web`]) - Server-rendered sign-in page
//! - **Client** ([`client`]) - Headless form controller, HTTP transport, navigation seam
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! cargo run
//!
//! # Sign in from the terminal
//! cargo run --bin signin -- --email demo@blogify.test
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::signin::{SignInRequest, SignInResponse, SignInUser};
    pub use crate::application::services::SignInService;
    pub use crate::client::{
        FieldUpdate, FormPhase, HttpTransport, Navigator, SignInForm, SubmissionOutcome,
    };
    pub use crate::domain::entities::{CredentialField, Credentials};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
