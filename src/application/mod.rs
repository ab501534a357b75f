//! Application layer services implementing business logic.
//!
//! Services consume domain traits and give HTTP handlers a small API that
//! already speaks in [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::signin_service::SignInService`] - Credential check for the mock sign-in endpoint

pub mod services;
