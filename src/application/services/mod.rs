//! Business logic services for the application layer.

pub mod signin_service;

pub use signin_service::{SignInService, SignedInUser};
