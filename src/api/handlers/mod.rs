//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod signin;

pub use health::health_handler;
pub use signin::signin_handler;
