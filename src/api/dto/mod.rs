//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are shared with the client side ([`crate::client`]), so the wire
//! format is defined once.

pub mod health;
pub mod signin;
