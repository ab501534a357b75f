//! DTOs for the mock sign-in endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::SignedInUser;

/// Request body: the credentials schema itself.
///
/// ```json
/// { "email": "demo@blogify.test", "password": "password123", "remember": true }
/// ```
pub use crate::domain::entities::Credentials as SignInRequest;

/// Response body for every outcome of the endpoint.
///
/// `message` is present on failures, `user` on success. Every field
/// defaults when decoding, so the client can read any JSON object a server
/// answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SignInUser>,
}

impl SignInResponse {
    pub fn success(user: SignInUser) -> Self {
        Self {
            ok: true,
            message: None,
            user: Some(user),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            user: None,
        }
    }
}

/// Public view of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInUser {
    pub email: String,
    pub name: String,
}

impl From<SignedInUser> for SignInUser {
    fn from(user: SignedInUser) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}
