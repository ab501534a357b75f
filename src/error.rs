//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::entities::FieldErrors;

/// Message used when a rejected payload gives nothing more specific to say.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Failure body. Same shape as a sign-in response with `ok: false`.
#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unauthorized { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = FieldErrors::from_validation(&errors);
        match fields.first() {
            Some((_, message)) => AppError::bad_request(message),
            None => AppError::bad_request(INVALID_REQUEST_MESSAGE),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message } | AppError::Unauthorized { message } => message,
        };

        let body = ErrorBody { ok: false, message };

        (status, Json(body)).into_response()
    }
}
