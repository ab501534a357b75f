//! Request seam between the form controller and the credential check.

use async_trait::async_trait;
use axum::http::StatusCode;
use url::Url;

use crate::api::dto::signin::{SignInRequest, SignInResponse};

/// Absolute path of the credential check endpoint.
pub const SIGNIN_ENDPOINT: &str = "/api/auth/mock-signin";

/// Easy alias for transport results
pub type Result<T> = std::result::Result<T, TransportError>;

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone)]
pub struct SignInReply {
    pub status: StatusCode,
    pub body: SignInResponse,
}

/// Errors where no usable response came back at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// We couldn't build the endpoint URL, for example if the server base
    /// URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The request never completed or the response body was not a JSON
    /// object.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Sends one sign-in attempt. No retries, no timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInTransport: Send + Sync {
    async fn send(&self, request: &SignInRequest) -> Result<SignInReply>;
}

/// [`SignInTransport`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Builds a transport for a server base URL such as
    /// `http://127.0.0.1:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::UrlParse`] if `server` is not a valid base URL.
    pub fn new(server: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), server)
    }

    pub fn with_client(http: reqwest::Client, server: &str) -> Result<Self> {
        let endpoint = Url::parse(server)?.join(SIGNIN_ENDPOINT)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SignInTransport for HttpTransport {
    async fn send(&self, request: &SignInRequest) -> Result<SignInReply> {
        tracing::debug!(endpoint = %self.endpoint, email = %request.email, "sending sign-in request");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body: SignInResponse = resp.json().await?;

        Ok(SignInReply { status, body })
    }
}
