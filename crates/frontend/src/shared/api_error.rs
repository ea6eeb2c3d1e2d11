//! Errors of panel API calls and decoding of write replies.

use contracts::shared::api_reply::ApiReply;
use gloo_net::http::Response;
use thiserror::Error;

/// Failure of a single backend round-trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Failed to build request: {0}")]
    Build(String),

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {error}")]
    Status { status: u16, error: String },
}

impl ApiError {
    /// Backend-provided error text, if the backend produced one
    pub fn backend_error(&self) -> Option<&str> {
        match self {
            ApiError::Status { error, .. } => Some(error.as_str()),
            _ => None,
        }
    }

    /// Text an operator should see: the backend's own error, or `fallback`
    /// for transport and decoding failures.
    pub fn operator_text(&self, fallback: &str) -> String {
        self.backend_error()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

pub fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

pub fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

pub fn build(e: gloo_net::Error) -> ApiError {
    ApiError::Build(e.to_string())
}

/// Decode an `{message}` / `{error}` reply.
///
/// The body is decoded before the status is looked at, so a non-success
/// status with an unreadable body counts as a decoding failure.
pub async fn read_reply(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let reply: ApiReply = response.json().await.map_err(decode)?;
    reply_to_result(status, ok, reply)
}

pub(crate) fn reply_to_result(status: u16, ok: bool, reply: ApiReply) -> Result<String, ApiError> {
    if ok {
        Ok(reply.message_text())
    } else {
        Err(ApiError::Status {
            status,
            error: reply.error_text(),
        })
    }
}
