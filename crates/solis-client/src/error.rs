//! The closed error enumeration for API calls.

use thiserror::Error;

/// Why an API call failed. Callers treat all kinds alike; the distinction is
/// kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
  /// The request never produced a response (connect, timeout, TLS, ...).
  #[error("network failure: {0}")]
  NetworkFailure(String),

  /// The server answered with a non-2xx status.
  #[error("server rejected request with status {0}")]
  ServerRejected(u16),

  /// The response body did not match the expected shape.
  #[error("could not decode response: {0}")]
  DecodeFailure(String),
}

impl From<reqwest::Error> for ClientError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_decode() {
      ClientError::DecodeFailure(e.to_string())
    } else if let Some(status) = e.status() {
      ClientError::ServerRejected(status.as_u16())
    } else {
      ClientError::NetworkFailure(e.to_string())
    }
  }
}
