//! Error taxonomy shared by every operation in the client.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  /// No credential is held, or the server rejected the one we sent (401).
  /// Writes require a signed-in caller; reads fall back to anonymous.
  #[error("not signed in — please sign in and try again")]
  Unauthenticated,

  /// Input rejected before (or instead of) a network call, or a 4xx
  /// rejection carrying the server's explanation.
  #[error("{0}")]
  Validation(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// The server refused the operation for this caller (e.g. deleting a
  /// comment authored by someone else).
  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("network error: {0}")]
  Network(String),

  #[error("request timed out")]
  Timeout,

  /// Unexpected 5xx-class failure.
  #[error("server error ({status}): {message}")]
  Server { status: u16, message: String },
}

impl Error {
  /// Whether this error means the held credential is no longer valid.
  pub fn is_auth_failure(&self) -> bool {
    matches!(self, Error::Unauthenticated)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
