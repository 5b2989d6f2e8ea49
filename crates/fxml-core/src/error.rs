use thiserror::Error;

/// The main error type for fxml-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Transport-level failure (DNS, connection, timeout)
  #[error("Transport error: {0}")]
  Transport(String),

  /// HTTP 401 from the service
  #[error("unauthorized")]
  Unauthorized {
    /// HTTP status code
    code: u16,
    /// Raw response body
    text: String,
  },

  /// HTTP 410 from the service
  #[error("invalid request URI")]
  InvalidRequestUri {
    /// HTTP status code
    code: u16,
    /// Raw response body
    text: String,
  },

  /// Any other non-200 status from the service
  #[error("bad request")]
  BadRequest {
    /// HTTP status code
    code: u16,
    /// Raw response body
    text: String,
  },

  /// JSON decoding failure on an otherwise-successful (200) response
  #[error("Parse error: {message}")]
  Parse {
    /// The underlying parse failure
    message: String,
    /// Raw response body, kept for diagnostics
    text: String,
  },

  /// A present envelope payload that does not match the declared result type
  #[error("Decode error: {0}")]
  Decode(#[from] serde_json::Error),

  /// Envelope field `<Method>Result` absent under the strict policy
  #[error("Missing result field: {0}")]
  MissingResult(String),

  /// DeleteAlert called with an empty alert identifier
  #[error("Missing alert identifier")]
  MissingAlertId,
}

impl Error {
  /// Raw response body retained for diagnostics, when one exists.
  pub fn response_text(&self) -> Option<&str> {
    match self {
      Error::Unauthorized { text, .. }
      | Error::InvalidRequestUri { text, .. }
      | Error::BadRequest { text, .. }
      | Error::Parse { text, .. } => Some(text),
      _ => None,
    }
  }

  /// HTTP status code carried by the error, when one exists.
  pub fn status_code(&self) -> Option<u16> {
    match self {
      Error::Unauthorized { code, .. }
      | Error::InvalidRequestUri { code, .. }
      | Error::BadRequest { code, .. } => Some(*code),
      _ => None,
    }
  }
}

/// Result type alias for fxml-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_error_tags() {
    let unauthorized = Error::Unauthorized { code: 401, text: "denied".into() };
    assert_eq!(unauthorized.to_string(), "unauthorized");
    assert_eq!(unauthorized.status_code(), Some(401));
    assert_eq!(unauthorized.response_text(), Some("denied"));

    let gone = Error::InvalidRequestUri { code: 410, text: String::new() };
    assert_eq!(gone.to_string(), "invalid request URI");

    let other = Error::BadRequest { code: 500, text: "oops".into() };
    assert_eq!(other.to_string(), "bad request");
    assert_eq!(other.status_code(), Some(500));
  }

  #[test]
  fn parse_error_keeps_body() {
    let err = Error::Parse { message: "expected value".into(), text: "<html>".into() };
    assert_eq!(err.response_text(), Some("<html>"));
    assert!(err.status_code().is_none());
  }
}
