//! Configuration management for the FlightXML2 client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Behavior when a 200 response lacks the `<Method>Result` envelope field.
///
/// The service sometimes omits the field for legitimately empty results,
/// so the default is to pass a JSON `null` to the operation's decoder.
/// `Strict` instead reports the absent field as a malformed envelope.
///
/// Note that under `Lenient` an operation with a non-nullable payload
/// type still fails, as `Error::Decode` rather than
/// `Error::MissingResult`; the `null` itself is observable through raw
/// envelope calls or `Option`/`Value` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum MissingResultPolicy {
  /// Absent field decodes as JSON `null`
  #[default]
  Lenient,
  /// Absent field is an error
  Strict,
}

/// Main configuration struct for the FlightXML2 client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// FlightAware account name; `None` means unset
  pub username: Option<String>,

  /// FlightXML API key; `None` means unset
  pub api_key: Option<String>,

  /// Base URL for the FlightXML2 service
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Retry budget; present for parity with the service configuration
  /// surface but never consumed, as the transport performs no retries
  pub max_retries: u32,

  /// Absent-envelope-field handling
  pub missing_result: MissingResultPolicy,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let username = env::var("FLIGHTXML_USERNAME").ok();
    let api_key = env::var("FLIGHTXML_API_KEY").ok();

    let base_url =
      env::var("FLIGHTXML_BASE_URL").unwrap_or_else(|_| crate::FLIGHTXML_BASE_URL.to_string());

    let timeout_secs = env::var("FLIGHTXML_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FLIGHTXML_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("FLIGHTXML_MAX_RETRIES")
      .unwrap_or_else(|_| crate::MAX_RETRIES.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FLIGHTXML_MAX_RETRIES".to_string()))?;

    let missing_result = match env::var("FLIGHTXML_STRICT_ENVELOPE").ok().as_deref() {
      Some("1") | Some("true") => MissingResultPolicy::Strict,
      _ => MissingResultPolicy::Lenient,
    };

    Ok(Config { username, api_key, base_url, timeout_secs, max_retries, missing_result })
  }

  /// Create a config with default values and the given credential pair
  pub fn default_with_credentials(username: impl Into<String>, api_key: impl Into<String>) -> Self {
    Config {
      username: Some(username.into()),
      api_key: Some(api_key.into()),
      base_url: crate::FLIGHTXML_BASE_URL.to_string(),
      timeout_secs: 30,
      max_retries: crate::MAX_RETRIES,
      missing_result: MissingResultPolicy::default(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      username: None,
      api_key: None,
      base_url: crate::FLIGHTXML_BASE_URL.to_string(),
      timeout_secs: 30,
      max_retries: crate::MAX_RETRIES,
      missing_result: MissingResultPolicy::default(),
    }
  }
}
