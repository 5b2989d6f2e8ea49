//! HTTP transport layer for FlightXML2 API requests

use crate::envelope;
use fxml_core::{Config, Endpoint, Error, MissingResultPolicy, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, error, warn};

/// The credential pair used for HTTP Basic Authentication.
///
/// `None` is the unset sentinel; an incomplete pair never answers an
/// authentication challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// FlightAware account name
    pub username: Option<String>,
    /// FlightXML API key
    pub api_key: Option<String>,
}

impl Credentials {
    fn pair(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.api_key) {
            (Some(user), Some(key)) => Some((user, key)),
            _ => None,
        }
    }
}

/// HTTP transport layer for making requests to the FlightXML2 service
pub struct Transport {
    client: Client,
    base_url: String,
    credentials: RwLock<Credentials>,
    missing_result: MissingResultPolicy,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("fxml-client/0.1.0")
            // The service host's certificate is not validated; carried
            // over as a documented contract of the wire protocol.
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {e}")))?;

        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            credentials: RwLock::new(Credentials {
                username: config.username.clone(),
                api_key: config.api_key.clone(),
            }),
            missing_result: config.missing_result,
        })
    }

    /// Overwrite the stored credential pair.
    ///
    /// `None` resets a field to the unset sentinel; no format validation
    /// is performed. Requests already in flight keep the pair they were
    /// issued with.
    pub fn set_credentials(&self, username: Option<String>, api_key: Option<String>) {
        let mut creds = self.credentials.write().unwrap_or_else(|e| e.into_inner());
        creds.username = username;
        creds.api_key = api_key;
    }

    /// A snapshot of the stored credential pair.
    pub fn credentials(&self) -> Credentials {
        self.credentials.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Call an endpoint and decode the unwrapped `<Method>Result` payload
    ///
    /// Under [`MissingResultPolicy::Lenient`] an absent envelope field
    /// decodes from JSON `null`, so it surfaces as `Ok` only when `T`
    /// accepts null (`Option`, `Value`); other types report
    /// `Error::Decode`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The FlightXML2 operation to call
    /// * `params` - The form-encoded request body, in order
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the decoded payload or an error
    pub async fn call<T>(&self, endpoint: Endpoint, params: &[(String, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let envelope = self.post(endpoint, params).await?;
        let payload = envelope::unwrap_result(envelope, endpoint, self.missing_result)?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Call an endpoint and pass the full parsed envelope through without
    /// unwrapping
    pub async fn call_raw(&self, endpoint: Endpoint, params: &[(String, String)]) -> Result<Value> {
        self.post(endpoint, params).await
    }

    /// Issue the request and parse the response body
    async fn post(&self, endpoint: Endpoint, params: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Posting to: {}", url);

        let response = self.send_with_challenge(&url, params).await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {e}")))?;

        if status != StatusCode::OK {
            warn!("Request to {} failed with status: {}", endpoint, status);
            return Err(classify_status(status.as_u16(), text));
        }

        debug!("Response body length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            Error::Parse { message: e.to_string(), text }
        })
    }

    /// Send the request with challenge-based basic authentication.
    ///
    /// The first attempt carries no Authorization header; a 401 answer is
    /// reissued once with the stored credentials. An unset pair never
    /// answers the challenge and the 401 stands.
    async fn send_with_challenge(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Response> {
        let first = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if first.status() != StatusCode::UNAUTHORIZED {
            return Ok(first);
        }

        let pair = {
            let creds = self.credentials.read().unwrap_or_else(|e| e.into_inner());
            creds.pair().map(|(user, key)| (user.to_string(), key.to_string()))
        };

        match pair {
            Some((user, key)) => {
                debug!("Answering authentication challenge for: {}", url);
                self.client
                    .post(url)
                    .form(params)
                    .basic_auth(user, Some(key))
                    .send()
                    .await
                    .map_err(|e| Error::Transport(e.to_string()))
            }
            None => Ok(first),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").field("base_url", &self.base_url).finish()
    }
}

/// Classify a non-200 status into its fixed error record
fn classify_status(code: u16, text: String) -> Error {
    match code {
        401 => Error::Unauthorized { code, text },
        410 => Error::InvalidRequestUri { code, text },
        _ => Error::BadRequest { code, text },
    }
}
