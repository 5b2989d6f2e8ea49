/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2026
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The main FlightXML2 client and its endpoint group accessors

use crate::endpoints::{
  aircraft::AircraftEndpoints, airlines::AirlineEndpoints, airports::AirportEndpoints,
  alerts::AlertEndpoints, flights::FlightEndpoints, maps::MapEndpoints, search::SearchEndpoints,
  weather::WeatherEndpoints,
};

use crate::transport::{Credentials, Transport};
use fxml_core::{Config, Endpoint, Result};
use serde_json::Value;
use std::sync::Arc;

/// Main FlightXML2 API client
///
/// Provides access to all FlightXML2 endpoints through organized endpoint
/// groups. Handles authentication and transport concerns automatically;
/// each call issues exactly one outbound request with no coordination
/// between in-flight calls.
///
/// # Examples
///
/// ```ignore
/// use fxml_client::FlightXmlClient;
/// use fxml_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = FlightXmlClient::new(config)?;
///
///     // Look up an aircraft type
///     let info = client.aircraft().aircraft_type("GALX").await?;
///     println!("{}: {}", info.manufacturer, info.aircraft_type);
///
///     // Count operations at an airport
///     let counts = client.airports().count_airport_operations("KSFO").await?;
///     println!("{} enroute", counts.enroute);
///
///     Ok(())
/// }
/// ```
pub struct FlightXmlClient {
  transport: Arc<Transport>,
}

impl FlightXmlClient {
  /// Create a new FlightXML2 API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the credential pair and other
  ///   settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport })
  }

  /// Overwrite the stored credential pair
  ///
  /// `None` resets a field to the unset sentinel. Requests already in
  /// flight keep the pair they were issued with.
  pub fn set_credentials(&self, username: Option<String>, api_key: Option<String>) {
    self.transport.set_credentials(username, api_key);
  }

  /// A snapshot of the stored credential pair
  pub fn credentials(&self) -> Credentials {
    self.transport.credentials()
  }

  /// Get access to aircraft lookup endpoints
  pub fn aircraft(&self) -> AircraftEndpoints {
    AircraftEndpoints::new(self.transport.clone())
  }

  /// Get access to airline endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # let client = FlightXmlClient::new(Config::from_env()?)?;
  /// let united = client.airlines().airline_info("UAL").await?;
  /// let fleet = client.airlines().fleet_arrived("UAL", Some(1), None).await?;
  /// ```
  pub fn airlines(&self) -> AirlineEndpoints {
    AirlineEndpoints::new(self.transport.clone())
  }

  /// Get access to airport endpoints
  pub fn airports(&self) -> AirportEndpoints {
    AirportEndpoints::new(self.transport.clone())
  }

  /// Get access to flight lookup and tracking endpoints
  pub fn flights(&self) -> FlightEndpoints {
    FlightEndpoints::new(self.transport.clone())
  }

  /// Get access to flight search endpoints
  pub fn search(&self) -> SearchEndpoints {
    SearchEndpoints::new(self.transport.clone())
  }

  /// Get access to alert management endpoints
  pub fn alerts(&self) -> AlertEndpoints {
    AlertEndpoints::new(self.transport.clone())
  }

  /// Get access to weather endpoints
  pub fn weather(&self) -> WeatherEndpoints {
    WeatherEndpoints::new(self.transport.clone())
  }

  /// Get access to map imagery and utility endpoints
  pub fn maps(&self) -> MapEndpoints {
    MapEndpoints::new(self.transport.clone())
  }

  /// Call an endpoint and receive the full parsed envelope
  ///
  /// The legacy variant of the response path: no `<Method>Result`
  /// unwrapping is performed and the raw parsed JSON passes straight
  /// through.
  pub async fn raw_call(&self, endpoint: Endpoint, params: &[(String, String)]) -> Result<Value> {
    self.transport.call_raw(endpoint, params).await
  }
}

impl std::fmt::Debug for FlightXmlClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FlightXmlClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_credentials("joe", "abc123");
    let client = FlightXmlClient::new(config).expect("Failed to create client");
    let creds = client.credentials();
    assert_eq!(creds.username.as_deref(), Some("joe"));
    assert_eq!(creds.api_key.as_deref(), Some("abc123"));
  }

  #[test]
  fn test_credential_reset() {
    let config = Config::default_with_credentials("joe", "abc123");
    let client = FlightXmlClient::new(config).expect("Failed to create client");

    client.set_credentials(None, None);
    let creds = client.credentials();
    assert!(creds.username.is_none());
    assert!(creds.api_key.is_none());
  }

  #[test]
  fn test_client_creation_without_credentials() {
    let client = FlightXmlClient::new(Config::default()).expect("Failed to create client");
    assert!(client.credentials().username.is_none());
  }
}
