//! Endpoint groups for the FlightXML2 API
//!
//! Every group follows the same pattern: a struct holding the shared
//! transport, one async method per remote operation, and method-specific
//! parameter shaping before the call.

pub mod aircraft;
pub mod airlines;
pub mod airports;
pub mod alerts;
pub mod flights;
pub mod maps;
pub mod search;
pub mod weather;

#[cfg(test)]
mod tests {
  use crate::transport::Transport;
  use fxml_core::Config;
  use std::sync::Arc;

  #[test]
  fn test_group_creation() {
    let config = Config { base_url: "http://mock.flightxml.test/".to_string(), ..Config::default() };
    let transport = Arc::new(Transport::new(&config).unwrap());

    let group = super::aircraft::AircraftEndpoints::new(transport);
    assert_eq!(group.transport.base_url(), "http://mock.flightxml.test/");
  }
}
