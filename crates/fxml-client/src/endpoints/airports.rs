//! Airport information, board, and route endpoints

use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use fxml_models::airports::*;
use fxml_models::common::StringList;
use std::sync::Arc;
use tracing::instrument;

/// Airport information, board, and route endpoints
pub struct AirportEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl AirportEndpoints {
  /// Create a new airport endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Look up location details for an airport code
  ///
  /// # Arguments
  ///
  /// * `airport_code` - ICAO or IATA airport code, for instance "KSFO"
  #[instrument(skip(self))]
  pub async fn airport_info(&self, airport_code: &str) -> Result<AirportInfo> {
    let params = vec![("airportCode".to_string(), airport_code.to_string())];

    self.transport.call(Endpoint::AirportInfo, &params).await
  }

  /// List all airport codes known to the service
  #[instrument(skip(self))]
  pub async fn all_airports(&self) -> Result<StringList> {
    self.transport.call(Endpoint::AllAirports, &[]).await
  }

  /// List flights recently arrived at an airport
  ///
  /// # Arguments
  ///
  /// * `airport` - Airport code
  /// * `how_many` - Optional result-set cap
  /// * `filter` - Optional traffic filter, "ga" or "airline"
  /// * `offset` - Optional paging offset
  #[instrument(skip(self))]
  pub async fn arrived(
    &self,
    airport: &str,
    how_many: Option<u32>,
    filter: Option<&str>,
    offset: Option<u32>,
  ) -> Result<ArrivalList> {
    let params = board_params(airport, how_many, filter, offset);

    self.transport.call(Endpoint::Arrived, &params).await
  }

  /// List flights recently departed from an airport
  #[instrument(skip(self))]
  pub async fn departed(
    &self,
    airport: &str,
    how_many: Option<u32>,
    filter: Option<&str>,
    offset: Option<u32>,
  ) -> Result<DepartureList> {
    let params = board_params(airport, how_many, filter, offset);

    self.transport.call(Endpoint::Departed, &params).await
  }

  /// List flights scheduled to depart from an airport
  #[instrument(skip(self))]
  pub async fn scheduled(
    &self,
    airport: &str,
    how_many: Option<u32>,
    filter: Option<&str>,
    offset: Option<u32>,
  ) -> Result<ScheduledList> {
    let params = board_params(airport, how_many, filter, offset);

    self.transport.call(Endpoint::Scheduled, &params).await
  }

  /// Count current operations at an airport
  #[instrument(skip(self))]
  pub async fn count_airport_operations(&self, airport: &str) -> Result<AirportOperationCounts> {
    let params = vec![("airport".to_string(), airport.to_string())];

    self.transport.call(Endpoint::CountAirportOperations, &params).await
  }

  /// List IFR routes recently filed between two airports
  #[instrument(skip(self))]
  pub async fn routes_between_airports(
    &self,
    origin: &str,
    destination: &str,
  ) -> Result<AirportRouteList> {
    let params = vec![
      ("origin".to_string(), origin.to_string()),
      ("destination".to_string(), destination.to_string()),
    ];

    self.transport.call(Endpoint::RoutesBetweenAirports, &params).await
  }

  /// List IFR routes between two airports, with paging
  #[instrument(skip(self))]
  pub async fn routes_between_airports_ex(
    &self,
    origin: &str,
    destination: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<AirportRouteList> {
    let mut params = vec![
      ("origin".to_string(), origin.to_string()),
      ("destination".to_string(), destination.to_string()),
    ];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::RoutesBetweenAirportsEx, &params).await
  }
}

/// Shared parameter shaping for the three airport board operations
fn board_params(
  airport: &str,
  how_many: Option<u32>,
  filter: Option<&str>,
  offset: Option<u32>,
) -> Vec<(String, String)> {
  let mut params = vec![("airport".to_string(), airport.to_string())];
  if let Some(how_many) = how_many {
    params.push(("howMany".to_string(), how_many.to_string()));
  }
  if let Some(filter) = filter {
    params.push(("filter".to_string(), filter.to_string()));
  }
  if let Some(offset) = offset {
    params.push(("offset".to_string(), offset.to_string()));
  }
  params
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_board_params_shape() {
    let params = board_params("KSFO", Some(1), Some("airline"), None);
    assert_eq!(params[0], ("airport".to_string(), "KSFO".to_string()));
    assert!(params.iter().any(|(k, v)| k == "howMany" && v == "1"));
    assert!(params.iter().any(|(k, v)| k == "filter" && v == "airline"));
    assert!(!params.iter().any(|(k, _)| k == "offset"));
  }
}
