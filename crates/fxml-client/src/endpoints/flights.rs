//! Flight lookup, tracking, and route decoding endpoints
//!
//! This module provides access to FlightXML2's flight data including:
//! - Historical and extended flight records for an ident
//! - Live position data for airborne aircraft
//! - Filed route decoding into named fixes
//! - Historical and most-recent position tracks

use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use fxml_models::flights::*;
use fxml_models::tracks::TrackList;
use std::sync::Arc;
use tracing::instrument;

/// Flight lookup, tracking, and route decoding endpoints
pub struct FlightEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl FlightEndpoints {
  /// Create a new flight endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Look up current, scheduled, and historical flights for an ident
  ///
  /// # Arguments
  ///
  /// * `ident` - Flight or tail identifier, for instance "N415PW"
  /// * `how_many` - Optional result-set cap
  #[instrument(skip(self))]
  pub async fn flight_info(&self, ident: &str, how_many: Option<u32>) -> Result<FlightInfoList> {
    let mut params = vec![("ident".to_string(), ident.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }

    self.transport.call(Endpoint::FlightInfo, &params).await
  }

  /// Extended flight lookup carrying the unique FlightAware identifier
  ///
  /// `ident` also accepts a faFlightID or "ident@departureTime".
  #[instrument(skip(self))]
  pub async fn flight_info_ex(
    &self,
    ident: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<FlightInfoExList> {
    let mut params = vec![("ident".to_string(), ident.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::FlightInfoEx, &params).await
  }

  /// Resolve an ident and departure time to a unique flight identifier
  ///
  /// # Arguments
  ///
  /// * `ident` - Flight or tail identifier
  /// * `departure_time` - Departure, seconds since epoch
  #[instrument(skip(self))]
  pub async fn get_flight_id(&self, ident: &str, departure_time: i64) -> Result<String> {
    let params = vec![
      ("ident".to_string(), ident.to_string()),
      ("departureTime".to_string(), departure_time.to_string()),
    ];

    self.transport.call(Endpoint::GetFlightId, &params).await
  }

  /// Get the current state of an airborne aircraft
  #[instrument(skip(self))]
  pub async fn in_flight_info(&self, ident: &str) -> Result<InFlightAircraft> {
    let params = vec![("ident".to_string(), ident.to_string())];

    self.transport.call(Endpoint::InFlightInfo, &params).await
  }

  /// Look up the flight inbound to operate the same aircraft
  #[instrument(skip(self))]
  pub async fn inbound_flight_info(&self, fa_flight_id: &str) -> Result<FlightEx> {
    let params = vec![("faFlightID".to_string(), fa_flight_id.to_string())];

    self.transport.call(Endpoint::InboundFlightInfo, &params).await
  }

  /// Decode the filed route of a specific flight into fixes
  #[instrument(skip(self))]
  pub async fn decode_flight_route(&self, fa_flight_id: &str) -> Result<RouteFixList> {
    let params = vec![("faFlightID".to_string(), fa_flight_id.to_string())];

    self.transport.call(Endpoint::DecodeFlightRoute, &params).await
  }

  /// Decode an arbitrary route string between two airports into fixes
  ///
  /// # Arguments
  ///
  /// * `origin` - Origin airport code
  /// * `route` - Route string, for instance "SJC V334 SAC SWR"
  /// * `destination` - Destination airport code
  #[instrument(skip(self))]
  pub async fn decode_route(
    &self,
    origin: &str,
    route: &str,
    destination: &str,
  ) -> Result<RouteFixList> {
    let params = vec![
      ("origin".to_string(), origin.to_string()),
      ("route".to_string(), route.to_string()),
      ("destination".to_string(), destination.to_string()),
    ];

    self.transport.call(Endpoint::DecodeRoute, &params).await
  }

  /// Get the position track of a completed flight
  #[instrument(skip(self))]
  pub async fn get_historical_track(&self, fa_flight_id: &str) -> Result<TrackList> {
    let params = vec![("faFlightID".to_string(), fa_flight_id.to_string())];

    self.transport.call(Endpoint::GetHistoricalTrack, &params).await
  }

  /// Get the position track of an ident's most recent flight
  #[instrument(skip(self))]
  pub async fn get_last_track(&self, ident: &str) -> Result<TrackList> {
    let params = vec![("ident".to_string(), ident.to_string())];

    self.transport.call(Endpoint::GetLastTrack, &params).await
  }
}
