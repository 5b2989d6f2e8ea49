//! Airline information, schedule, and fleet endpoints
//!
//! This module provides access to FlightXML2's airline data including:
//! - Airline identity and callsign lookups
//! - Published schedules over a date window
//! - Market insight reports for an airport pair
//! - Fleet arrival and scheduled-departure boards

use crate::query::{AirlineInsightQuery, FlightScheduleQuery};
use crate::transport::Transport;
use chrono::Utc;
use fxml_core::{Endpoint, Result};
use fxml_models::airlines::*;
use fxml_models::common::StringList;
use fxml_models::airports::{ArrivalList, ScheduledList};
use std::sync::Arc;
use tracing::instrument;

/// Airline information, schedule, and fleet endpoints
pub struct AirlineEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl AirlineEndpoints {
  /// Create a new airline endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get gate, baggage claim, and cabin details for a commercial flight
  ///
  /// This information is currently only available for some carriers and
  /// flights. The flight identifier comes from GetFlightID, FlightInfoEx,
  /// or InFlightInfo (or use "ident@departureTime").
  #[instrument(skip(self))]
  pub async fn airline_flight_info(&self, fa_flight_id: &str) -> Result<AirlineFlightInfo> {
    let params = vec![("faFlightID".to_string(), fa_flight_id.to_string())];

    self.transport.call(Endpoint::AirlineFlightInfo, &params).await
  }

  /// Look up scheduled flights matching the query
  ///
  /// A query without a start date uses the current time; without an end
  /// date, one day past the start.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fxml_client::{FlightXmlClient, FlightScheduleQuery};
  /// # use fxml_core::Config;
  /// # async fn run() -> fxml_core::Result<()> {
  /// # let client = FlightXmlClient::new(Config::from_env()?)?;
  /// let query = FlightScheduleQuery::new().origin("KSJC").how_many(1);
  /// let schedules = client.airlines().airline_flight_schedules(query).await?;
  /// for flight in &schedules.data {
  ///     println!("{} {} -> {}", flight.ident, flight.origin, flight.destination);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, query))]
  pub async fn airline_flight_schedules(
    &self,
    query: FlightScheduleQuery,
  ) -> Result<FlightScheduleList> {
    let params = query.into_params_at(Utc::now().timestamp());

    self.transport.call(Endpoint::AirlineFlightSchedules, &params).await
  }

  /// Look up operator details for an airline code
  ///
  /// # Arguments
  ///
  /// * `airline_code` - ICAO airline code, for instance "UAL"
  #[instrument(skip(self))]
  pub async fn airline_info(&self, airline_code: &str) -> Result<AirlineInfo> {
    let params = vec![("airlineCode".to_string(), airline_code.to_string())];

    self.transport.call(Endpoint::AirlineInfo, &params).await
  }

  /// Get an insight report for an airport pair
  ///
  /// A query without a report type defaults to the percentage of
  /// scheduled flights actually flown.
  #[instrument(skip(self, query))]
  pub async fn airline_insight(&self, query: AirlineInsightQuery) -> Result<AirlineInsightList> {
    let params = query.into_params();

    self.transport.call(Endpoint::AirlineInsight, &params).await
  }

  /// List all airline codes known to the service
  #[instrument(skip(self))]
  pub async fn all_airlines(&self) -> Result<StringList> {
    self.transport.call(Endpoint::AllAirlines, &[]).await
  }

  /// Count enroute flights per airline
  #[instrument(skip(self))]
  pub async fn count_all_enroute_airline_operations(&self) -> Result<AirlineOperationCounts> {
    self.transport.call(Endpoint::CountAllEnrouteAirlineOperations, &[]).await
  }

  /// List an airline's recently arrived flights
  ///
  /// # Arguments
  ///
  /// * `fleet` - ICAO airline code
  /// * `how_many` - Optional result-set cap
  /// * `offset` - Optional paging offset
  #[instrument(skip(self))]
  pub async fn fleet_arrived(
    &self,
    fleet: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<ArrivalList> {
    let mut params = vec![("fleet".to_string(), fleet.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::FleetArrived, &params).await
  }

  /// List an airline's flights scheduled to depart
  #[instrument(skip(self))]
  pub async fn fleet_scheduled(
    &self,
    fleet: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<ScheduledList> {
    let mut params = vec![("fleet".to_string(), fleet.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::FleetScheduled, &params).await
  }
}
