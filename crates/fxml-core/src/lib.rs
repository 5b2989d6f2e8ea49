pub mod config;
pub mod error;

pub use config::{Config, MissingResultPolicy};
pub use error::{Error, Result};

/// The remote operations exposed by the FlightXML2 service.
///
/// Each variant maps one-to-one onto a remote endpoint; the `Display`
/// impl yields the exact name appended to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Aircraft and registration lookups
  AircraftType,
  BlockIdentCheck,
  TailOwner,
  ZipcodeInfo,

  // Airline operations
  AirlineFlightInfo,
  AirlineFlightSchedules,
  AirlineInfo,
  AirlineInsight,
  AllAirlines,
  CountAllEnrouteAirlineOperations,
  FleetArrived,
  FleetScheduled,

  // Airport operations
  AirportInfo,
  AllAirports,
  Arrived,
  Departed,
  Scheduled,
  CountAirportOperations,
  RoutesBetweenAirports,
  RoutesBetweenAirportsEx,

  // Flight lookup and tracking
  FlightInfo,
  FlightInfoEx,
  GetFlightId,
  InFlightInfo,
  InboundFlightInfo,
  DecodeFlightRoute,
  DecodeRoute,
  GetHistoricalTrack,
  GetLastTrack,

  // Search
  Search,
  SearchBirdseyeInFlight,
  SearchBirdseyePositions,
  SearchCount,

  // Alerts
  GetAlerts,
  SetAlert,
  DeleteAlert,
  RegisterAlertEndpoint,

  // Weather
  Metar,
  MetarEx,
  Taf,
  NTaf,

  // Maps and utilities
  MapFlight,
  MapFlightEx,
  LatLongsToDistance,
  LatLongsToHeading,
  SetMaximumResultSize,
}

impl Endpoint {
  /// The name of the envelope field that wraps this operation's payload.
  pub fn result_field(&self) -> String {
    format!("{self}Result")
  }
}

// Implement Display trait for Endpoint
impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Aircraft and registration lookups
      Endpoint::AircraftType => write!(f, "AircraftType"),
      Endpoint::BlockIdentCheck => write!(f, "BlockIdentCheck"),
      Endpoint::TailOwner => write!(f, "TailOwner"),
      Endpoint::ZipcodeInfo => write!(f, "ZipcodeInfo"),

      // Airline operations
      Endpoint::AirlineFlightInfo => write!(f, "AirlineFlightInfo"),
      Endpoint::AirlineFlightSchedules => write!(f, "AirlineFlightSchedules"),
      Endpoint::AirlineInfo => write!(f, "AirlineInfo"),
      Endpoint::AirlineInsight => write!(f, "AirlineInsight"),
      Endpoint::AllAirlines => write!(f, "AllAirlines"),
      Endpoint::CountAllEnrouteAirlineOperations => {
        write!(f, "CountAllEnrouteAirlineOperations")
      }
      Endpoint::FleetArrived => write!(f, "FleetArrived"),
      Endpoint::FleetScheduled => write!(f, "FleetScheduled"),

      // Airport operations
      Endpoint::AirportInfo => write!(f, "AirportInfo"),
      Endpoint::AllAirports => write!(f, "AllAirports"),
      Endpoint::Arrived => write!(f, "Arrived"),
      Endpoint::Departed => write!(f, "Departed"),
      Endpoint::Scheduled => write!(f, "Scheduled"),
      Endpoint::CountAirportOperations => write!(f, "CountAirportOperations"),
      Endpoint::RoutesBetweenAirports => write!(f, "RoutesBetweenAirports"),
      Endpoint::RoutesBetweenAirportsEx => write!(f, "RoutesBetweenAirportsEx"),

      // Flight lookup and tracking
      Endpoint::FlightInfo => write!(f, "FlightInfo"),
      Endpoint::FlightInfoEx => write!(f, "FlightInfoEx"),
      Endpoint::GetFlightId => write!(f, "GetFlightID"),
      Endpoint::InFlightInfo => write!(f, "InFlightInfo"),
      Endpoint::InboundFlightInfo => write!(f, "InboundFlightInfo"),
      Endpoint::DecodeFlightRoute => write!(f, "DecodeFlightRoute"),
      Endpoint::DecodeRoute => write!(f, "DecodeRoute"),
      Endpoint::GetHistoricalTrack => write!(f, "GetHistoricalTrack"),
      Endpoint::GetLastTrack => write!(f, "GetLastTrack"),

      // Search
      Endpoint::Search => write!(f, "Search"),
      Endpoint::SearchBirdseyeInFlight => write!(f, "SearchBirdseyeInFlight"),
      Endpoint::SearchBirdseyePositions => write!(f, "SearchBirdseyePositions"),
      Endpoint::SearchCount => write!(f, "SearchCount"),

      // Alerts
      Endpoint::GetAlerts => write!(f, "GetAlerts"),
      Endpoint::SetAlert => write!(f, "SetAlert"),
      Endpoint::DeleteAlert => write!(f, "DeleteAlert"),
      Endpoint::RegisterAlertEndpoint => write!(f, "RegisterAlertEndpoint"),

      // Weather
      Endpoint::Metar => write!(f, "Metar"),
      Endpoint::MetarEx => write!(f, "MetarEx"),
      Endpoint::Taf => write!(f, "Taf"),
      Endpoint::NTaf => write!(f, "NTaf"),

      // Maps and utilities
      Endpoint::MapFlight => write!(f, "MapFlight"),
      Endpoint::MapFlightEx => write!(f, "MapFlightEx"),
      Endpoint::LatLongsToDistance => write!(f, "LatLongsToDistance"),
      Endpoint::LatLongsToHeading => write!(f, "LatLongsToHeading"),
      Endpoint::SetMaximumResultSize => write!(f, "SetMaximumResultSize"),
    }
  }
}

/// Base URL for the FlightXML2 service
pub const FLIGHTXML_BASE_URL: &str = "http://flightxml.flightaware.com/json/FlightXML2/";

/// Default result-set cap applied by the service
pub const MAX_RECORDS: u32 = 15;

/// Retry budget carried in the configuration surface; the transport
/// performs no retries, so this is never consumed.
pub const MAX_RETRIES: u32 = 3;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoint_wire_names() {
    assert_eq!(Endpoint::AircraftType.to_string(), "AircraftType");
    assert_eq!(Endpoint::GetFlightId.to_string(), "GetFlightID");
    assert_eq!(Endpoint::NTaf.to_string(), "NTaf");
    assert_eq!(
      Endpoint::CountAllEnrouteAirlineOperations.to_string(),
      "CountAllEnrouteAirlineOperations"
    );
  }

  #[test]
  fn endpoint_result_field() {
    assert_eq!(Endpoint::AircraftType.result_field(), "AircraftTypeResult");
    assert_eq!(Endpoint::GetFlightId.result_field(), "GetFlightIDResult");
  }
}
