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

//! Flight lookup, tracking, and route decoding models

use serde::{Deserialize, Serialize};

/// `FlightInfoStruct` — one flight record from FlightInfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
  /// Flight identifier
  pub ident: String,

  /// Aircraft type identifier
  pub aircrafttype: String,

  /// Filed enroute time, "HH:MM:SS"
  pub filed_ete: String,

  /// Filing time, seconds since epoch
  pub filed_time: i64,

  /// Filed departure, seconds since epoch
  pub filed_departuretime: i64,

  /// Filed airspeed in knots
  pub filed_airspeed_kts: i64,

  /// Filed airspeed as a Mach number, empty when filed in knots
  pub filed_airspeed_mach: String,

  /// Filed altitude, hundreds of feet
  pub filed_altitude: i64,

  /// Filed IFR route
  pub route: String,

  /// Actual departure, seconds since epoch, `0` before takeoff
  pub actualdeparturetime: i64,

  /// Estimated arrival, seconds since epoch
  pub estimatedarrivaltime: i64,

  /// Actual arrival, seconds since epoch, `0` while airborne
  pub actualarrivaltime: i64,

  /// Diversion marker, empty when none
  pub diverted: String,

  /// Origin airport code
  pub origin: String,

  /// Destination airport code
  pub destination: String,

  /// Origin airport display name
  #[serde(rename = "originName")]
  pub origin_name: String,

  /// Origin city
  #[serde(rename = "originCity")]
  pub origin_city: String,

  /// Destination airport display name
  #[serde(rename = "destinationName")]
  pub destination_name: String,

  /// Destination city
  #[serde(rename = "destinationCity")]
  pub destination_city: String,
}

/// `FlightInfoResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfoList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The matching flights, most recent first
  pub flights: Vec<Flight>,
}

/// `FlightExStruct` — FlightInfoEx record carrying the unique FlightAware
/// flight identifier alongside the base flight fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEx {
  /// Unique FlightAware flight identifier
  #[serde(rename = "faFlightID")]
  pub fa_flight_id: String,

  /// The base flight record
  #[serde(flatten)]
  pub flight: Flight,
}

/// `FlightInfoExResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfoExList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The matching flights, most recent first
  pub flights: Vec<FlightEx>,
}

/// `InFlightAircraftStruct` — current state of an airborne aircraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InFlightAircraft {
  /// Unique FlightAware flight identifier
  #[serde(rename = "faFlightID")]
  pub fa_flight_id: String,

  /// Flight identifier
  pub ident: String,

  /// Identifier prefix
  pub prefix: String,

  /// Aircraft type identifier
  #[serde(rename = "type")]
  pub aircraft_type: String,

  /// Identifier suffix
  pub suffix: String,

  /// Origin airport code
  pub origin: String,

  /// Destination airport code
  pub destination: String,

  /// Position staleness marker, "ok" or "timed_out"
  pub timeout: String,

  /// Last position report, seconds since epoch
  pub timestamp: i64,

  /// Departure, seconds since epoch
  #[serde(rename = "departureTime")]
  pub departure_time: i64,

  /// First position report, seconds since epoch
  #[serde(rename = "firstPositionTime")]
  pub first_position_time: i64,

  /// Estimated arrival, seconds since epoch
  #[serde(rename = "arrivalTime")]
  pub arrival_time: i64,

  /// Current longitude, decimal degrees
  pub longitude: f64,

  /// Current latitude, decimal degrees
  pub latitude: f64,

  /// Current groundspeed, knots
  pub groundspeed: i64,

  /// Current altitude, hundreds of feet
  pub altitude: i64,

  /// Current heading, degrees
  pub heading: i64,

  /// Altitude data quality marker
  #[serde(rename = "altitudeStatus")]
  pub altitude_status: String,

  /// Position source, for instance "TP" or "TA"
  #[serde(rename = "updateType")]
  pub update_type: String,

  /// Climb/descent marker
  #[serde(rename = "altitudeChange")]
  pub altitude_change: String,

  /// Filed waypoints as a space-separated lat/lon list
  pub waypoints: String,
}

/// `ArrayOfInFlightAircraftStruct` — Search / SearchBirdseyeInFlight
/// payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InFlightAircraftList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The matching airborne aircraft
  pub aircraft: Vec<InFlightAircraft>,
}

/// One decoded route fix from DecodeRoute or DecodeFlightRoute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFix {
  /// Fix or navaid name
  pub name: String,

  /// Fix kind, for instance "Origin Airport" or "VOR-TAC"
  #[serde(rename = "type")]
  pub fix_type: String,

  /// Latitude in decimal degrees
  pub latitude: f64,

  /// Longitude in decimal degrees
  pub longitude: f64,
}

/// `ArrayOfFlightRouteStruct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteFixList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The decoded fixes in route order
  pub data: Vec<RouteFix>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn flight_json() -> &'static str {
    r#"{
      "ident": "N415PW",
      "aircrafttype": "P28A",
      "filed_ete": "01:06:00",
      "filed_time": 1442008560,
      "filed_departuretime": 1442008560,
      "filed_airspeed_kts": 122,
      "filed_airspeed_mach": "",
      "filed_altitude": 55,
      "route": "SJC V334 SAC SWR",
      "actualdeparturetime": 1442008560,
      "estimatedarrivaltime": 1442012520,
      "actualarrivaltime": 0,
      "diverted": "",
      "origin": "KSQL",
      "destination": "KTRK",
      "originName": "San Carlos",
      "originCity": "San Carlos, CA",
      "destinationName": "Truckee-Tahoe",
      "destinationCity": "Truckee, CA"
    }"#
  }

  #[test]
  fn test_flight_info_list_decoding() {
    let json = format!(r#"{{"next_offset": -1, "flights": [{}]}}"#, flight_json());
    let list: FlightInfoList = serde_json::from_str(&json).unwrap();
    assert_eq!(list.flights[0].ident, "N415PW");
    assert_eq!(list.flights[0].actualarrivaltime, 0);
  }

  #[test]
  fn test_flight_ex_flattening() {
    let json = format!(
      r#"{{"next_offset": -1, "flights": [{{"faFlightID": "N415PW@1442008560", {}}}]}}"#,
      flight_json().trim_start_matches('{').trim_end_matches('}')
    );
    let list: FlightInfoExList = serde_json::from_str(&json).unwrap();
    assert_eq!(list.flights[0].fa_flight_id, "N415PW@1442008560");
    assert_eq!(list.flights[0].flight.origin, "KSQL");
  }

  #[test]
  fn test_route_fix_decoding() {
    let json = r#"{
      "next_offset": -1,
      "data": [
        {"name": "KSQL", "type": "Origin Airport", "latitude": 37.511, "longitude": -122.249},
        {"name": "SAC", "type": "VOR-TAC", "latitude": 38.443, "longitude": -121.551}
      ]
    }"#;
    let list: RouteFixList = serde_json::from_str(json).unwrap();
    assert_eq!(list.data.len(), 2);
    assert_eq!(list.data[1].fix_type, "VOR-TAC");
  }
}
