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

//! Airport information, board, and route models

use serde::{Deserialize, Serialize};

/// `AirportInfoStruct` — location details for an airport code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
  /// Airport display name
  pub name: String,

  /// City/state location
  pub location: String,

  /// Latitude in decimal degrees
  pub latitude: f64,

  /// Longitude in decimal degrees
  pub longitude: f64,

  /// Olson timezone identifier, for instance ":America/Los_Angeles"
  pub timezone: String,
}

/// One flight on an airport arrival board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalFlight {
  /// Flight identifier
  pub ident: String,

  /// Aircraft type identifier
  pub aircrafttype: String,

  /// Actual departure, seconds since epoch
  pub actualdeparturetime: i64,

  /// Actual arrival, seconds since epoch
  pub actualarrivaltime: i64,

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

/// `ArrivedResult` / `FleetArrivedResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The arrived flights
  pub arrivals: Vec<ArrivalFlight>,
}

/// One flight on an airport departure board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureFlight {
  /// Flight identifier
  pub ident: String,

  /// Aircraft type identifier
  pub aircrafttype: String,

  /// Actual departure, seconds since epoch
  pub actualdeparturetime: i64,

  /// Estimated arrival, seconds since epoch
  pub estimatedarrivaltime: i64,

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

/// `DepartedResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The departed flights
  pub departures: Vec<DepartureFlight>,
}

/// One flight scheduled to depart, from Scheduled or FleetScheduled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledFlight {
  /// Flight identifier
  pub ident: String,

  /// Aircraft type identifier
  pub aircrafttype: String,

  /// Filed departure, seconds since epoch
  pub filed_departuretime: i64,

  /// Estimated arrival, seconds since epoch
  pub estimatedarrivaltime: i64,

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

/// `ScheduledResult` / `FleetScheduledResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The scheduled flights
  pub scheduled: Vec<ScheduledFlight>,
}

/// `CountAirportOperationsResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportOperationCounts {
  /// Flights enroute to the airport
  pub enroute: i64,

  /// Flights departed and airborne
  pub departed: i64,

  /// Departures scheduled within two hours
  pub scheduled_departures: i64,

  /// Arrivals scheduled within two hours
  pub scheduled_arrivals: i64,
}

/// One IFR route between an airport pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRoute {
  /// Number of flights that filed this route recently
  pub count: i64,

  /// The route string
  pub route: String,

  /// Filed altitude (hundreds of feet) for the most recent flight
  #[serde(rename = "filedAltitude")]
  pub filed_altitude: i64,

  /// Most recent departure using this route, seconds since epoch
  #[serde(rename = "lastDepartureTime")]
  pub last_departure_time: i64,
}

/// `RoutesBetweenAirportsResult` / `RoutesBetweenAirportsExResult` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRouteList {
  /// Offset for fetching the next page, `-1` when exhausted
  #[serde(default = "default_next_offset")]
  pub next_offset: i64,

  /// The routes, most used first
  pub data: Vec<AirportRoute>,
}

// The non-Ex variant has no paging, so the field may be absent.
fn default_next_offset() -> i64 {
  -1
}
