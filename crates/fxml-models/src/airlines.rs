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

//! Airline information, schedule, and insight models

use crate::common::epoch_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `AirlineInfoStruct` — operator details for an airline code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineInfo {
  /// Full airline name
  pub name: String,

  /// Short display name
  pub shortname: String,

  /// Radio callsign
  pub callsign: String,

  /// Headquarters location
  pub location: String,

  /// Country of registration
  pub country: String,

  /// Airline website
  pub url: String,

  /// Contact phone number
  pub phone: String,
}

/// `AirlineFlightInfoStruct` — gate, terminal, and cabin details for a
/// commercial flight; only some carriers publish these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineFlightInfo {
  /// Flight identifier
  pub ident: String,

  /// Codeshare identifiers for the same flight
  #[serde(default)]
  pub codeshares: Vec<String>,

  /// Registered tail number
  pub tailnumber: String,

  /// Departure gate
  pub gate_orig: String,

  /// Arrival gate
  pub gate_dest: String,

  /// Departure terminal
  pub terminal_orig: String,

  /// Arrival terminal
  pub terminal_dest: String,

  /// Baggage claim carousel
  pub bag_claim: String,

  /// Meal service description
  pub meal_service: String,

  /// First-class seat count
  pub seats_cabin_first: i32,

  /// Business-class seat count
  pub seats_cabin_business: i32,

  /// Coach seat count
  pub seats_cabin_coach: i32,
}

/// One scheduled flight from AirlineFlightSchedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSchedule {
  /// Operating flight identifier
  pub ident: String,

  /// Actual identifier when the flight is a codeshare, empty otherwise
  pub actual_ident: String,

  /// Scheduled departure, seconds since epoch
  pub departuretime: i64,

  /// Scheduled arrival, seconds since epoch
  pub arrivaltime: i64,

  /// Origin airport code
  pub origin: String,

  /// Destination airport code
  pub destination: String,

  /// Aircraft type identifier
  pub aircrafttype: String,

  /// Meal service description
  pub meal_service: String,

  /// First-class seat count
  pub seats_cabin_first: i32,

  /// Business-class seat count
  pub seats_cabin_business: i32,

  /// Coach seat count
  pub seats_cabin_coach: i32,
}

impl FlightSchedule {
  /// Scheduled departure as a UTC datetime, `None` when unavailable.
  pub fn departure_datetime(&self) -> Option<DateTime<Utc>> {
    epoch_to_datetime(self.departuretime)
  }

  /// Scheduled arrival as a UTC datetime, `None` when unavailable.
  pub fn arrival_datetime(&self) -> Option<DateTime<Utc>> {
    epoch_to_datetime(self.arrivaltime)
  }
}

/// `ArrayOfAirlineFlightScheduleStruct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightScheduleList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The scheduled flights
  pub data: Vec<FlightSchedule>,
}

/// One row of an AirlineInsight report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineInsightEntry {
  /// Airline or flight identifier the row applies to
  pub ident: String,

  /// Report-specific count (flights, passengers, or cargo weight)
  pub count: i64,

  /// Report-specific percentage, absent for count-only report kinds
  #[serde(default)]
  pub percentage: Option<f64>,
}

/// `ArrayOfAirlineInsightStruct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineInsightList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The report rows
  pub data: Vec<AirlineInsightEntry>,
}

/// One airline's enroute flight count from
/// CountAllEnrouteAirlineOperations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineOperationCount {
  /// ICAO airline code
  pub icao: String,

  /// Airline display name
  pub name: String,

  /// Number of enroute flights
  pub enroute: i64,
}

/// `ArrayOfCountAirlineOperationsStruct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineOperationCounts {
  /// Per-airline counts
  pub data: Vec<AirlineOperationCount>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_airline_info_decoding() {
    let json = r#"{
      "name": "United Airlines",
      "shortname": "United",
      "callsign": "United",
      "location": "Chicago, IL",
      "country": "United States",
      "url": "http://www.united.com",
      "phone": "+1-800-864-8331"
    }"#;
    let info: AirlineInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.callsign, "United");
  }

  #[test]
  fn test_schedule_list_decoding() {
    let json = r#"{
      "next_offset": 1,
      "data": [{
        "ident": "UAL1455",
        "actual_ident": "",
        "departuretime": 1442008560,
        "arrivaltime": 1442012160,
        "origin": "KSJC",
        "destination": "KLAX",
        "aircrafttype": "B739",
        "meal_service": "Business: Snack or brunch",
        "seats_cabin_first": 12,
        "seats_cabin_business": 0,
        "seats_cabin_coach": 138
      }]
    }"#;
    let list: FlightScheduleList = serde_json::from_str(json).unwrap();
    assert_eq!(list.next_offset, 1);
    let flight = &list.data[0];
    assert_eq!(flight.origin, "KSJC");
    assert_eq!(flight.departure_datetime().unwrap().timestamp(), 1442008560);
    assert_eq!(flight.arrival_datetime().unwrap().timestamp() - 1442008560, 3600);
  }

  #[test]
  fn test_insight_entry_without_percentage() {
    let json = r#"{"ident": "SWA", "count": 42}"#;
    let entry: AirlineInsightEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.count, 42);
    assert!(entry.percentage.is_none());
  }
}
