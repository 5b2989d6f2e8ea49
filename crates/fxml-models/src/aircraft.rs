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

//! Aircraft type, registration, and location lookup models

use serde::{Deserialize, Serialize};

/// `AircraftTypeStruct` — manufacturer and model information for an
/// aircraft type identifier such as `GALX`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftTypeInfo {
  /// Manufacturer name, for instance "IAI"
  pub manufacturer: String,

  /// Model designation, for instance "Gulfstream G200"
  #[serde(rename = "type")]
  pub aircraft_type: String,

  /// Short description such as "twin-jet"
  pub description: String,
}

/// `TailOwnerStruct` — registered owner of a tail number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailOwner {
  /// Registered owner name
  pub owner: String,

  /// Owner city/state
  pub location: String,

  /// Additional location detail
  pub location2: String,

  /// Owner website, empty when none is on record
  pub website: String,
}

/// `ZipcodeInfoStruct` — geographic information for a US zipcode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipcodeInfo {
  /// City name
  pub city: String,

  /// County name
  pub county: String,

  /// State abbreviation
  pub state: String,

  /// Latitude in decimal degrees
  pub latitude: f64,

  /// Longitude in decimal degrees
  pub longitude: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_aircraft_type_decoding() {
    let json = r#"{
      "manufacturer": "IAI",
      "type": "Gulfstream G200",
      "description": "twin-jet"
    }"#;
    let info: AircraftTypeInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.manufacturer, "IAI");
    assert_eq!(info.aircraft_type, "Gulfstream G200");
    assert_eq!(info.description, "twin-jet");
  }

  #[test]
  fn test_zipcode_decoding() {
    let json = r#"{
      "city": "Santa Cruz",
      "county": "Santa Cruz",
      "state": "CA",
      "latitude": 36.9741,
      "longitude": -122.0308
    }"#;
    let info: ZipcodeInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.state, "CA");
    assert!(info.longitude < 0.0);
  }
}
