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

//! Position track models for historical and live flight paths

use serde::{Deserialize, Serialize};

/// `TrackStruct` — one reported position along a flight path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
  /// Report time, seconds since epoch
  pub timestamp: i64,

  /// Latitude in decimal degrees
  pub latitude: f64,

  /// Longitude in decimal degrees
  pub longitude: f64,

  /// Groundspeed in knots
  pub groundspeed: i64,

  /// Altitude, hundreds of feet
  pub altitude: i64,

  /// Altitude data quality marker
  #[serde(rename = "altitudeStatus")]
  pub altitude_status: String,

  /// Position source, for instance "TP" or "TA"
  #[serde(rename = "updateType")]
  pub update_type: String,

  /// Climb/descent marker
  #[serde(rename = "altitudeChange")]
  pub altitude_change: String,
}

/// `ArrayOfTrackStruct` — GetHistoricalTrack / GetLastTrack payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackList {
  /// The reported positions in time order
  pub data: Vec<TrackPoint>,
}

/// `TrackExStruct` — a position report tagged with its flight identifier,
/// returned by SearchBirdseyePositions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPointEx {
  /// Unique FlightAware flight identifier
  #[serde(rename = "faFlightID")]
  pub fa_flight_id: String,

  /// The position report
  #[serde(flatten)]
  pub point: TrackPoint,
}

/// `ArrayOfTrackExStruct` — SearchBirdseyePositions payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackExList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The matching position reports
  pub data: Vec<TrackPointEx>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_track_list_decoding() {
    let json = r#"{
      "data": [{
        "timestamp": 1442008613,
        "latitude": 37.46,
        "longitude": -122.24,
        "groundspeed": 85,
        "altitude": 14,
        "altitudeStatus": "",
        "updateType": "TA",
        "altitudeChange": "C"
      }]
    }"#;
    let list: TrackList = serde_json::from_str(json).unwrap();
    assert_eq!(list.data[0].groundspeed, 85);
    assert_eq!(list.data[0].altitude_change, "C");
  }

  #[test]
  fn test_track_ex_flattening() {
    let json = r#"{
      "next_offset": -1,
      "data": [{
        "faFlightID": "N415PW-1442008613-adhoc-0",
        "timestamp": 1442008613,
        "latitude": 37.46,
        "longitude": -122.24,
        "groundspeed": 85,
        "altitude": 14,
        "altitudeStatus": "",
        "updateType": "TA",
        "altitudeChange": ""
      }]
    }"#;
    let list: TrackExList = serde_json::from_str(json).unwrap();
    assert_eq!(list.data[0].fa_flight_id, "N415PW-1442008613-adhoc-0");
    assert_eq!(list.data[0].point.timestamp, 1442008613);
  }
}
