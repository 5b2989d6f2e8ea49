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

//! Weather report and forecast models

use serde::{Deserialize, Serialize};

/// `MetarStruct` — one parsed surface weather report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetarReport {
  /// Reporting airport code
  pub airport: String,

  /// Report time, seconds since epoch
  pub time: i64,

  /// Human-readable cloud summary
  pub cloud_friendly: String,

  /// Cloud base altitude, feet
  pub cloud_altitude: i64,

  /// Cloud coverage code
  pub cloud_type: String,

  /// Weather conditions summary
  pub conditions: String,

  /// Altimeter setting, inches of mercury
  pub pressure: f64,

  /// Air temperature, Celsius
  pub temp_air: i64,

  /// Dewpoint, Celsius
  pub temp_dewpoint: i64,

  /// Relative humidity, percent
  pub temp_relhum: i64,

  /// Visibility, statute miles
  pub visibility: f64,

  /// Human-readable wind summary
  pub wind_friendly: String,

  /// Wind direction, degrees
  pub wind_direction: i64,

  /// Wind speed, knots
  pub wind_speed: i64,

  /// Gust speed, knots, `0` when steady
  pub wind_speed_gust: i64,

  /// The raw METAR text
  pub raw_data: String,
}

/// `ArrayOfMetarStruct` — MetarEx payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetarList {
  /// Offset for fetching the next page, `-1` when exhausted
  pub next_offset: i64,

  /// The reports, most recent first
  pub metar: Vec<MetarReport>,
}

/// `TafStruct` — terminal area forecast, from Taf or NTaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taf {
  /// Forecast airport code
  pub airport: String,

  /// Forecast issue time as reported by the service
  #[serde(rename = "timeString")]
  pub time_string: String,

  /// Forecast lines
  pub forecast: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_metar_list_decoding() {
    let json = r#"{
      "next_offset": 1,
      "metar": [{
        "airport": "KSFO",
        "time": 1442008560,
        "cloud_friendly": "Partly Cloudy",
        "cloud_altitude": 15000,
        "cloud_type": "SCT",
        "conditions": "",
        "pressure": 29.92,
        "temp_air": 18,
        "temp_dewpoint": 12,
        "temp_relhum": 68,
        "visibility": 10.0,
        "wind_friendly": "Windy",
        "wind_direction": 280,
        "wind_speed": 18,
        "wind_speed_gust": 0,
        "raw_data": "KSFO 112056Z 28018KT 10SM SCT150 18/12 A2992"
      }]
    }"#;
    let list: MetarList = serde_json::from_str(json).unwrap();
    let report = &list.metar[0];
    assert_eq!(report.airport, "KSFO");
    assert_eq!(report.wind_speed, 18);
    assert!(report.raw_data.starts_with("KSFO"));
  }

  #[test]
  fn test_taf_decoding() {
    let json = r#"{
      "airport": "KSFO",
      "timeString": "11-Sep-2015 20:56 PDT",
      "forecast": ["FM1200 28010KT P6SM SKC", "FM1800 29015KT P6SM FEW200"]
    }"#;
    let taf: Taf = serde_json::from_str(json).unwrap();
    assert_eq!(taf.forecast.len(), 2);
  }
}
