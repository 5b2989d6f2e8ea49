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

//! Flight alert models

use serde::{Deserialize, Serialize};

/// `FlightAlertChannel` — one delivery channel attached to an alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertChannel {
  /// Channel identifier
  pub channel_id: i64,

  /// Channel name, for instance "16" or "e_mail"
  pub channel_name: String,

  /// Notify on departure
  #[serde(default)]
  pub e_departure: bool,

  /// Notify on arrival
  #[serde(default)]
  pub e_arrival: bool,

  /// Notify on diversion
  #[serde(default)]
  pub e_diverted: bool,

  /// Notify on flight plan filing
  #[serde(default)]
  pub e_filed: bool,

  /// Notify on cancellation
  #[serde(default)]
  pub e_cancelled: bool,
}

/// `FlightAlertEntry` — one registered alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
  /// Alert identifier, used by DeleteAlert
  pub alert_id: i64,

  /// Flight identifier the alert watches, empty for any
  pub ident: String,

  /// Origin airport filter, empty for any
  pub origin: String,

  /// Destination airport filter, empty for any
  pub destination: String,

  /// Aircraft type filter, empty for any
  pub aircrafttype: String,

  /// Watch window start, seconds since epoch, `0` for open-ended
  pub date_start: i64,

  /// Watch window end, seconds since epoch, `0` for open-ended
  pub date_end: i64,

  /// Whether the alert is active
  pub enabled: bool,

  /// Delivery channels
  #[serde(default)]
  pub channels: Vec<AlertChannel>,
}

/// `FlightAlertListing` — GetAlerts payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertListing {
  /// Total number of registered alerts
  pub num_alerts: i64,

  /// The alerts
  pub alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alert_listing_decoding() {
    let json = r#"{
      "num_alerts": 1,
      "alerts": [{
        "alert_id": 12345,
        "ident": "N415PW",
        "origin": "",
        "destination": "",
        "aircrafttype": "",
        "date_start": 0,
        "date_end": 0,
        "enabled": true,
        "channels": [{
          "channel_id": 16,
          "channel_name": "e_mail",
          "e_departure": true,
          "e_arrival": true,
          "e_diverted": false,
          "e_filed": false,
          "e_cancelled": false
        }]
      }]
    }"#;
    let listing: AlertListing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.num_alerts, 1);
    let alert = &listing.alerts[0];
    assert_eq!(alert.alert_id, 12345);
    assert!(alert.channels[0].e_arrival);
    assert!(!alert.channels[0].e_cancelled);
  }

  #[test]
  fn test_alert_without_channels() {
    let json = r#"{
      "alert_id": 1,
      "ident": "UAL12",
      "origin": "KSFO",
      "destination": "KLAX",
      "aircrafttype": "",
      "date_start": 0,
      "date_end": 0,
      "enabled": false
    }"#;
    let alert: Alert = serde_json::from_str(json).unwrap();
    assert!(alert.channels.is_empty());
  }
}
