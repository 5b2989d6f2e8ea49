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

//! Common wrapper types shared across FlightXML2 responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `ArrayOfString` — the plain string-list payload used by AllAirlines
/// and AllAirports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringList {
  /// The returned codes
  pub data: Vec<String>,
}

/// Convert a seconds-since-epoch wire timestamp into a UTC datetime.
///
/// The service uses `0` for "not available"; that maps to `None`.
pub fn epoch_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
  if secs == 0 {
    None
  } else {
    DateTime::from_timestamp(secs, 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_string_list_decoding() {
    let json = r#"{"data": ["AAL", "UAL", "SWA"]}"#;
    let list: StringList = serde_json::from_str(json).unwrap();
    assert_eq!(list.data.len(), 3);
    assert_eq!(list.data[1], "UAL");
  }

  #[test]
  fn test_epoch_conversion() {
    assert!(epoch_to_datetime(0).is_none());
    let dt = epoch_to_datetime(1442008560).unwrap();
    assert_eq!(dt.timestamp(), 1442008560);
  }
}
