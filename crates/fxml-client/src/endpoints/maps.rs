//! Flight imagery and account utility endpoints

use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use std::sync::Arc;
use tracing::instrument;

/// Flight imagery and account utility endpoints
pub struct MapEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl MapEndpoints {
  /// Create a new map endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Render a flight's current position onto a map image
  ///
  /// Returns the image as base64-encoded PNG data.
  ///
  /// # Arguments
  ///
  /// * `ident` - Flight or tail identifier
  /// * `map_height` - Image height in pixels
  /// * `map_width` - Image width in pixels
  #[instrument(skip(self))]
  pub async fn map_flight(&self, ident: &str, map_height: u32, map_width: u32) -> Result<String> {
    let params = vec![
      ("ident".to_string(), ident.to_string()),
      ("mapHeight".to_string(), map_height.to_string()),
      ("mapWidth".to_string(), map_width.to_string()),
    ];

    self.transport.call(Endpoint::MapFlight, &params).await
  }

  /// Render a specific flight's track onto a map image, with layers
  ///
  /// Returns the image as base64-encoded PNG data.
  #[instrument(skip(self))]
  #[allow(clippy::too_many_arguments)]
  pub async fn map_flight_ex(
    &self,
    fa_flight_id: &str,
    map_height: u32,
    map_width: u32,
    show_data_blocks: bool,
    show_airports: bool,
    airports_expand_view: bool,
  ) -> Result<String> {
    let params = vec![
      ("faFlightID".to_string(), fa_flight_id.to_string()),
      ("mapHeight".to_string(), map_height.to_string()),
      ("mapWidth".to_string(), map_width.to_string()),
      ("show_data_blocks".to_string(), show_data_blocks.to_string()),
      ("show_airports".to_string(), show_airports.to_string()),
      ("airports_expand_view".to_string(), airports_expand_view.to_string()),
    ];

    self.transport.call(Endpoint::MapFlightEx, &params).await
  }

  /// Great-circle distance between two points, statute miles
  #[instrument(skip(self))]
  pub async fn lat_longs_to_distance(
    &self,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
  ) -> Result<i64> {
    let params = lat_long_params(lat1, lon1, lat2, lon2);

    self.transport.call(Endpoint::LatLongsToDistance, &params).await
  }

  /// Initial compass heading from the first point to the second, degrees
  #[instrument(skip(self))]
  pub async fn lat_longs_to_heading(
    &self,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
  ) -> Result<i64> {
    let params = lat_long_params(lat1, lon1, lat2, lon2);

    self.transport.call(Endpoint::LatLongsToHeading, &params).await
  }

  /// Set the account-wide maximum result size
  ///
  /// Returns the accepted maximum.
  #[instrument(skip(self))]
  pub async fn set_maximum_result_size(&self, max_size: u32) -> Result<i64> {
    let params = vec![("max_size".to_string(), max_size.to_string())];

    self.transport.call(Endpoint::SetMaximumResultSize, &params).await
  }
}

fn lat_long_params(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Vec<(String, String)> {
  vec![
    ("lat1".to_string(), lat1.to_string()),
    ("lon1".to_string(), lon1.to_string()),
    ("lat2".to_string(), lat2.to_string()),
    ("lon2".to_string(), lon2.to_string()),
  ]
}
