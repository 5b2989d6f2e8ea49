//! Airport weather and forecast endpoints

use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use fxml_models::weather::*;
use std::sync::Arc;
use tracing::instrument;

/// Airport weather and forecast endpoints
pub struct WeatherEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl WeatherEndpoints {
  /// Create a new weather endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current raw METAR for an airport
  #[instrument(skip(self))]
  pub async fn metar(&self, airport: &str) -> Result<String> {
    let params = vec![("airport".to_string(), airport.to_string())];

    self.transport.call(Endpoint::Metar, &params).await
  }

  /// Get parsed weather reports for an airport
  ///
  /// # Arguments
  ///
  /// * `airport` - Airport code
  /// * `how_many` - Optional report count, most recent first
  /// * `offset` - Optional paging offset
  #[instrument(skip(self))]
  pub async fn metar_ex(
    &self,
    airport: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<MetarList> {
    let mut params = vec![("airport".to_string(), airport.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::MetarEx, &params).await
  }

  /// Get the terminal area forecast for an airport
  #[instrument(skip(self))]
  pub async fn taf(&self, airport: &str) -> Result<Taf> {
    let params = vec![("airport".to_string(), airport.to_string())];

    self.transport.call(Endpoint::Taf, &params).await
  }

  /// Get the terminal area forecast in the newer format
  #[instrument(skip(self))]
  pub async fn ntaf(&self, airport: &str) -> Result<Taf> {
    let params = vec![("airport".to_string(), airport.to_string())];

    self.transport.call(Endpoint::NTaf, &params).await
  }
}
