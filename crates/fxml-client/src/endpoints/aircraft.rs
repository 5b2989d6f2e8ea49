//! Aircraft type and registration lookup endpoints

use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use fxml_models::aircraft::*;
use std::sync::Arc;
use tracing::instrument;

/// Aircraft type, registration, and location lookup endpoints
pub struct AircraftEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl AircraftEndpoints {
  /// Create a new aircraft endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Look up manufacturer, model, and description for an aircraft type
  ///
  /// # Arguments
  ///
  /// * `aircraft_type` - Aircraft type identifier, for instance "GALX"
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fxml_client::FlightXmlClient;
  /// # use fxml_core::Config;
  /// # async fn run() -> fxml_core::Result<()> {
  /// # let client = FlightXmlClient::new(Config::from_env()?)?;
  /// let info = client.aircraft().aircraft_type("GALX").await?;
  /// println!("{} {} ({})", info.manufacturer, info.aircraft_type, info.description);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn aircraft_type(&self, aircraft_type: &str) -> Result<AircraftTypeInfo> {
    let params = vec![("type".to_string(), aircraft_type.to_string())];

    self.transport.call(Endpoint::AircraftType, &params).await
  }

  /// Check whether an aircraft identifier is blocked from public tracking
  ///
  /// Returns `1` when the ident is blocked, `0` otherwise.
  #[instrument(skip(self))]
  pub async fn block_ident_check(&self, ident: &str) -> Result<i64> {
    let params = vec![("ident".to_string(), ident.to_string())];

    self.transport.call(Endpoint::BlockIdentCheck, &params).await
  }

  /// Look up the registered owner of a tail number
  ///
  /// # Arguments
  ///
  /// * `ident` - Registration, for instance "N415PW"
  #[instrument(skip(self))]
  pub async fn tail_owner(&self, ident: &str) -> Result<TailOwner> {
    let params = vec![("ident".to_string(), ident.to_string())];

    self.transport.call(Endpoint::TailOwner, &params).await
  }

  /// Look up geographic information for a US zipcode
  #[instrument(skip(self))]
  pub async fn zipcode_info(&self, zipcode: &str) -> Result<ZipcodeInfo> {
    let params = vec![("zipcode".to_string(), zipcode.to_string())];

    self.transport.call(Endpoint::ZipcodeInfo, &params).await
  }
}
