//! Flight alert management endpoints

use crate::query::AlertSpec;
use crate::transport::Transport;
use fxml_core::{Endpoint, Error, Result};
use fxml_models::alerts::AlertListing;
use std::sync::Arc;
use tracing::instrument;

/// Flight alert management endpoints
pub struct AlertEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl AlertEndpoints {
  /// Create a new alert endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List the alerts registered to the account
  #[instrument(skip(self))]
  pub async fn get_alerts(&self) -> Result<AlertListing> {
    self.transport.call(Endpoint::GetAlerts, &[]).await
  }

  /// Register a new alert or modify an existing one
  ///
  /// Returns the alert identifier.
  #[instrument(skip(self, spec))]
  pub async fn set_alert(&self, spec: AlertSpec) -> Result<i64> {
    let params = spec.into_params();

    self.transport.call(Endpoint::SetAlert, &params).await
  }

  /// Delete a registered alert
  ///
  /// An empty identifier is rejected with [`Error::MissingAlertId`]
  /// before any request is issued.
  #[instrument(skip(self))]
  pub async fn delete_alert(&self, alert_id: &str) -> Result<i64> {
    if alert_id.is_empty() {
      return Err(Error::MissingAlertId);
    }

    let params = vec![("alert_id".to_string(), alert_id.to_string())];

    self.transport.call(Endpoint::DeleteAlert, &params).await
  }

  /// Register the delivery address alerts are pushed to
  ///
  /// # Arguments
  ///
  /// * `address` - Delivery URL
  /// * `format_type` - Delivery format, for instance "json/post"
  #[instrument(skip(self))]
  pub async fn register_alert_endpoint(&self, address: &str, format_type: &str) -> Result<i64> {
    let params = vec![
      ("address".to_string(), address.to_string()),
      ("format_type".to_string(), format_type.to_string()),
    ];

    self.transport.call(Endpoint::RegisterAlertEndpoint, &params).await
  }
}
