//! Flight search endpoints

use crate::query::SearchQuery;
use crate::transport::Transport;
use fxml_core::{Endpoint, Result};
use fxml_models::flights::InFlightAircraftList;
use fxml_models::tracks::TrackExList;
use std::sync::Arc;
use tracing::instrument;

/// Flight search endpoints
pub struct SearchEndpoints {
  pub(crate) transport: Arc<Transport>,
}

impl SearchEndpoints {
  /// Create a new search endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Search airborne aircraft by simple query
  ///
  /// The query accepts either a pre-built query string or key/value
  /// parameters (or both); parameters serialize as `-key value` pairs
  /// appended after any literal text.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fxml_client::{FlightXmlClient, SearchQuery};
  /// # use fxml_core::Config;
  /// # async fn run() -> fxml_core::Result<()> {
  /// # let client = FlightXmlClient::new(Config::from_env()?)?;
  /// // All airborne Boeing 777s
  /// let query = SearchQuery::new().parameter("type", "B77*").how_many(1);
  /// let aircraft = client.search().search(query).await?;
  ///
  /// // Heavies heading to Los Angeles, as a literal query
  /// let query = SearchQuery::new().query("-destination KLAX -prefix H");
  /// let aircraft = client.search().search(query).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, query))]
  pub async fn search(&self, query: SearchQuery) -> Result<InFlightAircraftList> {
    let params = query.into_params();

    self.transport.call(Endpoint::Search, &params).await
  }

  /// Search airborne aircraft with the full Birdseye query language
  ///
  /// # Arguments
  ///
  /// * `query` - Birdseye expression, for instance "{< alt 100} {> gs 200}"
  /// * `how_many` - Optional result-set cap
  /// * `offset` - Optional paging offset
  #[instrument(skip(self))]
  pub async fn search_birdseye_in_flight(
    &self,
    query: &str,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<InFlightAircraftList> {
    let mut params = vec![("query".to_string(), query.to_string())];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::SearchBirdseyeInFlight, &params).await
  }

  /// Search reported positions with the Birdseye query language
  ///
  /// # Arguments
  ///
  /// * `query` - Birdseye expression over position variables
  /// * `unique_flights` - Return only each flight's most recent position
  /// * `how_many` - Optional result-set cap
  /// * `offset` - Optional paging offset
  #[instrument(skip(self))]
  pub async fn search_birdseye_positions(
    &self,
    query: &str,
    unique_flights: bool,
    how_many: Option<u32>,
    offset: Option<u32>,
  ) -> Result<TrackExList> {
    let mut params = vec![
      ("query".to_string(), query.to_string()),
      ("uniqueFlights".to_string(), unique_flights.to_string()),
    ];
    if let Some(how_many) = how_many {
      params.push(("howMany".to_string(), how_many.to_string()));
    }
    if let Some(offset) = offset {
      params.push(("offset".to_string(), offset.to_string()));
    }

    self.transport.call(Endpoint::SearchBirdseyePositions, &params).await
  }

  /// Count the aircraft matching a simple search query
  #[instrument(skip(self, query))]
  pub async fn search_count(&self, query: SearchQuery) -> Result<i64> {
    let params = query.into_params();

    self.transport.call(Endpoint::SearchCount, &params).await
  }
}
