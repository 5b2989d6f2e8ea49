//! # fxml-client
//!
//! A FlightXML2 API client for Rust.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio for high performance
//! - **Challenge Auth**: Credentials sent only when the service asks
//! - **Type Safe**: Strongly typed responses using fxml-models
//! - **Configurable**: Environment-based configuration via fxml-core
//! - **Comprehensive**: Supports all FlightXML2 endpoints
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fxml_client::FlightXmlClient;
//! use fxml_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FlightXmlClient::new(config)?;
//!
//!     // Look up an aircraft type
//!     let info = client.aircraft().aircraft_type("GALX").await?;
//!     println!("{} {}", info.manufacturer, info.aircraft_type);
//!
//!     // Recent flights for an ident
//!     let flights = client.flights().flight_info("N415PW", Some(5)).await?;
//!     println!("{} flights", flights.flights.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! FlightXML2 uses HTTP Basic auth behind a challenge: the first request
//! goes out bare and the credential pair is attached only after the
//! service answers 401. An unset or half-set pair never answers the
//! challenge, so the service's own 401 surfaces to the caller.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fxml_core::Error>` for consistent error
//! handling across the entire fxml-* ecosystem.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod query;
pub mod transport;

// Re-export the main client and common types
pub use client::FlightXmlClient;
pub use fxml_core::{Config, Endpoint, Error, MissingResultPolicy, Result};
pub use fxml_models::*;
pub use query::{AirlineInsightQuery, AlertSpec, FlightScheduleQuery, ReportType, SearchQuery};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
    aircraft::AircraftEndpoints,
    airlines::AirlineEndpoints,
    airports::AirportEndpoints,
    alerts::AlertEndpoints,
    flights::FlightEndpoints,
    maps::MapEndpoints,
    search::SearchEndpoints,
    weather::WeatherEndpoints,
};
