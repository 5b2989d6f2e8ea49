//! # fxml-models
//!
//! Serde data models for FlightXML2 API responses.
//!
//! Each operation's payload shape is the remote service's contract; the
//! structs here declare that contract explicitly so the envelope layer can
//! hand a decoded value to callers instead of an untyped JSON object.
//! Field renames follow the wire's lowercase/camelCase names.

pub mod aircraft;
pub mod airlines;
pub mod airports;
pub mod alerts;
pub mod common;
pub mod flights;
pub mod tracks;
pub mod weather;

pub use aircraft::*;
pub use airlines::*;
pub use airports::*;
pub use alerts::*;
pub use common::*;
pub use flights::*;
pub use tracks::*;
pub use weather::*;
