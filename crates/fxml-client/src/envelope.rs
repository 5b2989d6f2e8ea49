//! Response envelope handling
//!
//! A successful FlightXML2 response wraps the payload in a JSON object
//! under a field literally named `"<Method>Result"`. This module holds the
//! generic field extraction and the policy for an absent field.

use fxml_core::{Endpoint, Error, MissingResultPolicy, Result};
use serde_json::Value;

/// Look up the `<Method>Result` field on a parsed envelope.
///
/// A non-object top level (bare number, string, array) yields `None`.
pub fn extract_result(envelope: &Value, endpoint: Endpoint) -> Option<&Value> {
    envelope.as_object().and_then(|obj| obj.get(&endpoint.result_field()))
}

/// Take the payload out of an envelope, applying the configured policy
/// when the expected field is absent.
pub fn unwrap_result(
    mut envelope: Value,
    endpoint: Endpoint,
    policy: MissingResultPolicy,
) -> Result<Value> {
    let field = endpoint.result_field();
    match envelope.as_object_mut().and_then(|obj| obj.remove(&field)) {
        Some(payload) => Ok(payload),
        None => match policy {
            MissingResultPolicy::Lenient => Ok(Value::Null),
            MissingResultPolicy::Strict => Err(Error::MissingResult(field)),
        },
    }
}
