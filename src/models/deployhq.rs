//! DeployHQ deployment notifications.
//!
//! DeployHQ posts a form (or JSON) body with a single `payload` field whose
//! value is itself a JSON document.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use super::null_as_default;

/// Outer body: `payload=<json>`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployhqEnvelope {
    pub payload: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployhqProject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeployhqPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub project: Option<DeployhqProject>,
}

impl DeployhqPayload {
    /// Parse the inner document, which must be a JSON object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(raw)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom("payload is not a JSON object")),
        }
    }
}
