use serde::Deserialize;

use super::lenient_string;

/// A log line relayed by the Garry's Mod server addon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GmodPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub msg: String,
    /// Player name
    #[serde(default, deserialize_with = "lenient_string")]
    pub ply: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
}
