use serde::Deserialize;

use super::lenient_string;

/// A scheduled in-game event announcement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventAnnouncement {
    /// Time until the event starts, e.g. `1h30m`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Discord role id to mention.
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub map: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}
