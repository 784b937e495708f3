//! Typed inbound payloads and the outbound message model.
//!
//! Inbound structs are deliberately lenient: leaf values tolerate `null` and
//! absence, while the nested objects a message cannot be built without are
//! required so that a structurally broken payload is rejected as a whole.

pub mod deployhq;
pub mod discord;
pub mod events;
pub mod gitdeploy;
pub mod github;
pub mod gitlab;
pub mod gmod;
pub mod route;

pub use deployhq::DeployhqPayload;
pub use discord::{DiscordMessage, Embed, EmbedAuthor, EmbedField, EmbedFooter};
pub use events::EventAnnouncement;
pub use gitdeploy::{DeployRequest, GitdeployPayload};
pub use github::GithubEvent;
pub use gitlab::GitlabEvent;
pub use gmod::GmodPayload;
pub use route::{Provider, WebhookRoute};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `null` or a missing value as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept strings, numbers and booleans as text; `null` becomes empty.
///
/// Senders that are not webhook platforms (game servers, schedulers) are
/// loose about quoting ids and names.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
