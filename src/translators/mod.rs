//! Per-provider payload translation.
//!
//! Translators are pure: they take a decoded payload and the current time
//! and return the outbound message, or `None` when the event is not one the
//! relay reports. No translator performs I/O.

pub mod commits;
pub mod deployhq;
pub mod events;
pub mod gitdeploy;
pub mod github;
pub mod gitlab;
pub mod gmod;
pub mod lifecycle;
pub mod testhook;

use thiserror::Error;

/// A recognized event that cannot be rendered because a part it depends on
/// is missing from the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("payload is missing `{0}`")]
    MissingField(&'static str),
}

/// Borrow a payload object the reported event cannot be rendered without.
pub(crate) fn required<'a, T>(
    value: &'a Option<T>,
    field: &'static str,
) -> Result<&'a T, TranslateError> {
    value.as_ref().ok_or(TranslateError::MissingField(field))
}
