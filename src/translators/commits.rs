//! Push summaries shared by the source-control translators.

use crate::constants::commits::{MERGE_MARKERS, PRIVATE_MARKER, PRIVATE_TEXT};
use crate::utils::first_line;

/// Build the description for a push.
///
/// A single-commit push shows the raw message. Larger pushes become one
/// `- subject` bullet per commit with merge commits left out. Messages
/// starting with the private marker are never shown in either form.
pub fn summarize<'a, I>(messages: I, single: bool) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut messages = messages.into_iter();

    if single {
        return match messages.next() {
            Some(message) if is_private(message) => PRIVATE_TEXT.to_string(),
            Some(message) => message.to_string(),
            None => String::new(),
        };
    }

    messages
        .filter(|message| !is_merge(message))
        .map(|message| {
            if is_private(message) {
                format!("- {}", PRIVATE_TEXT)
            } else {
                format!("- {}", first_line(message))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_private(message: &str) -> bool {
    message.starts_with(PRIVATE_MARKER)
}

fn is_merge(message: &str) -> bool {
    MERGE_MARKERS.iter().any(|marker| message.contains(marker))
}
