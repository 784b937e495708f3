//! Scheduled event announcement → Discord message with a role mention.

use chrono::{DateTime, Utc};

use crate::constants::colors;
use crate::models::{DiscordMessage, Embed, EmbedField, EventAnnouncement};
use crate::utils::{duration_seconds, short};

const NO_DESCRIPTION: &str = "No Description Provided";

/// Unix time the event starts: `now` rounded to the second plus the
/// announced delay.
pub fn start_time(date: &str, now: DateTime<Utc>) -> i64 {
    let now_secs = (now.timestamp_millis() + 500).div_euclid(1000);
    let delay = i64::try_from(duration_seconds(date)).unwrap_or(i64::MAX);
    now_secs.saturating_add(delay)
}

pub fn translate(event: &EventAnnouncement, now: DateTime<Utc>) -> DiscordMessage {
    let at = start_time(&event.date, now);
    let description = if event.description.is_empty() {
        NO_DESCRIPTION
    } else {
        event.description.as_str()
    };

    let embed = Embed::rich()
        .title("Event Alert")
        .description(format!("An event will be starting at <t:{}:t>!", at))
        .color(colors::EVENT_ALERT)
        .field(EmbedField::inline("Event Name", short(&event.name)))
        .field(EmbedField::inline("Event Time", format!("<t:{}:R>", at)))
        .field(EmbedField::inline("Event Map", short(&format!("`{}`", event.map))))
        .field(EmbedField::new("Description", short(description)));

    DiscordMessage::from_embed(embed).with_content(format!("<@&{}>", event.role))
}
