//! Garry's Mod server log line → Discord embed.

use chrono::{DateTime, Utc};

use crate::constants::{colors, icons};
use crate::models::{DiscordMessage, Embed, EmbedAuthor, EmbedFooter, GmodPayload};
use crate::utils::short;

/// Always produces a message.
pub fn translate(payload: &GmodPayload, now: DateTime<Utc>) -> DiscordMessage {
    let embed = Embed::rich()
        .description(short(&payload.msg))
        .author(EmbedAuthor::new(&payload.ply))
        .color(colors::GMOD)
        .timestamp(now)
        .footer(EmbedFooter::new(icons::GMOD, &payload.title));

    DiscordMessage::from_embed(embed)
}
