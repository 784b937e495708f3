//! Outbound Discord webhook message.
//!
//! Every translator produces a [`DiscordMessage`] carrying at most one rich
//! [`Embed`]. Optional members are omitted from the JSON body entirely, and
//! empty links are dropped because Discord rejects blank URLs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscordMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl DiscordMessage {
    pub fn from_embed(embed: Embed) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The single rich block, if any.
    pub fn embed(&self) -> Option<&Embed> {
        self.embeds.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn rich() -> Self {
        Self {
            kind: "rich".to_string(),
            title: None,
            description: None,
            url: None,
            color: None,
            timestamp: None,
            author: None,
            footer: None,
            fields: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// ISO-8601 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    pub fn author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl EmbedAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            icon_url: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = non_empty(icon_url.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub text: String,
}

impl EmbedFooter {
    pub fn new(icon_url: &str, text: impl Into<String>) -> Self {
        Self {
            icon_url: non_empty(icon_url.to_string()),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_minimal_embed_omits_absent_members() {
        let message = DiscordMessage::from_embed(Embed::rich().description("hello").color(40000));
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "embeds": [{ "type": "rich", "description": "hello", "color": 40000 }]
            })
        );
    }

    #[test]
    fn test_full_embed_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let message = DiscordMessage::from_embed(
            Embed::rich()
                .title("Title")
                .url("https://example.com")
                .timestamp(at)
                .author(EmbedAuthor::new("octocat").url("https://a").icon_url(""))
                .footer(EmbedFooter::new("https://icon", "repo/main"))
                .field(EmbedField::inline("Event Name", "Raid")),
        )
        .with_content("<@&42>");

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["content"], "<@&42>");
        let embed = &value["embeds"][0];
        assert_eq!(embed["timestamp"], "2024-05-01T12:00:00.000Z");
        assert_eq!(embed["author"], json!({ "name": "octocat", "url": "https://a" }));
        assert_eq!(embed["footer"], json!({ "icon_url": "https://icon", "text": "repo/main" }));
        assert_eq!(
            embed["fields"],
            json!([{ "name": "Event Name", "value": "Raid", "inline": true }])
        );
    }

    #[test]
    fn test_empty_url_is_dropped() {
        let embed = Embed::rich().url("");
        assert!(embed.url.is_none());
    }
}
