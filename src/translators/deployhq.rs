//! DeployHQ deployment status → Discord embed.

use chrono::{DateTime, Utc};

use super::TranslateError;
use crate::constants::colors::deployhq as colors;
use crate::constants::icons;
use crate::models::{DeployhqPayload, DiscordMessage, Embed, EmbedFooter};

/// Only `completed`, `failed` and `running` are reported. A reported status
/// needs the project for the footer.
pub fn translate(
    payload: &DeployhqPayload,
    now: DateTime<Utc>,
) -> Result<Option<DiscordMessage>, TranslateError> {
    let (description, color) = match payload.status.as_str() {
        "completed" => ("Deployment was **successful**", colors::COMPLETED),
        "failed" => ("Deployment has **failed**. Check the logs!", colors::FAILED),
        "running" => ("Deployment is now running", colors::RUNNING),
        _ => return Ok(None),
    };

    let project = payload
        .project
        .as_ref()
        .ok_or(TranslateError::MissingField("project"))?;

    let embed = Embed::rich()
        .description(description)
        .footer(EmbedFooter::new(icons::DEPLOYHQ, &project.name))
        .color(color)
        .timestamp(now);

    Ok(Some(DiscordMessage::from_embed(embed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(status: &str) -> DeployhqPayload {
        DeployhqPayload::parse(&format!(
            r#"{{"status":"{}","project":{{"name":"Website"}}}}"#,
            status
        ))
        .unwrap()
    }

    #[test]
    fn test_status_table() {
        let cases = [
            ("completed", "Deployment was **successful**", 40_000),
            ("failed", "Deployment has **failed**. Check the logs!", 10_430_000),
            ("running", "Deployment is now running", 226_760),
        ];

        for (status, description, color) in cases {
            let message = translate(&payload(status), Utc::now()).unwrap().unwrap();
            let embed = message.embed().unwrap();
            assert_eq!(embed.description.as_deref(), Some(description));
            assert_eq!(embed.color, Some(color));

            let footer = embed.footer.as_ref().unwrap();
            assert_eq!(footer.text, "Website");
            assert_eq!(footer.icon_url.as_deref(), Some(icons::DEPLOYHQ));
        }
    }

    #[test]
    fn test_other_statuses_ignored() {
        assert!(translate(&payload("pending"), Utc::now()).unwrap().is_none());
        assert!(translate(&payload(""), Utc::now()).unwrap().is_none());

        let bare = DeployhqPayload::parse(r#"{"status":"queued"}"#).unwrap();
        assert!(translate(&bare, Utc::now()).unwrap().is_none());
    }

    #[test]
    fn test_reported_status_without_project_fails() {
        let bare = DeployhqPayload::parse(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(
            translate(&bare, Utc::now()).unwrap_err(),
            TranslateError::MissingField("project")
        );
    }
}
