use serde::Deserialize;
use std::fmt;

/// Credentials taken from `/hooks/{id}/{token}/...`, forwarded unmodified.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct WebhookRoute {
    pub id: String,
    pub token: String,
}

impl WebhookRoute {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
        }
    }

    /// `{base}/{id}/{token}` with a single separator.
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}/{}", base.trim_end_matches('/'), self.id, self.token)
    }
}

// The token is a bearer secret for the destination webhook.
impl fmt::Debug for WebhookRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRoute")
            .field("id", &self.id)
            .field("token", &"<REDACTED>")
            .finish()
    }
}

/// Inbound sources, used for routing labels, logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Github,
    Gitlab,
    Deployhq,
    Gitdeploy,
    Gmod,
    Events,
    Testhook,
}

impl Provider {
    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::Github => "github",
            Provider::Gitlab => "gitlab",
            Provider::Deployhq => "deployhq",
            Provider::Gitdeploy => "gitdeploy",
            Provider::Gmod => "gmod",
            Provider::Events => "events",
            Provider::Testhook => "testhook",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        let route = WebhookRoute::new("123", "abc");
        assert_eq!(
            route.url("https://discord.com/api/webhooks"),
            "https://discord.com/api/webhooks/123/abc"
        );
        assert_eq!(route.url("http://localhost:9000/"), "http://localhost:9000/123/abc");
    }

    #[test]
    fn test_debug_redacts_token() {
        let route = WebhookRoute::new("123", "super-secret");
        let printed = format!("{:?}", route);
        assert!(printed.contains("123"));
        assert!(!printed.contains("super-secret"));
    }
}
