//! Open/merge/close classification for pull requests, merge requests and
//! issues.
//!
//! Each translator maps its provider's (action, state) pair onto a
//! [`Lifecycle`]; the summary template and color then come from the tables
//! below, and [`LifecycleCard::apply`] picks the embed layout.

use crate::constants::colors::Palette;
use crate::models::{Embed, EmbedField};
use crate::utils::short;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Opened,
    Reopened,
    Merged,
    Closed,
}

/// What the lifecycle event is about.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    /// A branch merge proposal; `noun` is "pull request" or "merge request".
    Merge {
        noun: &'static str,
        source: &'a str,
        target: &'a str,
    },
    Issue {
        title: &'a str,
    },
}

impl Lifecycle {
    pub fn color(self, palette: &Palette) -> u32 {
        match self {
            Lifecycle::Opened | Lifecycle::Reopened => palette.opened,
            Lifecycle::Merged => palette.merged,
            Lifecycle::Closed => palette.closed,
        }
    }

    /// Only newly opened items carry their body into the message.
    pub fn shows_body(self) -> bool {
        matches!(self, Lifecycle::Opened | Lifecycle::Reopened)
    }

    pub fn summary(self, actor: &str, subject: Subject<'_>) -> String {
        match (subject, self) {
            (Subject::Merge { source, target, .. }, Lifecycle::Opened | Lifecycle::Reopened) => {
                format!("{actor} is looking to merge branch `{source}` into `{target}`")
            }
            (Subject::Merge { source, target, .. }, Lifecycle::Merged) => {
                format!("{actor} has merged branch `{source}` into `{target}`")
            }
            (Subject::Merge { noun, source, target }, Lifecycle::Closed) => {
                format!("{actor} has closed the {noun} for branch `{source}` into `{target}`")
            }
            (Subject::Issue { title }, Lifecycle::Opened) => {
                format!("{actor} has opened an issue `{title}`")
            }
            (Subject::Issue { title }, Lifecycle::Reopened) => {
                format!("{actor} has reopened an issue `{title}`")
            }
            (Subject::Issue { title }, Lifecycle::Merged | Lifecycle::Closed) => {
                format!("{actor} has closed an issue `{title}`")
            }
        }
    }
}

/// A classified lifecycle event ready to be laid out.
#[derive(Debug, Clone)]
pub struct LifecycleCard {
    pub state: Lifecycle,
    pub summary: String,
    pub body: Option<String>,
}

impl LifecycleCard {
    pub fn new(state: Lifecycle, actor: &str, subject: Subject<'_>, body: Option<&str>) -> Self {
        let body = body
            .filter(|text| state.shows_body() && !text.is_empty())
            .map(str::to_string);

        Self {
            state,
            summary: state.summary(actor, subject),
            body,
        }
    }

    /// Field layout when there is a body to show, plain description
    /// otherwise. Sets the state color either way.
    pub fn apply(self, embed: Embed, palette: &Palette) -> Embed {
        let embed = embed.color(self.state.color(palette));
        match self.body {
            Some(body) => embed.field(EmbedField::new(short(&self.summary), short(&body))),
            None => embed.description(short(&self.summary)),
        }
    }
}
