//! GitHub events → Discord embeds.

use chrono::{DateTime, Utc};

use super::commits;
use super::lifecycle::{Lifecycle, LifecycleCard, Subject};
use super::{required, TranslateError};
use crate::constants::colors::{Palette, SOURCE_CONTROL};
use crate::constants::icons;
use crate::models::github::{
    Account, CheckRunEvent, CreateEvent, IssueCommentEvent, IssuesEvent, PullRequestEvent,
    PushEvent, ReleaseEvent, Repository, ReviewCommentEvent, WorkflowRunEvent,
};
use crate::models::{DiscordMessage, Embed, EmbedAuthor, EmbedField, EmbedFooter, GithubEvent};
use crate::utils::short;

const PALETTE: &Palette = &SOURCE_CONTROL;

type Translated = Result<Option<Embed>, TranslateError>;

/// Translate one GitHub delivery. `Ok(None)` means the event is not reported.
///
/// The action is checked before anything else, so an unreported action never
/// fails. A reported one fails when an object it renders is absent.
pub fn translate(
    event: &GithubEvent,
    now: DateTime<Utc>,
) -> Result<Option<DiscordMessage>, TranslateError> {
    let embed = match event {
        GithubEvent::Push(push) => push_embed(push)?,
        GithubEvent::Release(release) => release_embed(release)?,
        GithubEvent::WorkflowRun(run) => workflow_run_embed(run)?,
        GithubEvent::CheckRun(check) => check_run_embed(check)?,
        GithubEvent::Create(create) => tag_embed(create)?,
        GithubEvent::PullRequest(pr) => pull_request_embed(pr)?,
        GithubEvent::IssueComment(comment) => issue_comment_embed(comment)?,
        GithubEvent::PullRequestReviewComment(comment) => review_comment_embed(comment)?,
        GithubEvent::Issues(issue) => issues_embed(issue)?,
        GithubEvent::Unsupported(_) => None,
    };

    Ok(embed.map(|embed| DiscordMessage::from_embed(embed.timestamp(now))))
}

fn footer(text: impl Into<String>) -> EmbedFooter {
    EmbedFooter::new(icons::GITHUB, text)
}

fn origin<'a>(
    repository: &'a Option<Repository>,
    sender: &'a Option<Account>,
) -> Result<(&'a Repository, &'a Account), TranslateError> {
    Ok((required(repository, "repository")?, required(sender, "sender")?))
}

fn push_embed(push: &PushEvent) -> Translated {
    let Some(first) = push.commits.first() else {
        return Ok(None);
    };
    let (repository, sender) = origin(&push.repository, &push.sender)?;

    let description = commits::summarize(
        push.commits.iter().map(|commit| commit.message.as_str()),
        push.commits.len() == 1,
    );

    Ok(Some(
        Embed::rich()
            .url(&repository.html_url)
            .description(short(&description))
            .author(
                EmbedAuthor::new(&push.pusher.name)
                    .url(&first.url)
                    .icon_url(&sender.avatar_url),
            )
            .color(PALETTE.default)
            .footer(footer(format!("{}/{}", repository.name, push.branch()))),
    ))
}

fn release_embed(event: &ReleaseEvent) -> Translated {
    if event.action != "published" {
        return Ok(None);
    }

    let release = required(&event.release, "release")?;
    let (repository, sender) = origin(&event.repository, &event.sender)?;
    let title = release
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(release.tag_name.as_str());

    let mut embed = Embed::rich()
        .url(&release.html_url)
        .title(title)
        .author(
            EmbedAuthor::new(&repository.full_name)
                .url(&release.html_url)
                .icon_url(&sender.avatar_url),
        )
        .color(PALETTE.default)
        .footer(footer("Release"));

    if let Some(body) = release.body.as_deref().filter(|body| !body.is_empty()) {
        embed = embed.description(short(body));
    }

    Ok(Some(embed))
}

fn workflow_run_embed(event: &WorkflowRunEvent) -> Translated {
    if event.action != "completed" {
        return Ok(None);
    }

    let run = required(&event.workflow_run, "workflow_run")?;
    let (description, color) = match run.conclusion.as_deref() {
        Some("success") => {
            let mut text = format!("Workflow **{}** was **successful**", run.name);
            if let Some(seconds) = run.duration_seconds() {
                text.push_str(&format!("\nTook {} seconds.", seconds));
            }
            (text, PALETTE.success)
        }
        Some("failure") => (
            format!("Workflow **{}** has **failed**. Check the logs!", run.name),
            PALETTE.failure,
        ),
        _ => return Ok(None),
    };
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    Ok(Some(
        Embed::rich()
            .url(&run.html_url)
            .description(description)
            .author(
                EmbedAuthor::new(&sender.login)
                    .url(&run.html_url)
                    .icon_url(&sender.avatar_url),
            )
            .color(color)
            .footer(footer(format!("{}/{}", repository.name, run.head_branch))),
    ))
}

fn check_run_embed(event: &CheckRunEvent) -> Translated {
    if event.action != "completed" {
        return Ok(None);
    }

    let check = required(&event.check_run, "check_run")?;
    let (description, color) = match check.conclusion.as_deref() {
        Some("success") => (
            format!("Check **{}** was **successful**", check.name),
            PALETTE.success,
        ),
        Some("failure") => (
            format!("Check **{}** has **failed**. Check the logs!", check.name),
            PALETTE.failure,
        ),
        _ => return Ok(None),
    };
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    Ok(Some(
        Embed::rich()
            .url(&check.html_url)
            .description(description)
            .author(
                EmbedAuthor::new(&sender.login)
                    .url(&check.html_url)
                    .icon_url(&sender.avatar_url),
            )
            .color(color)
            .footer(footer(format!("{} | Check Run", repository.name))),
    ))
}

fn tag_embed(event: &CreateEvent) -> Translated {
    if event.ref_type != "tag" {
        return Ok(None);
    }

    let (repository, sender) = origin(&event.repository, &event.sender)?;
    Ok(Some(
        Embed::rich()
            .description(format!("New Tag Release: `{}`", event.git_ref))
            .author(
                EmbedAuthor::new(&sender.login)
                    .url(&repository.html_url)
                    .icon_url(&sender.avatar_url),
            )
            .color(PALETTE.success)
            .footer(footer(format!("Tag Release | {}", repository.name))),
    ))
}

fn pull_request_embed(event: &PullRequestEvent) -> Translated {
    if !matches!(event.action.as_str(), "opened" | "reopened" | "closed") {
        return Ok(None);
    }

    let pr = required(&event.pull_request, "pull_request")?;
    let state = match (event.action.as_str(), pr.merged) {
        ("opened", _) => Lifecycle::Opened,
        ("reopened", _) => Lifecycle::Reopened,
        (_, true) => Lifecycle::Merged,
        (_, false) => Lifecycle::Closed,
    };
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    let subject = Subject::Merge {
        noun: "pull request",
        source: &pr.head.name,
        target: &pr.base.name,
    };
    let card = LifecycleCard::new(state, &sender.login, subject, pr.body.as_deref());

    let embed = Embed::rich()
        .url(&pr.html_url)
        .title(&pr.title)
        .author(
            EmbedAuthor::new(&sender.login)
                .url(&pr.html_url)
                .icon_url(&sender.avatar_url),
        )
        .footer(footer(format!("{} | Pull Request", repository.name)));

    Ok(Some(card.apply(embed, PALETTE)))
}

fn issue_comment_embed(event: &IssueCommentEvent) -> Translated {
    if event.action != "created" {
        return Ok(None);
    }

    let issue = required(&event.issue, "issue")?;
    let comment = required(&event.comment, "comment")?;
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    let kind = if issue.is_pull_request() {
        "Pull Request"
    } else {
        "Issue"
    };
    let title = format!("{} commented on {} `{}`", sender.login, kind, issue.title);

    Ok(Some(comment_embed(
        title,
        &comment.body,
        &comment.html_url,
        sender,
        format!("{} | Comment", repository.name),
    )))
}

fn review_comment_embed(event: &ReviewCommentEvent) -> Translated {
    if event.action != "created" {
        return Ok(None);
    }

    let pr = required(&event.pull_request, "pull_request")?;
    let comment = required(&event.comment, "comment")?;
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    let title = format!("{} commented on Pull Request `{}`", sender.login, pr.title);

    Ok(Some(comment_embed(
        title,
        &comment.body,
        &comment.html_url,
        sender,
        format!("{} | Review Comment", repository.name),
    )))
}

fn comment_embed(
    title: String,
    body: &str,
    url: &str,
    sender: &Account,
    footer_text: String,
) -> Embed {
    Embed::rich()
        .url(url)
        .field(EmbedField::new(short(&title), short(body)))
        .author(
            EmbedAuthor::new(&sender.login)
                .url(url)
                .icon_url(&sender.avatar_url),
        )
        .color(PALETTE.merged)
        .footer(footer(footer_text))
}

fn issues_embed(event: &IssuesEvent) -> Translated {
    let state = match event.action.as_str() {
        "opened" => Lifecycle::Opened,
        "reopened" => Lifecycle::Reopened,
        "closed" => Lifecycle::Closed,
        _ => return Ok(None),
    };

    let issue = required(&event.issue, "issue")?;
    let (repository, sender) = origin(&event.repository, &event.sender)?;

    let subject = Subject::Issue {
        title: &issue.title,
    };
    let card = LifecycleCard::new(state, &sender.login, subject, issue.body.as_deref());

    let embed = Embed::rich()
        .url(&issue.html_url)
        .author(
            EmbedAuthor::new(&sender.login)
                .url(&issue.html_url)
                .icon_url(&sender.avatar_url),
        )
        .footer(footer(format!("{} | Issue", repository.name)));

    Ok(Some(card.apply(embed, PALETTE)))
}
