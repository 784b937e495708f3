//! GitLab events → Discord embeds.

use chrono::{DateTime, Utc};

use super::commits;
use super::lifecycle::{Lifecycle, LifecycleCard, Subject};
use super::{required, TranslateError};
use crate::constants::colors::{Palette, SOURCE_CONTROL};
use crate::constants::commits::SILENT_MARKER;
use crate::constants::icons;
use crate::models::gitlab::{
    IssueEvent, MergeRequestEvent, NoteEvent, PipelineEvent, Project, PushEvent, ReleaseEvent,
    TagPushEvent, User,
};
use crate::models::{DiscordMessage, Embed, EmbedAuthor, EmbedField, EmbedFooter, GitlabEvent};
use crate::utils::short;

const PALETTE: &Palette = &SOURCE_CONTROL;

type Translated = Result<Option<Embed>, TranslateError>;

/// Translate one GitLab delivery.
///
/// Status and action are checked first. A reported event fails when the
/// project, the user or a note's subject is missing from the payload.
pub fn translate(
    event: &GitlabEvent,
    now: DateTime<Utc>,
) -> Result<Option<DiscordMessage>, TranslateError> {
    let embed = match event {
        GitlabEvent::Push(push) => push_embed(push)?,
        GitlabEvent::TagPush(tag) => Some(tag_push_embed(tag)?),
        GitlabEvent::Release(release) => Some(release_embed(release)?),
        GitlabEvent::Pipeline(pipeline) => pipeline_embed(pipeline)?,
        GitlabEvent::MergeRequest(mr) => merge_request_embed(mr)?,
        GitlabEvent::Note(note) => note_embed(note)?,
        GitlabEvent::Issue(issue) => issue_embed(issue)?,
        GitlabEvent::Unsupported => None,
    };

    Ok(embed.map(|embed| DiscordMessage::from_embed(embed.timestamp(now))))
}

fn footer(text: impl Into<String>) -> EmbedFooter {
    EmbedFooter::new(icons::GITLAB, text)
}

fn required_project(project: &Option<Project>) -> Result<&Project, TranslateError> {
    required(project, "project")
}

fn actor<'a>(
    user: &'a Option<User>,
    project: &'a Option<Project>,
) -> Result<(&'a User, &'a Project), TranslateError> {
    Ok((required(user, "user")?, required(project, "project")?))
}

fn push_embed(push: &PushEvent) -> Translated {
    let Some(first) = push.commits.first() else {
        return Ok(None);
    };
    if first.message.starts_with(SILENT_MARKER) {
        return Ok(None);
    }

    let project = required_project(&push.project)?;
    let description = commits::summarize(
        push.commits.iter().map(|commit| commit.message.as_str()),
        push.commit_count() == 1,
    );

    Ok(Some(
        Embed::rich()
            .url(&project.web_url)
            .description(short(&description))
            .author(
                EmbedAuthor::new(&push.user_name)
                    .url(format!("{}/commit/{}", project.web_url, first.id))
                    .icon_url(&push.user_avatar),
            )
            .color(PALETTE.default)
            .footer(footer(format!("{}/{}", project.name, push.branch()))),
    ))
}

fn release_embed(release: &ReleaseEvent) -> Result<Embed, TranslateError> {
    let project = required_project(&release.project)?;
    let mut embed = Embed::rich()
        .url(&project.web_url)
        .author(EmbedAuthor::new(&project.name).url(&release.url))
        .color(PALETTE.default)
        .footer(footer("Release"));

    if !release.description.is_empty() {
        embed = embed.description(short(&release.description));
    }

    Ok(embed)
}

fn pipeline_embed(event: &PipelineEvent) -> Translated {
    let pipeline = &event.object_attributes;
    let (description, color) = match pipeline.status.as_str() {
        "success" => {
            let mut text = String::from("Pipeline event was **successful**");
            if let Some(seconds) = pipeline.duration {
                text.push_str(&format!("\nTook {} seconds.", seconds));
            }
            (text, PALETTE.success)
        }
        "failed" => (
            "Pipeline event has **failed**. Check the logs!".to_string(),
            PALETTE.failure,
        ),
        _ => return Ok(None),
    };

    let (user, project) = actor(&event.user, &event.project)?;
    Ok(Some(
        Embed::rich()
            .url(&project.web_url)
            .description(description)
            .author(
                EmbedAuthor::new(&user.name)
                    .url(format!("{}/pipelines/{}", project.web_url, pipeline.id))
                    .icon_url(&user.avatar_url),
            )
            .color(color)
            .footer(footer(format!("{}/{}", project.name, pipeline.git_ref))),
    ))
}

fn tag_push_embed(event: &TagPushEvent) -> Result<Embed, TranslateError> {
    let project = required_project(&event.project)?;
    Ok(Embed::rich()
        .description(format!("New Tag Release: `{}`", event.tag()))
        .author(EmbedAuthor::new(&event.user_name).url(&project.web_url))
        .color(PALETTE.success)
        .footer(footer(format!("Tag Release | {}", project.name))))
}

fn merge_request_embed(event: &MergeRequestEvent) -> Translated {
    let mr = &event.object_attributes;
    if !matches!(
        mr.action.as_deref(),
        None | Some("open" | "close" | "reopen" | "merge")
    ) {
        return Ok(None);
    }

    let state = match mr.state.as_str() {
        "opened" => Lifecycle::Opened,
        "merged" => Lifecycle::Merged,
        "closed" => Lifecycle::Closed,
        _ => return Ok(None),
    };

    let (user, project) = actor(&event.user, &event.project)?;
    let subject = Subject::Merge {
        noun: "merge request",
        source: &mr.source_branch,
        target: &mr.target_branch,
    };
    let card = LifecycleCard::new(state, &user.name, subject, mr.description.as_deref());

    let embed = Embed::rich()
        .url(&project.web_url)
        .title(&mr.title)
        .author(
            EmbedAuthor::new(&user.name)
                .url(format!("{}/merge_requests/{}", project.web_url, mr.iid))
                .icon_url(&user.avatar_url),
        )
        .footer(footer(format!("{} | Merge Request", project.name)));

    Ok(Some(card.apply(embed, PALETTE)))
}

fn note_embed(event: &NoteEvent) -> Translated {
    let note = &event.object_attributes;

    let (kind, headline) = match note.noteable_type.as_str() {
        "Commit" => ("Commit", required(&event.commit, "commit")?.message.as_str()),
        "MergeRequest" => (
            "Merge Request",
            required(&event.merge_request, "merge_request")?.title.as_str(),
        ),
        "Issue" => ("Issue", required(&event.issue, "issue")?.title.as_str()),
        _ => return Ok(None),
    };

    if note.note.is_empty() {
        return Ok(None);
    }

    let (user, project) = actor(&event.user, &event.project)?;
    let title = format!("{} commented on {} `{}`", user.name, kind, headline);
    Ok(Some(
        Embed::rich()
            .url(&note.url)
            .field(EmbedField::new(short(&title), short(&note.note)))
            .author(
                EmbedAuthor::new(&user.name)
                    .url(&note.url)
                    .icon_url(&user.avatar_url),
            )
            .color(PALETTE.merged)
            .footer(footer(format!("{} | Comment", project.name))),
    ))
}

fn issue_embed(event: &IssueEvent) -> Translated {
    let issue = &event.object_attributes;
    if !matches!(issue.action.as_deref(), Some("open" | "close" | "reopen")) {
        return Ok(None);
    }

    let state = match issue.state.as_str() {
        "opened" => Lifecycle::Opened,
        "closed" => Lifecycle::Closed,
        _ => return Ok(None),
    };

    let (user, project) = actor(&event.user, &event.project)?;
    let subject = Subject::Issue {
        title: &issue.title,
    };
    let card = LifecycleCard::new(state, &user.name, subject, issue.description.as_deref());

    let embed = Embed::rich()
        .url(&project.web_url)
        .author(
            EmbedAuthor::new(&user.name)
                .url(&issue.url)
                .icon_url(&user.avatar_url),
        )
        .footer(footer(format!("{} | Issue", project.name)));

    Ok(Some(card.apply(embed, PALETTE)))
}
