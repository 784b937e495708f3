//! GitHub webhook payloads.
//!
//! The event name travels in the `X-GitHub-Event` header, so the payload is
//! decoded in two steps: the header picks the variant, then the body is
//! deserialized into that variant's shape. Nested objects are optional here;
//! the translator decides which ones an action needs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::null_as_default;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

/// The account that triggered the event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pusher {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub pusher: Pusher,
    #[serde(default)]
    pub sender: Option<Account>,
}

impl PushEvent {
    /// Branch name without the `refs/heads/` prefix.
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub release: Option<Release>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowRun {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_branch: String,
    #[serde(default)]
    pub run_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl WorkflowRun {
    /// Wall-clock run time in whole seconds, when both ends are known.
    pub fn duration_seconds(&self) -> Option<i64> {
        let started = self.run_started_at?;
        let finished = self.updated_at?;
        let millis = (finished - started).num_milliseconds();
        Some((millis as f64 / 1000.0).round() as i64)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRunEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub workflow_run: Option<WorkflowRun>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRun {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckRunEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub check_run: Option<CheckRun>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ref_type: String,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub merged: bool,
    #[serde(default)]
    pub head: BranchRef,
    #[serde(default)]
    pub base: BranchRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    /// Present when the issue is really a pull request.
    #[serde(default)]
    pub pull_request: Option<Value>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCommentEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssuesEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub sender: Option<Account>,
}

/// A GitHub delivery, discriminated by the `X-GitHub-Event` header.
#[derive(Debug, Clone)]
pub enum GithubEvent {
    Push(PushEvent),
    Release(ReleaseEvent),
    WorkflowRun(WorkflowRunEvent),
    CheckRun(CheckRunEvent),
    Create(CreateEvent),
    PullRequest(PullRequestEvent),
    IssueComment(IssueCommentEvent),
    PullRequestReviewComment(ReviewCommentEvent),
    Issues(IssuesEvent),
    /// Any event this relay does not report on, including a missing header.
    Unsupported(String),
}

impl GithubEvent {
    pub const HEADER: &'static str = "x-github-event";

    pub fn from_parts(event: Option<&str>, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match event.unwrap_or_default() {
            "push" => Self::Push(serde_json::from_value(payload)?),
            "release" => Self::Release(serde_json::from_value(payload)?),
            "workflow_run" => Self::WorkflowRun(serde_json::from_value(payload)?),
            "check_run" => Self::CheckRun(serde_json::from_value(payload)?),
            "create" => Self::Create(serde_json::from_value(payload)?),
            "pull_request" => Self::PullRequest(serde_json::from_value(payload)?),
            "issue_comment" => Self::IssueComment(serde_json::from_value(payload)?),
            "pull_request_review_comment" => {
                Self::PullRequestReviewComment(serde_json::from_value(payload)?)
            }
            "issues" => Self::Issues(serde_json::from_value(payload)?),
            other => Self::Unsupported(other.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Push(_) => "push",
            Self::Release(_) => "release",
            Self::WorkflowRun(_) => "workflow_run",
            Self::CheckRun(_) => "check_run",
            Self::Create(_) => "create",
            Self::PullRequest(_) => "pull_request",
            Self::IssueComment(_) => "issue_comment",
            Self::PullRequestReviewComment(_) => "pull_request_review_comment",
            Self::Issues(_) => "issues",
            Self::Unsupported(name) => name,
        }
    }
}
