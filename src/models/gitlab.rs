//! GitLab webhook payloads, discriminated by the `object_kind` field.
//!
//! `object_attributes` carries the action and status, so it is required;
//! `user` and `project` are only needed once an event is reported.

use serde::Deserialize;
use serde_json::Value;

use super::{lenient_string, null_as_default};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_avatar: String,
    #[serde(default)]
    pub total_commits_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub project: Option<Project>,
}

impl PushEvent {
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }

    /// GitLab caps `commits` at 20 entries; the count is authoritative.
    pub fn commit_count(&self) -> u64 {
        self.total_commits_count
            .unwrap_or(self.commits.len() as u64)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagPushEvent {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default)]
    pub project: Option<Project>,
}

impl TagPushEvent {
    pub fn tag(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/tags/")
            .unwrap_or(&self.git_ref)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineEvent {
    pub object_attributes: PipelineAttributes,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MergeRequestAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub iid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_branch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_branch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequestEvent {
    pub object_attributes: MergeRequestAttributes,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub noteable_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// The commented-on object; only its headline is reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteSubject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteEvent {
    pub object_attributes: NoteAttributes,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub commit: Option<NoteSubject>,
    #[serde(default)]
    pub merge_request: Option<NoteSubject>,
    #[serde(default)]
    pub issue: Option<NoteSubject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub object_attributes: IssueAttributes,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "object_kind", rename_all = "snake_case")]
pub enum GitlabEvent {
    Push(PushEvent),
    TagPush(TagPushEvent),
    Release(ReleaseEvent),
    Pipeline(PipelineEvent),
    MergeRequest(MergeRequestEvent),
    Note(NoteEvent),
    Issue(IssueEvent),
    #[serde(other)]
    Unsupported,
}

impl GitlabEvent {
    /// Decode a payload; a body without `object_kind` is not an error.
    pub fn from_value(payload: Value) -> Result<Self, serde_json::Error> {
        match payload.get("object_kind") {
            Some(Value::String(_)) => serde_json::from_value(payload),
            _ => Ok(Self::Unsupported),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::TagPush(_) => "tag_push",
            Self::Release(_) => "release",
            Self::Pipeline(_) => "pipeline",
            Self::MergeRequest(_) => "merge_request",
            Self::Note(_) => "note",
            Self::Issue(_) => "issue",
            Self::Unsupported => "unsupported",
        }
    }
}
