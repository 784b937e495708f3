//! GitLab pipeline payloads that gate a DeployHQ deployment, and the
//! request forwarded when they pass.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub git_ref: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitdeployProject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitdeployUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Only `object_attributes` is inspected unless the pipeline succeeded, so
/// everything is optional at this level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitdeployPayload {
    #[serde(default)]
    pub object_attributes: Option<PipelineStatus>,
    #[serde(default)]
    pub project: Option<GitdeployProject>,
    #[serde(default)]
    pub user: Option<GitdeployUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployRequest {
    pub payload: DeployTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployTarget {
    pub new_ref: String,
    pub branch: String,
    pub clone_url: String,
    pub email: String,
}
