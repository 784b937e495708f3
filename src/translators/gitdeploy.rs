//! GitLab pipeline → DeployHQ deploy request.

use super::TranslateError;
use crate::constants::deploy::NEW_REF;
use crate::models::gitdeploy::DeployTarget;
use crate::models::{DeployRequest, GitdeployPayload};

/// Build the deploy request for a successful pipeline. Any other status
/// yields `None`.
pub fn translate(payload: &GitdeployPayload) -> Result<Option<DeployRequest>, TranslateError> {
    let Some(pipeline) = payload
        .object_attributes
        .as_ref()
        .filter(|pipeline| pipeline.status == "success")
    else {
        return Ok(None);
    };

    let project = payload
        .project
        .as_ref()
        .ok_or(TranslateError::MissingField("project"))?;
    let user = payload
        .user
        .as_ref()
        .ok_or(TranslateError::MissingField("user"))?;

    Ok(Some(DeployRequest {
        payload: DeployTarget {
            new_ref: NEW_REF.to_string(),
            branch: pipeline.git_ref.clone(),
            clone_url: project.web_url.clone(),
            email: user.email.clone(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload(value: Value) -> GitdeployPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_successful_pipeline_triggers_deploy() {
        let request = translate(&payload(json!({
            "object_attributes": { "status": "success", "ref": "main" },
            "project": { "web_url": "https://gitlab.com/acme/site" },
            "user": { "email": "jane@acme.io" }
        })))
        .unwrap()
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "payload": {
                    "new_ref": "latest",
                    "branch": "main",
                    "clone_url": "https://gitlab.com/acme/site",
                    "email": "jane@acme.io"
                }
            })
        );
    }

    #[test]
    fn test_other_statuses_do_nothing() {
        for status in ["failed", "running", "pending", ""] {
            let input = payload(json!({ "object_attributes": { "status": status, "ref": "main" } }));
            assert_eq!(translate(&input).unwrap(), None);
        }
        assert_eq!(translate(&payload(json!({}))).unwrap(), None);
    }

    #[test]
    fn test_success_without_project_fails() {
        let input = payload(json!({
            "object_attributes": { "status": "success", "ref": "main" },
            "user": { "email": "jane@acme.io" }
        }));
        assert_eq!(
            translate(&input).unwrap_err(),
            TranslateError::MissingField("project")
        );
    }
}
