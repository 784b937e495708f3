use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hook_relay::startup::build_http_client;
use hook_relay::{build_router, AppState, Config};

fn app(deploy_base: String) -> Router {
    let config = Config {
        deployhq_deploy_base_url: deploy_base,
        discord_webhook_base_url: "http://127.0.0.1:1".to_string(),
        metrics_enabled: false,
        ..Config::default()
    };
    let client = build_http_client(&config).unwrap();
    build_router(AppState::new(config, client, None))
}

fn pipeline(status: &str) -> Value {
    json!({
        "object_kind": "pipeline",
        "object_attributes": { "id": 77, "status": status, "ref": "production" },
        "project": { "name": "site", "web_url": "https://gitlab.com/acme/site" },
        "user": { "name": "Jane", "email": "jane@acme.io" }
    })
}

fn post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/hooks/7/tok/gitdeploy")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_successful_pipeline_triggers_exactly_one_deploy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/deploy/7/tok"))
        .and(body_json(json!({
            "payload": {
                "new_ref": "latest",
                "branch": "production",
                "clone_url": "https://gitlab.com/acme/site",
                "email": "jane@acme.io"
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(format!("{}/deploy", server.uri()))
        .oneshot(post(pipeline("success")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_other_statuses_trigger_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for status in ["failed", "running", "canceled"] {
        let response = app(format!("{}/deploy", server.uri()))
            .oneshot(post(pipeline(status)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app(format!("{}/deploy", server.uri()))
        .oneshot(post(json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_success_without_project_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = app(format!("{}/deploy", server.uri()))
        .oneshot(post(json!({
            "object_attributes": { "status": "success", "ref": "main" },
            "user": { "email": "jane@acme.io" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_deploy_endpoint_down_still_returns_ok() {
    let response = app("http://127.0.0.1:1/deploy".to_string())
        .oneshot(post(pipeline("success")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
