use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hook_relay::startup::build_http_client;
use hook_relay::{build_router, AppState, Config};

fn test_config(server: &MockServer) -> Config {
    Config {
        discord_webhook_base_url: server.uri(),
        deployhq_deploy_base_url: format!("{}/deploy", server.uri()),
        metrics_enabled: false,
        ..Config::default()
    }
}

fn app_with(config: Config) -> Router {
    let client = build_http_client(&config).unwrap();
    build_router(AppState::new(config, client, None))
}

fn app(server: &MockServer) -> Router {
    app_with(test_config(server))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn github_push() -> Value {
    json!({
        "ref": "refs/heads/main",
        "commits": [{
            "id": "abc123",
            "message": "fix bug",
            "url": "https://github.com/acme/relay/commit/abc123"
        }],
        "repository": {
            "name": "relay",
            "full_name": "acme/relay",
            "html_url": "https://github.com/acme/relay"
        },
        "pusher": { "name": "octocat" },
        "sender": { "login": "octocat", "avatar_url": "https://avatars.githubusercontent.com/u/1" }
    })
}

#[tokio::test]
async fn test_github_push_is_relayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/123/secret"))
        .and(body_partial_json(json!({
            "embeds": [{
                "type": "rich",
                "description": "fix bug",
                "color": 226760,
                "footer": { "text": "relay/main" }
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = post_json("/hooks/123/secret/github", github_push());
    request
        .headers_mut()
        .insert("x-github-event", "push".parse().unwrap());

    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_unrecognized_event_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut request = post_json("/hooks/123/secret/github", json!({ "action": "started" }));
    request
        .headers_mut()
        .insert("x-github-event", "star".parse().unwrap());
    let response = app(&server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&server)
        .oneshot(post_json(
            "/hooks/123/secret/gitlab",
            json!({ "object_kind": "wiki_page" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/hooks/123/secret/gitlab")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"object_kind\": "))
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid payload");
}

#[tokio::test]
async fn test_missing_required_object_is_internal_error() {
    let server = MockServer::start().await;

    let mut request = post_json("/hooks/123/secret/github", json!({ "action": "opened" }));
    request
        .headers_mut()
        .insert("x-github-event", "issues".parse().unwrap());
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let request_id = response.headers()["x-request-id"].to_str().unwrap().to_string();
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["request_id"], request_id.as_str());
}

#[tokio::test]
async fn test_unreported_actions_without_objects_are_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    for (event, body) in [
        ("release", json!({ "action": "deleted" })),
        ("push", json!({ "commits": [] })),
    ] {
        let mut request = post_json("/hooks/123/secret/github", body);
        request
            .headers_mut()
            .insert("x-github-event", event.parse().unwrap());
        let response = app(&server).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "github {}", event);
    }

    for body in [
        json!({ "object_kind": "pipeline", "object_attributes": { "status": "running" } }),
        json!({
            "object_kind": "merge_request",
            "object_attributes": { "action": "update", "state": "opened" },
            "project": { "name": "relay" }
        }),
    ] {
        let response = app(&server)
            .oneshot(post_json("/hooks/123/secret/gitlab", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_discord_failure_still_returns_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_json(
            "/hooks/123/secret/gmod",
            json!({ "msg": "server restarting", "ply": "Console", "title": "Sandbox" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unreachable_discord_still_returns_ok() {
    let config = Config {
        discord_webhook_base_url: "http://127.0.0.1:1".to_string(),
        metrics_enabled: false,
        ..Config::default()
    };

    let response = app_with(config)
        .oneshot(post_json(
            "/hooks/123/secret/gmod",
            json!({ "msg": "hello", "ply": "Console", "title": "Sandbox" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_gitlab_merge_request_is_relayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/9/tok"))
        .and(body_partial_json(json!({
            "embeds": [{
                "title": "Add relay",
                "color": 8069775,
                "fields": [{
                    "name": "Jane is looking to merge branch `feature` into `main`",
                    "value": "Adds the relay",
                    "inline": false
                }]
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let payload = json!({
        "object_kind": "merge_request",
        "object_attributes": {
            "iid": 3,
            "title": "Add relay",
            "description": "Adds the relay",
            "state": "opened",
            "action": "open",
            "source_branch": "feature",
            "target_branch": "main"
        },
        "user": { "name": "Jane", "avatar_url": "https://gitlab.com/jane.png" },
        "project": { "name": "relay", "web_url": "https://gitlab.com/acme/relay" }
    });
    let response = app(&server)
        .oneshot(post_json("/hooks/9/tok/gitlab", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_deployhq_form_is_relayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/5/tok"))
        .and(body_partial_json(json!({
            "embeds": [{
                "description": "Deployment was **successful**",
                "color": 40000,
                "footer": { "text": "Website" }
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/hooks/5/tok/deployhq")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "payload=%7B%22status%22%3A%22completed%22%2C%22project%22%3A%7B%22name%22%3A%22Website%22%7D%7D",
        ))
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_deployhq_invalid_payload() {
    let server = MockServer::start().await;

    let response = app(&server)
        .oneshot(post_json(
            "/hooks/5/tok/deployhq",
            json!({ "payload": "not json at all" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid payload");
}

#[tokio::test]
async fn test_deployhq_non_object_payload_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/hooks/5/tok/deployhq")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("payload=%5B%22completed%22%5D"))
        .unwrap();
    let response = app(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid payload");
}

#[tokio::test]
async fn test_event_announcement_mentions_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1/tok"))
        .and(body_partial_json(json!({
            "content": "<@&4242>",
            "embeds": [{ "title": "Event Alert", "color": 0x07cb00 }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_json(
            "/hooks/1/tok/events",
            json!({
                "date": "1h30m",
                "role": "4242",
                "name": "Zombie Night",
                "map": "gm_construct"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_testhook_echoes_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(post_json("/hooks/testhook", json!({ "ping": [1, 2, 3] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "received": true, "body": { "ping": [1, 2, 3] } })
    );
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let response = app(&server)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let server = MockServer::start().await;

    let response = app(&server)
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let config = test_config(&server);
    let client = build_http_client(&config).unwrap();
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    let app = build_router(AppState::new(config, client, Some(handle)));

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn test_body_limit() {
    let server = MockServer::start().await;
    let config = Config {
        body_limit_bytes: 64,
        ..test_config(&server)
    };

    let response = app_with(config)
        .oneshot(post_json(
            "/hooks/1/tok/gmod",
            json!({ "msg": "x".repeat(512) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_unknown_provider_is_not_found() {
    let server = MockServer::start().await;
    let response = app(&server)
        .oneshot(post_json("/hooks/1/tok/bitbucket", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
