//! Router configuration.

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::{Request, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::error::handle_panic;
use crate::handlers::{health, hooks};
use crate::middleware::{metrics_middleware, request_logger_middleware};

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let hooks = Router::new()
        .route("/{id}/{token}/github", post(hooks::github))
        .route("/{id}/{token}/gitlab", post(hooks::gitlab))
        .route("/{id}/{token}/deployhq", post(hooks::deployhq))
        .route("/{id}/{token}/gitdeploy", post(hooks::gitdeploy))
        .route("/{id}/{token}/gmod", post(hooks::gmod))
        .route("/{id}/{token}/events", post(hooks::events))
        .route("/testhook", post(hooks::testhook));

    let body_limit = app_state.config.body_limit_bytes;
    let request_timeout = app_state.config.request_timeout();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::prometheus_metrics))
        .nest("/hooks", hooks)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_logger_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    // Spans carry the route pattern; the raw path holds the token.
                    let route = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or("unmatched");
                    tracing::info_span!("http_request", method = %request.method(), route)
                }))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
        .with_state(app_state)
}
