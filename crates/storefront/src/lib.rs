//! Parasol Market storefront library.
//!
//! This crate provides the storefront as a library so the whole
//! application, including its middleware stack, can be driven from
//! integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use state::AppState;

/// Builds the application router with the full middleware stack.
///
/// Layers from the outside in: Sentry request coverage, HTTP tracing,
/// request id propagation, then sessions.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::session::create_session_layer(state.config());

    // The request id middleware records into the span opened here, so the
    // span has to declare the field up front.
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        });

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalog lives in process
/// memory, so there are no dependencies to probe.
async fn health() -> &'static str {
    "ok"
}
