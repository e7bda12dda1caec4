//! Per-request correlation IDs.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request ID, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A usable request ID from the inbound headers, if a proxy set one.
fn inbound_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(REQUEST_ID_HEADER)?;
    value.to_str().ok().map(str::to_owned)
}

/// Tag the request with an ID and echo it back in the response.
///
/// A proxy-supplied `x-request-id` wins over a freshly minted UUID v4. The
/// ID lands on the active tracing span and the Sentry scope, so the header
/// a user quotes from a failed response leads straight to its log lines.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = inbound_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let echo = HeaderValue::from_str(&request_id).ok();

    let mut response = next.run(request).await;
    if let Some(value) = echo {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
