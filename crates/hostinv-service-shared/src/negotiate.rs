//! Content-negotiation guards.
//!
//! Both guards compare the header against [`JSON_API_MEDIA_TYPE`] with an
//! exact string match. No wildcard, parameter, or charset tolerance: a
//! request sending `application/vnd.api+json; charset=utf-8` is rejected,
//! matching the service's historical wire contract.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ERR_NOT_ACCEPTABLE, ERR_UNSUPPORTED_MEDIA_TYPE};
use crate::response::JSON_API_MEDIA_TYPE;

fn header_is_json_api(req: &Request, name: header::HeaderName) -> bool {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == JSON_API_MEDIA_TYPE)
        .unwrap_or(false)
}

/// Reject requests whose `Accept` header is not exactly the JSON:API media
/// type. Applied to every resource route.
pub async fn require_accept(req: Request, next: Next) -> Response {
    if !header_is_json_api(&req, header::ACCEPT) {
        return ERR_NOT_ACCEPTABLE.into_response();
    }
    next.run(req).await
}

/// Reject requests whose `Content-Type` header is not exactly the JSON:API
/// media type. Applied only to routes that accept a body; it runs before any
/// decode attempt.
pub async fn require_content_type(req: Request, next: Next) -> Response {
    if !header_is_json_api(&req, header::CONTENT_TYPE) {
        return ERR_UNSUPPORTED_MEDIA_TYPE.into_response();
    }
    next.run(req).await
}
