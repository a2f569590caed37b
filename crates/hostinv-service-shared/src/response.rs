//! Success-response wrapper for JSON:API bodies.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The one media type the service speaks, required of requests and stamped
/// on every response that carries a body.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Serializes its payload as JSON under the JSON:API media type.
///
/// Pair with a [`axum::http::StatusCode`] in a handler return value to pick
/// a status other than 200:
///
/// ```ignore
/// Ok((StatusCode::CREATED, JsonApi(resource)))
/// ```
#[derive(Debug, Clone)]
pub struct JsonApi<T>(pub T);

impl<T: Serialize> IntoResponse for JsonApi<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_API_MEDIA_TYPE),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        value: i32,
    }

    #[test]
    fn test_json_api_sets_media_type() {
        let response = JsonApi(Payload { value: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_API_MEDIA_TYPE
        );
    }

    #[test]
    fn test_status_override_via_tuple() {
        let response = (StatusCode::CREATED, JsonApi(Payload { value: 1 })).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_API_MEDIA_TYPE
        );
    }
}
