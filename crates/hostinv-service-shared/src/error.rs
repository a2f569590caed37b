//! JSON:API error envelope and the fixed error catalogue.
//!
//! Every error response the service emits, whatever its cause, is a
//! single-item envelope: `{"errors":[{"id":...,"status":...,"title":...,
//! "detail":...}]}`. The catalogue below is the complete set of errors the
//! pipeline can produce; items are immutable process-wide constants and are
//! referenced by identity everywhere else.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use hostinv_lib::StoreError;

use crate::response::JSON_API_MEDIA_TYPE;

/// One entry of the error catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorItem {
    /// Machine-readable error code.
    pub id: &'static str,
    /// HTTP status carried by the response.
    pub status: u16,
    /// Short summary.
    pub title: &'static str,
    /// Human-readable explanation.
    pub detail: &'static str,
}

/// Wire shape wrapping one or more [`ErrorItem`]s.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorItem>,
}

pub const ERR_BAD_REQUEST: ErrorItem = ErrorItem {
    id: "bad_request",
    status: 400,
    title: "Bad request",
    detail: "Request body is not well-formed. It must be JSON.",
};

pub const ERR_UNAUTHORIZED: ErrorItem = ErrorItem {
    id: "unauthorized",
    status: 401,
    title: "Unauthorized",
    detail: "Access token is invalid.",
};

pub const ERR_NOT_FOUND: ErrorItem = ErrorItem {
    id: "not_found",
    status: 404,
    title: "Not found",
    detail: "Route not found.",
};

pub const ERR_NOT_ACCEPTABLE: ErrorItem = ErrorItem {
    id: "not_acceptable",
    status: 406,
    title: "Not acceptable",
    detail: "Accept header must be the JSON:API media type.",
};

pub const ERR_UNSUPPORTED_MEDIA_TYPE: ErrorItem = ErrorItem {
    id: "unsupported_media_type",
    status: 415,
    title: "Unsupported Media Type",
    detail: "Content-Type header must be the JSON:API media type.",
};

pub const ERR_INTERNAL_SERVER: ErrorItem = ErrorItem {
    id: "internal_server_error",
    status: 500,
    title: "Internal Server Error",
    detail: "Something went wrong.",
};

/// Writing an [`ErrorItem`] finalizes the response: status from the item,
/// JSON:API content type, single-item envelope body. Serializing this fixed
/// shape cannot fail.
impl IntoResponse for ErrorItem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Json(ErrorEnvelope { errors: vec![self] }).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_API_MEDIA_TYPE),
        );
        *response.status_mut() = status;
        response
    }
}

/// The single point where server-side failures become responses.
///
/// Handlers propagate [`StoreError`]s with `?`; converting the failure into
/// a response logs its detail once and emits the fixed
/// [`ERR_INTERNAL_SERVER`] envelope. The client-visible payload never carries
/// the underlying detail, so a missing record and an unreachable backend look
/// identical on the wire.
#[derive(Debug)]
pub struct ApiFailure(StoreError);

impl From<StoreError> for ApiFailure {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        ERR_INTERNAL_SERVER.into_response()
    }
}
