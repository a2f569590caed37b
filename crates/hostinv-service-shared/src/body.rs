//! Generic request-body decoder.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{ErrorItem, ERR_BAD_REQUEST};

/// Materializes a typed value from the request body.
///
/// One extractor works for any JSON-decodable shape; the target type is a
/// compile-time parameter, so the pipeline never inspects types at runtime.
/// An unreadable or syntactically invalid body rejects with the
/// `bad_request` envelope before the handler runs, and the decoded value
/// reaches the handler as an ordinary argument:
///
/// ```ignore
/// async fn create_host(ApiJson(body): ApiJson<HostResource>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorItem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ERR_BAD_REQUEST)?;
        let value = serde_json::from_slice(&bytes).map_err(|_| ERR_BAD_REQUEST)?;
        Ok(Self(value))
    }
}
