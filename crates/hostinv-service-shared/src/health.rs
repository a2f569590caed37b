//! Health check handlers for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: ...".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of host records in the store (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts_stored: Option<usize>,
}

impl HealthStatus {
    /// A healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            hosts_stored: None,
        }
    }

    /// A ready status with the current record count.
    pub fn ready(service: &str, version: &str, hosts: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            hosts_stored: Some(hosts),
        }
    }

    /// A not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            hosts_stored: None,
        }
    }
}

/// Liveness probe handler. Succeeds whenever the process is serving; does
/// not touch the store.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler. Ready when the document store answers a listing
/// round-trip for the hosts collection.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match state.store().find_all(state.collection()) {
        Ok(docs) => {
            let status = HealthStatus::ready(service, version, docs.len());
            (StatusCode::OK, Json(status)).into_response()
        }
        Err(err) => {
            let status = HealthStatus::not_ready(service, version, &err.to_string());
            (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("hostinv", "0.1.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "hostinv");
        assert!(status.hosts_stored.is_none());
    }

    #[test]
    fn test_health_status_ready_counts_hosts() {
        let status = HealthStatus::ready("hostinv", "0.1.0", 12);
        assert_eq!(status.hosts_stored, Some(12));
    }

    #[test]
    fn test_health_status_not_ready_carries_reason() {
        let status = HealthStatus::not_ready("hostinv", "0.1.0", "store unreachable");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("store unreachable"));
    }

    #[test]
    fn test_health_status_serialization_skips_empty_count() {
        let json = serde_json::to_string(&HealthStatus::alive("hostinv", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("hosts_stored"));
    }
}
