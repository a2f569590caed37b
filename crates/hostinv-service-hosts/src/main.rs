//! hostinv host inventory HTTP microservice.
//!
//! Serves host inventory records over a JSON:API-flavored REST interface.
//!
//! # Endpoints
//!
//! - `GET /hosts` - List all hosts
//! - `GET /hosts/{id}` - Fetch one host
//! - `POST /hosts` - Create a host
//! - `PUT /hosts/{id}` - Replace a host
//! - `DELETE /hosts/{id}` - Remove a host
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `HOSTS_COLLECTION` - Store collection name (default: hosts)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use hostinv_lib::MemoryStore;
use hostinv_service_shared::{init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig};

use hostinv_service_hosts::router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("hosts");
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let collection = env::var("HOSTS_COLLECTION").unwrap_or_else(|_| "hosts".to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(collection = %collection, port = port, "starting hosts service");

    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store, &collection);

    // Build the router
    let app = router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
