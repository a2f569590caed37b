//! hostinv host inventory HTTP service.
//!
//! Exposes host inventory records as a JSON:API-flavored resource:
//!
//! - `GET /hosts` — list the inventory
//! - `GET /hosts/{id}` — fetch one host
//! - `POST /hosts` — create a host (201, body echoed with assigned id)
//! - `PUT /hosts/{id}` — replace a host (204)
//! - `DELETE /hosts/{id}` — remove a host (204)
//! - `GET /metrics`, `GET /health/live`, `GET /health/ready` — operational
//!
//! Resource routes require `Accept: application/vnd.api+json`; create and
//! update additionally require the same `Content-Type` and a JSON body.

#![deny(warnings)]

use axum::{handler::Handler, middleware, response::IntoResponse, routing::get, Router};

use hostinv_service_shared::{
    health_live, health_ready, metrics_handler, require_accept, require_content_type, AppState,
    CorsLayer, RecoverLayer, TelemetryLayer, ERR_NOT_FOUND,
};

pub mod handlers;

/// Unmatched paths answer with the catalogue's `not_found` envelope.
async fn route_not_found() -> impl IntoResponse {
    ERR_NOT_FOUND
}

/// Build the full request-processing pipeline around the hosts resource.
///
/// Guard order is fixed here at startup and never changes per request.
/// Outermost to innermost: telemetry, recovery boundary, CORS, accept guard,
/// then per-route content-type guard and body decode, then the terminal
/// handler. The operational routes sit outside the accept guard so probes
/// and scrapers need no JSON:API headers.
pub fn router(state: AppState) -> Router {
    let hosts = Router::new()
        .route(
            "/hosts",
            get(handlers::list_hosts)
                .post(handlers::create_host.layer(middleware::from_fn(require_content_type))),
        )
        .route(
            "/hosts/{id}",
            get(handlers::get_host)
                .put(handlers::update_host.layer(middleware::from_fn(require_content_type)))
                .delete(handlers::delete_host),
        )
        .route_layer(middleware::from_fn(require_accept));

    Router::new()
        .merge(hosts)
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .fallback(route_not_found)
        .layer(CorsLayer)
        .layer(RecoverLayer)
        .layer(TelemetryLayer)
        .with_state(state)
}
