//! Shared HTTP infrastructure for the hostinv service.
//!
//! This crate provides the request-processing pipeline around the hosts
//! resource:
//!
//! - [`ErrorItem`]/[`ErrorEnvelope`]: the JSON:API error wire format and the
//!   fixed error catalogue
//! - [`ApiFailure`]: the single point where propagated store failures become
//!   `internal_server_error` responses
//! - [`TelemetryLayer`]: per-request logging and HTTP metrics (outermost)
//! - [`RecoverLayer`]: panic containment at the trust boundary
//! - [`CorsLayer`]: origin reflection and OPTIONS short-circuit
//! - [`require_accept`]/[`require_content_type`]: exact-match content
//!   negotiation
//! - [`ApiJson`]: generic request-body materialization
//! - [`JsonApi`]: success responses under the JSON:API media type
//! - [`AppState`]: document-store handle threaded through handlers
//! - [`logging`]/[`metrics`]/[`health`]: operational plumbing
//!
//! # Pipeline order
//!
//! Composition is declared once per route at startup; the required net order
//! outermost to innermost is Telemetry, Recover, Cors, accept guard, then
//! (for create/update) content-type guard and body decode, then the terminal
//! handler. Guards short-circuit with a catalogue error; effects of guards
//! already entered still apply.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fresh in-memory state and a
//! failing-store fixture. Enable the `test-utils` feature to use it from
//! dependent crates.

#![deny(warnings)]

mod body;
mod cors;
mod error;
mod health;
pub mod logging;
pub mod metrics;
mod negotiate;
mod recover;
mod response;
mod state;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use body::ApiJson;
pub use cors::{Cors, CorsLayer};
pub use error::{
    ApiFailure, ErrorEnvelope, ErrorItem, ERR_BAD_REQUEST, ERR_INTERNAL_SERVER, ERR_NOT_ACCEPTABLE,
    ERR_NOT_FOUND, ERR_UNAUTHORIZED, ERR_UNSUPPORTED_MEDIA_TYPE,
};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_host_operation, MetricsConfig, MetricsError,
};
pub use negotiate::{require_accept, require_content_type};
pub use recover::{Recover, RecoverLayer};
pub use response::{JsonApi, JSON_API_MEDIA_TYPE};
pub use state::AppState;
pub use telemetry::{extract_or_generate_request_id, RequestId, Telemetry, TelemetryLayer};
