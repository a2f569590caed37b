//! Terminal handlers for the hosts resource.
//!
//! Each handler reads what earlier pipeline stages attached (decoded body,
//! path-extracted identifier), invokes exactly one repository operation, and
//! shapes the response. Store failures are not handled here: they propagate
//! with `?` into [`ApiFailure`], which converts every one of them into the
//! fixed `internal_server_error` envelope at a single point.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use hostinv_lib::{DocumentId, HostCollection, HostResource};
use hostinv_service_shared::{record_host_operation, ApiFailure, ApiJson, AppState, JsonApi};

/// `GET /hosts` — the full inventory, `{"data":[]}` when empty.
pub async fn list_hosts(
    State(state): State<AppState>,
) -> Result<JsonApi<HostCollection>, ApiFailure> {
    let hosts = state.host_repo().all()?;
    record_host_operation("list");
    Ok(JsonApi(hosts))
}

/// `GET /hosts/{id}` — one host by identifier.
pub async fn get_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<JsonApi<HostResource>, ApiFailure> {
    let host = state.host_repo().find(&id)?;
    record_host_operation("get");
    Ok(JsonApi(host))
}

/// `POST /hosts` — persist a new host; 201 with the stored resource,
/// including its server-assigned identifier and timestamps.
pub async fn create_host(
    State(state): State<AppState>,
    ApiJson(mut body): ApiJson<HostResource>,
) -> Result<(StatusCode, JsonApi<HostResource>), ApiFailure> {
    state.host_repo().create(&mut body.data)?;
    record_host_operation("create");
    Ok((StatusCode::CREATED, JsonApi(body)))
}

/// `PUT /hosts/{id}` — replace an existing host; 204 on success. The
/// path identifier always wins over any identifier in the body.
pub async fn update_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(mut body): ApiJson<HostResource>,
) -> Result<StatusCode, ApiFailure> {
    body.data.id = Some(DocumentId::parse(&id)?);
    state.host_repo().update(&mut body.data)?;
    record_host_operation("update");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /hosts/{id}` — remove a host; 204 on success.
pub async fn delete_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiFailure> {
    state.host_repo().delete(&id)?;
    record_host_operation("delete");
    Ok(StatusCode::NO_CONTENT)
}
