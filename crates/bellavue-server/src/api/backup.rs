// Backup routes: full JSON export and confirmed wholesale import.

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use bellavue_core::Backup;

use super::common::{require_admin, store_error, ApiError};
use crate::services::{BackupService, SessionService};

/// Request to restore a backup. Import replaces all data, so the caller
/// must confirm explicitly.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    pub data: Backup,
    #[serde(default)]
    pub confirm: bool,
}

/// App state for backup routes
#[derive(Clone)]
pub struct AppState {
    pub backup: Arc<BackupService>,
    pub session: Arc<SessionService>,
}

/// Create backup routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/backup", get(export))
        .route("/v1/backup/restore", post(restore))
        .with_state(state)
}

/// GET /v1/backup - Export both collections (admin only)
#[utoipa::path(
    get,
    path = "/v1/backup",
    responses(
        (status = 200, description = "Backup document", body = Backup),
        (status = 403, description = "Admin role required")
    ),
    tag = "backup"
)]
pub async fn export(State(state): State<AppState>) -> Result<Json<Backup>, ApiError> {
    require_admin(&state.session)?;
    let backup = state.backup.export().await.map_err(store_error)?;
    Ok(Json(backup))
}

/// POST /v1/backup/restore - Replace all data with a backup (admin only)
#[utoipa::path(
    post,
    path = "/v1/backup/restore",
    request_body = RestoreRequest,
    responses(
        (status = 204, description = "Backup imported"),
        (status = 400, description = "Not confirmed or malformed"),
        (status = 403, description = "Admin role required")
    ),
    tag = "backup"
)]
pub async fn restore(
    State(state): State<AppState>,
    Json(req): Json<RestoreRequest>,
) -> Result<axum::http::StatusCode, ApiError> {
    require_admin(&state.session)?;
    state
        .backup
        .import(req.data, req.confirm)
        .await
        .map_err(store_error)?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
