// Session routes: login, logout, and the current role.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bellavue_core::Role;

use super::common::{ApiError, ErrorResponse};
use crate::services::SessionService;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Current session role: admin, staff, or none.
    pub role: Role,
}

/// App state for auth routes
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionService>,
}

/// Create auth routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/auth/session", get(session))
        .with_state(state)
}

/// POST /v1/auth/login - Match credentials and set the session role
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = SessionResponse),
        (status = 401, description = "Unknown credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    if state.session.login(&req.username, &req.password) {
        Ok(Json(SessionResponse {
            role: state.session.role(),
        }))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("unknown username or password")),
        ))
    }
}

/// POST /v1/auth/logout - Clear the session role
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    responses((status = 200, description = "Logged out", body = SessionResponse)),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    state.session.logout();
    Json(SessionResponse {
        role: state.session.role(),
    })
}

/// GET /v1/auth/session - Read the current role
#[utoipa::path(
    get,
    path = "/v1/auth/session",
    responses((status = 200, description = "Current session", body = SessionResponse)),
    tag = "auth"
)]
pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        role: state.session.role(),
    })
}
