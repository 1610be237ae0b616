// Bellavue server library
// Decision: router assembly lives here so the binary and the integration
// tests build the identical application.

pub mod api;
pub mod config;
pub mod openapi;
pub mod services;
pub mod storage;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::ServerConfig;
use services::{
    BackupService, CustomerService, EventService, LinkageService, SessionService,
};
use storage::{CustomerRepository, EventRepository, InMemoryStore};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router over the given store.
pub fn build_app(store: Arc<InMemoryStore>, config: &ServerConfig) -> Router {
    let events: Arc<dyn EventRepository> = store.clone();
    let customers: Arc<dyn CustomerRepository> = store;

    let session = Arc::new(SessionService::new(
        config.admin.clone(),
        config.staff.clone(),
    ));
    let event_service = Arc::new(EventService::new(events.clone()));
    let customer_service = Arc::new(CustomerService::new(customers.clone(), events.clone()));
    let linkage = Arc::new(LinkageService::new(events.clone(), customers.clone()));
    let backup = Arc::new(BackupService::new(events, customers));

    let api_routes = Router::new()
        .merge(api::events::routes(api::events::AppState {
            events: event_service,
            linkage: linkage.clone(),
            session: session.clone(),
        }))
        .merge(api::customers::routes(api::customers::AppState {
            customers: customer_service,
            linkage,
            session: session.clone(),
        }))
        .merge(api::auth::routes(api::auth::AppState {
            session: session.clone(),
        }))
        .merge(api::backup::routes(api::backup::AppState {
            backup,
            session,
        }));

    let cors = match config
        .cors_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-doc/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
