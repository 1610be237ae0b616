// Customer CRUD HTTP routes
//
// Deletes go through the linkage coordinator: they are refused while events
// still reference the customer unless `force` is set, which unlinks the
// events first.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    routing::post,
    Json, Router,
};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use utoipa::IntoParams;

use bellavue_core::{Customer, CustomerPatch};

use super::common::{linkage_error, require_admin, store_error, ApiError, ListResponse};
use crate::services::{CustomerService, LinkageService, SessionService};

/// Query parameters for customer listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct CustomersQuery {
    /// Case-insensitive substring filter over name, email, and company.
    pub q: Option<String>,
}

/// Query parameters for customer deletion
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteQuery {
    /// Unlink referencing events instead of refusing the delete.
    #[serde(default)]
    pub force: bool,
}

/// App state for customer routes
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub linkage: Arc<LinkageService>,
    pub session: Arc<SessionService>,
}

/// Create customer routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/customers", post(create_customer).get(list_customers))
        .route(
            "/v1/customers/:customer_id",
            get(get_customer)
                .patch(patch_customer)
                .delete(delete_customer),
        )
        .route("/v1/customers/stream", get(stream_customers))
        .with_state(state)
}

/// POST /v1/customers - Create a customer directly
#[utoipa::path(
    post,
    path = "/v1/customers",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Validation failure")
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(draft): Json<Customer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state
        .customers
        .create(draft)
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /v1/customers - List customers, name ascending
#[utoipa::path(
    get,
    path = "/v1/customers",
    params(CustomersQuery),
    responses(
        (status = 200, description = "List of customers", body = ListResponse<Customer>)
    ),
    tag = "customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomersQuery>,
) -> Result<Json<ListResponse<Customer>>, ApiError> {
    let customers = state
        .customers
        .list(query.q.as_deref())
        .await
        .map_err(store_error)?;
    Ok(Json(ListResponse::new(customers)))
}

/// GET /v1/customers/{customer_id} - Get customer by id
#[utoipa::path(
    get,
    path = "/v1/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found")
    ),
    tag = "customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .customers
        .get(&customer_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            store_error(bellavue_core::StoreError::NotFound(format!(
                "customer {customer_id}"
            )))
        })?;
    Ok(Json(customer))
}

/// PATCH /v1/customers/{customer_id} - Merge-patch named fields only
#[utoipa::path(
    patch,
    path = "/v1/customers/{customer_id}",
    params(("customer_id" = String, Path, description = "Customer id")),
    request_body = CustomerPatch,
    responses(
        (status = 200, description = "Customer patched", body = Customer),
        (status = 404, description = "Customer not found")
    ),
    tag = "customers"
)]
pub async fn patch_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(patch): Json<CustomerPatch>,
) -> Result<Json<Customer>, ApiError> {
    state
        .customers
        .update(&customer_id, patch)
        .await
        .map_err(store_error)?;
    let customer = state
        .customers
        .get(&customer_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            store_error(bellavue_core::StoreError::NotFound(format!(
                "customer {customer_id}"
            )))
        })?;
    Ok(Json(customer))
}

/// DELETE /v1/customers/{customer_id} - Delete a customer (admin only)
///
/// Refused with 409 while events still reference the customer; with
/// `?force=true` the referencing events are unlinked first.
#[utoipa::path(
    delete,
    path = "/v1/customers/{customer_id}",
    params(
        ("customer_id" = String, Path, description = "Customer id"),
        DeleteQuery
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer still has linked events")
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, ApiError> {
    require_admin(&state.session)?;
    state
        .linkage
        .delete_customer(&customer_id, query.force)
        .await
        .map_err(linkage_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/customers/stream - Collection snapshots as SSE
#[utoipa::path(
    get,
    path = "/v1/customers/stream",
    responses(
        (status = 200, description = "SSE stream of collection snapshots")
    ),
    tag = "customers"
)]
pub async fn stream_customers(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.customers.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|snapshot| async move {
        let customers = snapshot.ok()?;
        let sse = SseEvent::default().json_data(&customers).ok()?;
        Some(Ok::<_, Infallible>(sse))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
