// Event CRUD HTTP routes
//
// Creation and full saves go through the linkage coordinator so the
// customer link stays consistent; plain PATCH is a raw merge-patch for
// fields with no linkage impact. The stream route exposes the store's
// push channel as SSE snapshots.

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
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use utoipa::{IntoParams, ToSchema};

use bellavue_core::{CalendarDay, ContactInfo, Customer, Event, EventPatch, PREDEFINED_ROOMS};

use super::common::{linkage_error, require_admin, store_error, ApiError, ListResponse};
use crate::services::{EventService, LinkageService, SessionService};

/// Request to create an event. When a contact bundle is present the
/// coordinator creates and links a customer; otherwise the event is stored
/// unlinked (internal bookings).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event draft; the id is assigned by the store.
    pub event: Event,
    /// Contact fields for the customer to create alongside the event.
    pub contact: Option<ContactInfo>,
}

/// A created event with its linked customer, if one was created.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Present when a non-fatal follow-up step failed (stale reverse index).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// A saved event plus any non-fatal customer-sync warning.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveEventResponse {
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Query parameters for event listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct EventsQuery {
    /// Case-insensitive substring filter over title, customer, and room.
    pub q: Option<String>,
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
    pub linkage: Arc<LinkageService>,
    pub session: Arc<SessionService>,
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", post(create_event).get(list_events))
        .route(
            "/v1/events/:event_id",
            get(get_event)
                .put(save_event)
                .patch(patch_event)
                .delete(delete_event),
        )
        .route("/v1/events/calendar/:year/:month", get(calendar_month))
        .route("/v1/events/stream", get(stream_events))
        .route("/v1/rooms", get(list_rooms))
        .with_state(state)
}

/// POST /v1/events - Create an event, with or without a new customer
#[utoipa::path(
    post,
    path = "/v1/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponse),
        (status = 400, description = "Validation failure")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let response = match req.contact {
        Some(contact) => {
            let created = state
                .linkage
                .create_event_with_customer(req.event, contact)
                .await
                .map_err(linkage_error)?;
            CreateEventResponse {
                event: created.event,
                customer: Some(created.customer),
                warning: created.warning.map(|w| w.to_string()),
            }
        }
        None => {
            let event = state.events.create(req.event).await.map_err(store_error)?;
            CreateEventResponse {
                event,
                customer: None,
                warning: None,
            }
        }
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/events - List events, date ascending
#[utoipa::path(
    get,
    path = "/v1/events",
    params(EventsQuery),
    responses(
        (status = 200, description = "List of events", body = ListResponse<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state
        .events
        .list(query.q.as_deref())
        .await
        .map_err(store_error)?;
    Ok(Json(ListResponse::new(events)))
}

/// GET /v1/events/{event_id} - Get event by id
#[utoipa::path(
    get,
    path = "/v1/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .events
        .get(&event_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            store_error(bellavue_core::StoreError::NotFound(format!(
                "event {event_id}"
            )))
        })?;
    Ok(Json(event))
}

/// PUT /v1/events/{event_id} - Save a full event and sync contact fields
#[utoipa::path(
    put,
    path = "/v1/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    request_body = Event,
    responses(
        (status = 200, description = "Event saved", body = SaveEventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn save_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(mut event): Json<Event>,
) -> Result<Json<SaveEventResponse>, ApiError> {
    event.id = event_id;
    let saved = state
        .linkage
        .save_event(event)
        .await
        .map_err(linkage_error)?;
    Ok(Json(SaveEventResponse {
        event: saved.event,
        warning: saved.warning.map(|w| w.to_string()),
    }))
}

/// PATCH /v1/events/{event_id} - Merge-patch named fields only
#[utoipa::path(
    patch,
    path = "/v1/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    request_body = EventPatch,
    responses(
        (status = 200, description = "Event patched", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn patch_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    state
        .events
        .update(&event_id, patch)
        .await
        .map_err(store_error)?;
    let event = state
        .events
        .get(&event_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            store_error(bellavue_core::StoreError::NotFound(format!(
                "event {event_id}"
            )))
        })?;
    Ok(Json(event))
}

/// DELETE /v1/events/{event_id} - Delete an event (admin only)
#[utoipa::path(
    delete,
    path = "/v1/events/{event_id}",
    params(("event_id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = DeleteEventResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<DeleteEventResponse>, ApiError> {
    require_admin(&state.session)?;

    let event = state
        .events
        .get(&event_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| {
            store_error(bellavue_core::StoreError::NotFound(format!(
                "event {event_id}"
            )))
        })?;

    let warning = state
        .linkage
        .delete_event(&event)
        .await
        .map_err(linkage_error)?;
    Ok(Json(DeleteEventResponse {
        warning: warning.map(|w| w.to_string()),
    }))
}

/// GET /v1/events/calendar/{year}/{month} - Month view, bucketed per day
#[utoipa::path(
    get,
    path = "/v1/events/calendar/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Calendar year"),
        ("month" = u32, Path, description = "Month 1-12")
    ),
    responses(
        (status = 200, description = "Days of the month with their events", body = ListResponse<CalendarDay>),
        (status = 400, description = "Invalid month")
    ),
    tag = "events"
)]
pub async fn calendar_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<ListResponse<CalendarDay>>, ApiError> {
    let days = state
        .events
        .month(year, month)
        .await
        .map_err(store_error)?;
    Ok(Json(ListResponse::new(days)))
}

/// GET /v1/rooms - The venue's predefined halls, as form suggestions
#[utoipa::path(
    get,
    path = "/v1/rooms",
    responses(
        (status = 200, description = "Predefined rooms", body = ListResponse<String>)
    ),
    tag = "events"
)]
pub async fn list_rooms() -> Json<ListResponse<String>> {
    Json(ListResponse::new(
        PREDEFINED_ROOMS.iter().map(|room| room.to_string()).collect(),
    ))
}

/// GET /v1/events/stream - Collection snapshots as SSE
///
/// Emits the full, date-ordered collection after every write, the same
/// echo semantics the hosted store's listeners have.
#[utoipa::path(
    get,
    path = "/v1/events/stream",
    responses(
        (status = 200, description = "SSE stream of collection snapshots")
    ),
    tag = "events"
)]
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.events.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|snapshot| async move {
        // A lagged receiver just waits for the next snapshot
        let events = snapshot.ok()?;
        let sse = SseEvent::default().json_data(&events).ok()?;
        Some(Ok::<_, Infallible>(sse))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
