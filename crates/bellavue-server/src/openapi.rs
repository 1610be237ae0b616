// OpenAPI specification generation
//
// Defines the OpenAPI spec served by Swagger UI.

use crate::api;
use bellavue_core::{
    Backup, CalendarDay, ContactInfo, Customer, CustomerPatch, Event, EventPatch, EventStatus,
    Preferences, Role, ServiceSelections,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Bellavue API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::create_event,
        api::events::list_events,
        api::events::get_event,
        api::events::save_event,
        api::events::patch_event,
        api::events::delete_event,
        api::events::calendar_month,
        api::events::stream_events,
        api::events::list_rooms,
        api::customers::create_customer,
        api::customers::list_customers,
        api::customers::get_customer,
        api::customers::patch_customer,
        api::customers::delete_customer,
        api::customers::stream_customers,
        api::auth::login,
        api::auth::logout,
        api::auth::session,
        api::backup::export,
        api::backup::restore,
    ),
    components(
        schemas(
            Event, EventStatus, EventPatch, ServiceSelections,
            Customer, CustomerPatch, Preferences, ContactInfo,
            CalendarDay, Backup, Role,
            api::events::CreateEventRequest,
            api::events::CreateEventResponse,
            api::events::SaveEventResponse,
            api::events::DeleteEventResponse,
            api::auth::LoginRequest,
            api::auth::SessionResponse,
            api::backup::RestoreRequest,
            api::common::ErrorResponse,
        )
    ),
    tags(
        (name = "events", description = "Event bookings"),
        (name = "customers", description = "Booking contacts"),
        (name = "auth", description = "Session gate"),
        (name = "backup", description = "Export and import"),
    )
)]
pub struct ApiDoc;
