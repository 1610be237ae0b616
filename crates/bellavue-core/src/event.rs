// Event domain types
//
// An event is the primary booking record: one booked or tentative use of
// the venue. Serialized camelCase to match the document-store shape.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// The venue's predefined halls. Used as form suggestions; free-text room
/// designations stay allowed.
pub const PREDEFINED_ROOMS: [&str; 3] = ["Event 1", "Event 2", "Restaurant"];

/// Booking lifecycle status.
/// - `planned`: tentative, not yet confirmed by the customer
/// - `confirmed`: booked and confirmed
/// - `cancelled`: called off, kept for the record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Tentative, not yet confirmed by the customer.
    #[default]
    Planned,
    /// Booked and confirmed.
    Confirmed,
    /// Called off, kept for the record.
    Cancelled,
}

impl EventStatus {
    /// German display label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Geplant",
            EventStatus::Confirmed => "Bestätigt",
            EventStatus::Cancelled => "Abgesagt",
        }
    }

    /// Severity color the UI maps the status to.
    pub fn color(&self) -> &'static str {
        match self {
            EventStatus::Confirmed => "success",
            EventStatus::Cancelled => "error",
            EventStatus::Planned => "warning",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Planned => write!(f, "planned"),
            EventStatus::Confirmed => write!(f, "confirmed"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<&str> for EventStatus {
    fn from(s: &str) -> Self {
        match s {
            "confirmed" => EventStatus::Confirmed,
            "cancelled" => EventStatus::Cancelled,
            _ => EventStatus::Planned,
        }
    }
}

/// Service add-ons selectable per event: catering items, decor, music and
/// photography packages. All default to off.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSelections {
    // Seating and table setup
    pub round_tables: bool,
    pub square_tables: bool,
    // Catering
    pub chicken_saute: bool,
    pub beef_goulash: bool,
    pub half_chicken: bool,
    pub rice: bool,
    pub vegetables: bool,
    pub seasonal_salad: bool,
    pub fries_or_potatoes: bool,
    pub antipasti_starters: bool,
    pub nibbles: bool,
    pub fruit_bowl: bool,
    pub baklava_dessert: bool,
    pub fruit_cake_buffet: bool,
    pub cig_koefte_service: bool,
    pub soup_main_course: bool,
    pub cocktail_reception: bool,
    pub tea_coffee_service: bool,
    pub soft_drinks_water: bool,
    pub wedding_cake_tiered: bool,
    pub wedding_cake_flat: bool,
    // Decor and staff
    pub standard_decoration: bool,
    pub service_staff: bool,
    pub column_fireworks: bool,
    pub entrance_fireworks: bool,
    // Music
    pub band_dj: bool,
    pub davul_zurna: bool,
    // Photography and video
    pub video_camera_crane: bool,
    pub photo_shooting_usb: bool,
    pub wedding_story_clip: bool,
    pub photo_album: bool,
}

/// Event - the primary booking record.
///
/// `customer_id` is the single forward link to the booking contact; it stays
/// an empty string until a customer is linked. `customer` is the
/// denormalized display name of that contact. The embedded contact fields
/// exist because some creation paths capture contact data before a customer
/// record is made; the linkage coordinator reconciles them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Opaque id assigned by the store on creation; empty on a draft.
    pub id: String,
    pub title: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Free-text time range, e.g. "18:00 - 02:00".
    pub time: String,
    /// Room or hall designation.
    pub room: String,
    pub status: EventStatus,
    /// Id of the linked customer; empty string while unlinked.
    pub customer_id: String,
    /// Denormalized display name of the linked customer.
    pub customer: String,
    pub description: String,
    pub event_type: String,
    pub guest_count: String,
    // Monetary fields kept as decimal-like strings, as entered by staff.
    pub rental_fee: String,
    pub service_fee: String,
    pub total_price: String,
    pub deposit: String,
    pub remaining_payment: String,
    pub offer_accepted: bool,
    pub customer_signature_date: String,
    pub venue_signature_date: String,
    // Embedded contact fields (redundant capture path, see coordinator)
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub street_and_number: String,
    pub zip_and_city: String,
    pub notes: String,
    pub services: ServiceSelections,
    /// Names of uploaded files attached to the booking.
    pub files: Vec<String>,
    pub comments: Vec<String>,
    pub assigned_staff: Vec<String>,
}

impl Event {
    /// True when any embedded contact field carries a value worth syncing.
    pub fn has_contact_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.company,
            &self.email,
            &self.phone,
            &self.mobile,
            &self.street_and_number,
            &self.zip_and_city,
            &self.notes,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }
}

/// Merge-patch for an event. Only fields set to `Some` are overwritten;
/// everything else is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub status: Option<EventStatus>,
    /// `Some("")` unlinks the event from its customer.
    pub customer_id: Option<String>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub guest_count: Option<String>,
    pub rental_fee: Option<String>,
    pub service_fee: Option<String>,
    pub total_price: Option<String>,
    pub deposit: Option<String>,
    pub remaining_payment: Option<String>,
    pub offer_accepted: Option<bool>,
    pub customer_signature_date: Option<String>,
    pub venue_signature_date: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub street_and_number: Option<String>,
    pub zip_and_city: Option<String>,
    pub notes: Option<String>,
    pub services: Option<ServiceSelections>,
    pub files: Option<Vec<String>>,
    pub comments: Option<Vec<String>>,
    pub assigned_staff: Option<Vec<String>>,
}

impl EventPatch {
    /// Apply the patch to a stored event, overwriting only named fields.
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(room) = self.room {
            event.room = room;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(customer_id) = self.customer_id {
            event.customer_id = customer_id;
        }
        if let Some(customer) = self.customer {
            event.customer = customer;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(guest_count) = self.guest_count {
            event.guest_count = guest_count;
        }
        if let Some(rental_fee) = self.rental_fee {
            event.rental_fee = rental_fee;
        }
        if let Some(service_fee) = self.service_fee {
            event.service_fee = service_fee;
        }
        if let Some(total_price) = self.total_price {
            event.total_price = total_price;
        }
        if let Some(deposit) = self.deposit {
            event.deposit = deposit;
        }
        if let Some(remaining_payment) = self.remaining_payment {
            event.remaining_payment = remaining_payment;
        }
        if let Some(offer_accepted) = self.offer_accepted {
            event.offer_accepted = offer_accepted;
        }
        if let Some(customer_signature_date) = self.customer_signature_date {
            event.customer_signature_date = customer_signature_date;
        }
        if let Some(venue_signature_date) = self.venue_signature_date {
            event.venue_signature_date = venue_signature_date;
        }
        if let Some(first_name) = self.first_name {
            event.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            event.last_name = last_name;
        }
        if let Some(company) = self.company {
            event.company = company;
        }
        if let Some(email) = self.email {
            event.email = email;
        }
        if let Some(phone) = self.phone {
            event.phone = phone;
        }
        if let Some(mobile) = self.mobile {
            event.mobile = mobile;
        }
        if let Some(street_and_number) = self.street_and_number {
            event.street_and_number = street_and_number;
        }
        if let Some(zip_and_city) = self.zip_and_city {
            event.zip_and_city = zip_and_city;
        }
        if let Some(notes) = self.notes {
            event.notes = notes;
        }
        if let Some(services) = self.services {
            event.services = services;
        }
        if let Some(files) = self.files {
            event.files = files;
        }
        if let Some(comments) = self.comments {
            event.comments = comments;
        }
        if let Some(assigned_staff) = self.assigned_staff {
            event.assigned_staff = assigned_staff;
        }
    }
}

impl From<Event> for EventPatch {
    /// Full-document patch: every field named. Used when a form submits the
    /// whole event back.
    fn from(event: Event) -> Self {
        EventPatch {
            title: Some(event.title),
            date: Some(event.date),
            time: Some(event.time),
            room: Some(event.room),
            status: Some(event.status),
            customer_id: Some(event.customer_id),
            customer: Some(event.customer),
            description: Some(event.description),
            event_type: Some(event.event_type),
            guest_count: Some(event.guest_count),
            rental_fee: Some(event.rental_fee),
            service_fee: Some(event.service_fee),
            total_price: Some(event.total_price),
            deposit: Some(event.deposit),
            remaining_payment: Some(event.remaining_payment),
            offer_accepted: Some(event.offer_accepted),
            customer_signature_date: Some(event.customer_signature_date),
            venue_signature_date: Some(event.venue_signature_date),
            first_name: Some(event.first_name),
            last_name: Some(event.last_name),
            company: Some(event.company),
            email: Some(event.email),
            phone: Some(event.phone),
            mobile: Some(event.mobile),
            street_and_number: Some(event.street_and_number),
            zip_and_city: Some(event.zip_and_city),
            notes: Some(event.notes),
            services: Some(event.services),
            files: Some(event.files),
            comments: Some(event.comments),
            assigned_staff: Some(event.assigned_staff),
        }
    }
}
