// Bellavue core domain types
//
// Domain entities and pure rules shared by the storage, service, and API
// layers. No I/O lives here.

pub mod backup;
pub mod calendar;
pub mod contact;
pub mod customer;
pub mod error;
pub mod event;
pub mod role;

pub use backup::Backup;
pub use calendar::{month_days, CalendarDay};
pub use contact::{compose_address, compose_display_name, ContactInfo};
pub use customer::{Customer, CustomerPatch, Preferences};
pub use error::{LinkageError, LinkageWarning, StoreError, StoreResult};
pub use event::{Event, EventPatch, EventStatus, ServiceSelections, PREDEFINED_ROOMS};
pub use role::Role;
