// Services layer
// Services own business logic and validation, calling storage directly

pub mod backup;
pub mod customer;
pub mod event;
pub mod linkage;
pub mod session;

pub use backup::BackupService;
pub use customer::CustomerService;
pub use event::EventService;
pub use linkage::{CreatedBooking, LinkageService, SavedEvent};
pub use session::{Credentials, SessionService};
