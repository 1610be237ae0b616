// Backup document: full export/import of both collections as one JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::customer::Customer;
use crate::event::Event;

/// Wholesale snapshot of both collections. Import replaces store state
/// entirely; there is no merge logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub events: Vec<Event>,
    pub customers: Vec<Customer>,
    pub export_date: DateTime<Utc>,
}

impl Backup {
    pub fn new(events: Vec<Event>, customers: Vec<Customer>) -> Self {
        Backup {
            events,
            customers,
            export_date: Utc::now(),
        }
    }
}
