// Event service: validation and CRUD over the events collection, plus the
// calendar month view and list search.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::broadcast;

use bellavue_core::{month_days, CalendarDay, Event, EventPatch, StoreError, StoreResult};

use crate::storage::EventRepository;

pub struct EventService {
    events: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    fn validate_date(date: &str) -> StoreResult<()> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| StoreError::Validation(format!("invalid event date: {date:?}")))
    }

    /// Create an event directly, without going through the coordinator.
    /// Used for internal bookings that have no customer attached.
    pub async fn create(&self, draft: Event) -> StoreResult<Event> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::Validation("event title is required".into()));
        }
        Self::validate_date(&draft.date)?;
        self.events.create(draft).await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Event>> {
        self.events.get_by_id(id).await
    }

    /// Date-ascending snapshot, optionally filtered by a case-insensitive
    /// substring over title, customer name, and room.
    pub async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Event>> {
        let events = self.events.list().await?;
        Ok(match search {
            Some(query) if !query.trim().is_empty() => {
                let pattern = query.trim().to_lowercase();
                events
                    .into_iter()
                    .filter(|e| {
                        e.title.to_lowercase().contains(&pattern)
                            || e.customer.to_lowercase().contains(&pattern)
                            || e.room.to_lowercase().contains(&pattern)
                    })
                    .collect()
            }
            _ => events,
        })
    }

    pub async fn update(&self, id: &str, patch: EventPatch) -> StoreResult<()> {
        if let Some(date) = &patch.date {
            Self::validate_date(date)?;
        }
        self.events.update(id, patch).await
    }

    /// One month of the calendar view: the flat snapshot bucketed per day.
    pub async fn month(&self, year: i32, month: u32) -> StoreResult<Vec<CalendarDay>> {
        let events = self.events.list().await?;
        month_days(year, month, &events)
            .ok_or_else(|| StoreError::Validation(format!("invalid month: {year}-{month}")))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Event>> {
        self.events.subscribe()
    }
}
