// Linkage coordinator
//
// Keeps the Event<->Customer relationship consistent across creates, edits,
// and deletes. The store offers no multi-document transactions, so every
// multi-step protocol here is a strict sequential chain: each step's result
// (usually an assigned id) is a precondition for the next. Failures after
// the authoritative write succeeded are downgraded to warnings; failures of
// a prerequisite step escalate to the caller.

use std::sync::Arc;

use chrono::NaiveDate;

use bellavue_core::{
    compose_address, compose_display_name, ContactInfo, Customer, CustomerPatch, Event,
    EventPatch, LinkageError, LinkageWarning,
};

use crate::storage::{CustomerRepository, EventRepository};

/// Result of the three-step create protocol: both persisted entities, fully
/// linked. Returned for immediate UI update; callers must not wait for the
/// push-channel echo.
#[derive(Debug, Clone)]
pub struct CreatedBooking {
    pub event: Event,
    pub customer: Customer,
    pub warning: Option<LinkageWarning>,
}

/// Result of persisting an edited event, including any follow-up link the
/// coordinator established.
#[derive(Debug, Clone)]
pub struct SavedEvent {
    pub event: Event,
    pub warning: Option<LinkageWarning>,
}

pub struct LinkageService {
    events: Arc<dyn EventRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl LinkageService {
    pub fn new(events: Arc<dyn EventRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { events, customers }
    }

    /// Create an event together with a fresh customer record.
    ///
    /// Always creates a new customer from the contact bundle - existing
    /// customers are never searched for a match. The protocol is strictly
    /// sequential: create customer (id needed as the event's foreign key),
    /// create event, patch the customer's `events` reverse index.
    ///
    /// Partial failures: if the event create fails, the customer from step 1
    /// is left in place (an unlinked customer with an empty `events` array
    /// is harmless and recoverable by staff) and the error escalates. If the
    /// reverse-index patch fails, both entities exist and the event is
    /// usable; the stale index is reported as a warning.
    pub async fn create_event_with_customer(
        &self,
        mut draft: Event,
        contact: ContactInfo,
    ) -> Result<CreatedBooking, LinkageError> {
        if draft.title.trim().is_empty() {
            return Err(LinkageError::Validation("event title is required".into()));
        }
        if NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d").is_err() {
            return Err(LinkageError::Validation(format!(
                "invalid event date: {:?}",
                draft.date
            )));
        }
        if contact.display_name().is_empty() {
            return Err(LinkageError::Validation(
                "contact first or last name is required".into(),
            ));
        }

        // Step 1: customer first; the event needs its id.
        let mut customer = self.customers.create(Customer::from_contact(&contact)).await?;

        // Step 2: event with the forward link and denormalized display name.
        draft.customer_id = customer.id.clone();
        draft.customer = customer.name.clone();
        let event = match self.events.create(draft).await {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(
                    customer_id = %customer.id,
                    "event create failed after customer create; leaving unlinked customer: {err}"
                );
                return Err(err.into());
            }
        };

        // Step 3: reverse index on the fresh customer.
        let patch = CustomerPatch {
            events: Some(vec![event.id.clone()]),
            ..CustomerPatch::default()
        };
        let warning = match self.customers.update(&customer.id, patch).await {
            Ok(()) => {
                customer.events = vec![event.id.clone()];
                None
            }
            Err(err) => {
                tracing::warn!(
                    customer_id = %customer.id,
                    event_id = %event.id,
                    "reverse index update failed: {err}"
                );
                Some(LinkageWarning::ReverseIndexStale {
                    customer_id: customer.id.clone(),
                    event_id: event.id.clone(),
                    reason: err.to_string(),
                })
            }
        };

        Ok(CreatedBooking {
            event,
            customer,
            warning,
        })
    }

    /// Persist an edited event and sync its embedded contact fields onto the
    /// linked customer.
    ///
    /// The event update is authoritative and happens first; a customer-side
    /// failure never blocks it. When the event carries no customer link but
    /// does carry contact data, a customer is synthesized and linked as a
    /// follow-up patch.
    pub async fn save_event(&self, event: Event) -> Result<SavedEvent, LinkageError> {
        if event.id.trim().is_empty() {
            return Err(LinkageError::Validation("event id is required".into()));
        }

        self.events
            .update(&event.id, EventPatch::from(event.clone()))
            .await?;

        let mut saved = event.clone();
        let warning = if !event.customer_id.is_empty() {
            match self.customers.get_by_id(&event.customer_id).await {
                Ok(Some(existing)) => self.sync_contact_onto(&event, &existing).await,
                // The link points at a vanished customer; recreate it from
                // the event's own contact data.
                Ok(None) => self.synthesize_customer(&mut saved).await,
                Err(err) => {
                    tracing::warn!(
                        event_id = %event.id,
                        customer_id = %event.customer_id,
                        "customer fetch failed during contact sync: {err}"
                    );
                    Some(LinkageWarning::CustomerSyncFailed {
                        customer_id: event.customer_id.clone(),
                        reason: err.to_string(),
                    })
                }
            }
        } else if event.has_contact_fields() {
            self.synthesize_customer(&mut saved).await
        } else {
            None
        };

        Ok(SavedEvent {
            event: saved,
            warning,
        })
    }

    /// Merge the event's embedded contact fields onto an existing customer.
    /// Event fields win only when non-empty; a curated non-blank address is
    /// never replaced with a recomposed one.
    async fn sync_contact_onto(
        &self,
        event: &Event,
        existing: &Customer,
    ) -> Option<LinkageWarning> {
        let non_empty = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        let patch = CustomerPatch {
            first_name: non_empty(&event.first_name),
            last_name: non_empty(&event.last_name),
            company: non_empty(&event.company),
            email: non_empty(&event.email),
            phone: non_empty(&event.phone),
            mobile: non_empty(&event.mobile),
            street_and_number: non_empty(&event.street_and_number),
            zip_and_city: non_empty(&event.zip_and_city),
            notes: non_empty(&event.notes),
            address: if existing.address.trim().is_empty() {
                non_empty(&compose_address(
                    &event.street_and_number,
                    &event.zip_and_city,
                ))
            } else {
                None
            },
            ..CustomerPatch::default()
        };

        match self.customers.update(&existing.id, patch).await {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(
                    customer_id = %existing.id,
                    event_id = %event.id,
                    "contact sync onto customer failed: {err}"
                );
                Some(LinkageWarning::CustomerSyncFailed {
                    customer_id: existing.id.clone(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Create a customer from the event's embedded contact fields and patch
    /// the forward link back onto the event.
    async fn synthesize_customer(&self, event: &mut Event) -> Option<LinkageWarning> {
        let name = {
            let composed = compose_display_name(&event.first_name, &event.last_name);
            if composed.is_empty() {
                event.customer.trim().to_string()
            } else {
                composed
            }
        };

        let draft = Customer {
            name,
            first_name: event.first_name.clone(),
            last_name: event.last_name.clone(),
            company: event.company.clone(),
            email: event.email.clone(),
            phone: event.phone.clone(),
            mobile: event.mobile.clone(),
            street_and_number: event.street_and_number.clone(),
            zip_and_city: event.zip_and_city.clone(),
            address: compose_address(&event.street_and_number, &event.zip_and_city),
            notes: event.notes.clone(),
            events: vec![event.id.clone()],
            ..Customer::default()
        };

        let customer = match self.customers.create(draft).await {
            Ok(customer) => customer,
            Err(err) => {
                tracing::warn!(event_id = %event.id, "customer synthesis failed: {err}");
                return Some(LinkageWarning::CustomerSyncFailed {
                    customer_id: event.customer_id.clone(),
                    reason: err.to_string(),
                });
            }
        };

        let link = EventPatch {
            customer_id: Some(customer.id.clone()),
            customer: Some(customer.name.clone()),
            ..EventPatch::default()
        };
        match self.events.update(&event.id, link).await {
            Ok(()) => {
                event.customer_id = customer.id;
                event.customer = customer.name;
                None
            }
            Err(err) => {
                tracing::warn!(
                    event_id = %event.id,
                    customer_id = %customer.id,
                    "forward link patch failed after customer synthesis: {err}"
                );
                Some(LinkageWarning::CustomerSyncFailed {
                    customer_id: customer.id,
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Delete an event and best-effort remove it from the linked customer's
    /// reverse index so no dangling reference is left behind.
    pub async fn delete_event(&self, event: &Event) -> Result<Option<LinkageWarning>, LinkageError> {
        self.events.delete(&event.id).await?;

        if event.customer_id.is_empty() {
            return Ok(None);
        }

        let cleanup = async {
            let Some(customer) = self.customers.get_by_id(&event.customer_id).await? else {
                // Customer already gone; nothing to unlink.
                return Ok(false);
            };
            if !customer.events.iter().any(|id| id == &event.id) {
                return Ok(false);
            }
            let remaining: Vec<String> = customer
                .events
                .into_iter()
                .filter(|id| id != &event.id)
                .collect();
            let patch = CustomerPatch {
                events: Some(remaining),
                ..CustomerPatch::default()
            };
            self.customers.update(&event.customer_id, patch).await?;
            Ok::<bool, bellavue_core::StoreError>(true)
        };

        match cleanup.await {
            Ok(_) => Ok(None),
            Err(err) => {
                tracing::warn!(
                    event_id = %event.id,
                    customer_id = %event.customer_id,
                    "reverse index cleanup failed after event delete: {err}"
                );
                Ok(Some(LinkageWarning::ReverseIndexStale {
                    customer_id: event.customer_id.clone(),
                    event_id: event.id.clone(),
                    reason: err.to_string(),
                }))
            }
        }
    }

    /// Delete a customer. Refuses while events still reference it; when
    /// forced, every referencing event's `customer_id` is cleared first so
    /// nothing is left pointing at a vanished id.
    pub async fn delete_customer(&self, customer_id: &str, force: bool) -> Result<(), LinkageError> {
        let linked: Vec<Event> = self
            .events
            .list()
            .await?
            .into_iter()
            .filter(|event| event.customer_id == customer_id)
            .collect();

        if !linked.is_empty() {
            if !force {
                return Err(LinkageError::HasLinkedEvents {
                    customer_id: customer_id.to_string(),
                    count: linked.len(),
                });
            }
            // Unlink before the delete; a failure here aborts while the
            // customer still exists, so no dangling reference can appear.
            for event in &linked {
                let patch = EventPatch {
                    customer_id: Some(String::new()),
                    ..EventPatch::default()
                };
                self.events.update(&event.id, patch).await?;
            }
        }

        self.customers.delete(customer_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use async_trait::async_trait;
    use bellavue_core::{StoreError, StoreResult};
    use tokio::sync::broadcast;

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    fn service(store: &Arc<InMemoryStore>) -> LinkageService {
        LinkageService::new(store.clone(), store.clone())
    }

    fn contact_anna() -> ContactInfo {
        ContactInfo {
            first_name: "Anna".into(),
            last_name: "Müller".into(),
            email: "a@x.de".into(),
            phone: "0123".into(),
            street_and_number: "Seeweg 2".into(),
            zip_and_city: "80331 München".into(),
            ..ContactInfo::default()
        }
    }

    fn draft_birthday() -> Event {
        Event {
            title: "Geburtstag Müller".into(),
            date: "2025-06-01".into(),
            room: "Event 1".into(),
            ..Event::default()
        }
    }

    /// Event store wrapper that fails selected operations.
    struct FlakyEvents {
        inner: Arc<InMemoryStore>,
        fail_create: bool,
        fail_update: bool,
    }

    #[async_trait]
    impl EventRepository for FlakyEvents {
        async fn create(&self, draft: Event) -> StoreResult<Event> {
            if self.fail_create {
                return Err(StoreError::Unavailable("injected".into()));
            }
            EventRepository::create(self.inner.as_ref(), draft).await
        }
        async fn update(&self, id: &str, patch: EventPatch) -> StoreResult<()> {
            if self.fail_update {
                return Err(StoreError::Unavailable("injected".into()));
            }
            EventRepository::update(self.inner.as_ref(), id, patch).await
        }
        async fn delete(&self, id: &str) -> StoreResult<()> {
            EventRepository::delete(self.inner.as_ref(), id).await
        }
        async fn get_by_id(&self, id: &str) -> StoreResult<Option<Event>> {
            EventRepository::get_by_id(self.inner.as_ref(), id).await
        }
        async fn list(&self) -> StoreResult<Vec<Event>> {
            EventRepository::list(self.inner.as_ref()).await
        }
        async fn replace_all(&self, events: Vec<Event>) -> StoreResult<()> {
            EventRepository::replace_all(self.inner.as_ref(), events).await
        }
        fn subscribe(&self) -> broadcast::Receiver<Vec<Event>> {
            EventRepository::subscribe(self.inner.as_ref())
        }
    }

    /// Customer store wrapper that fails updates.
    struct FlakyCustomers {
        inner: Arc<InMemoryStore>,
        fail_update: bool,
    }

    #[async_trait]
    impl CustomerRepository for FlakyCustomers {
        async fn create(&self, draft: Customer) -> StoreResult<Customer> {
            CustomerRepository::create(self.inner.as_ref(), draft).await
        }
        async fn update(&self, id: &str, patch: CustomerPatch) -> StoreResult<()> {
            if self.fail_update {
                return Err(StoreError::Unavailable("injected".into()));
            }
            CustomerRepository::update(self.inner.as_ref(), id, patch).await
        }
        async fn delete(&self, id: &str) -> StoreResult<()> {
            CustomerRepository::delete(self.inner.as_ref(), id).await
        }
        async fn get_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
            CustomerRepository::get_by_id(self.inner.as_ref(), id).await
        }
        async fn list(&self) -> StoreResult<Vec<Customer>> {
            CustomerRepository::list(self.inner.as_ref()).await
        }
        async fn replace_all(&self, customers: Vec<Customer>) -> StoreResult<()> {
            CustomerRepository::replace_all(self.inner.as_ref(), customers).await
        }
        fn subscribe(&self) -> broadcast::Receiver<Vec<Customer>> {
            CustomerRepository::subscribe(self.inner.as_ref())
        }
    }

    #[tokio::test]
    async fn round_trip_creation_links_both_sides() {
        let store = store();
        let created = service(&store)
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        assert!(created.warning.is_none());
        assert_eq!(created.event.customer_id, created.customer.id);
        assert_eq!(created.customer.events, vec![created.event.id.clone()]);

        // Both sides retrievable and consistent from the store itself
        let event = EventRepository::get_by_id(store.as_ref(), &created.event.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.customer_id, created.customer.id);
        let customer = CustomerRepository::get_by_id(store.as_ref(), &created.customer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.events, vec![created.event.id]);
    }

    #[tokio::test]
    async fn concrete_scenario_composes_name_and_address() {
        let store = store();
        let created = service(&store)
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        assert_eq!(created.customer.name, "Anna Müller");
        assert_eq!(created.customer.address, "Seeweg 2, 80331 München");
        assert_eq!(created.event.customer, "Anna Müller");
        assert_eq!(created.event.title, "Geburtstag Müller");
        assert_eq!(created.customer.events, vec![created.event.id.clone()]);
    }

    #[tokio::test]
    async fn rejects_blank_contact_name_before_any_write() {
        let store = store();
        let err = service(&store)
            .create_event_with_customer(draft_birthday(), ContactInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LinkageError::Validation(_)));
        assert!(CustomerRepository::list(store.as_ref())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn event_create_failure_leaves_recoverable_customer() {
        let inner = store();
        let coordinator = LinkageService::new(
            Arc::new(FlakyEvents {
                inner: inner.clone(),
                fail_create: true,
                fail_update: false,
            }),
            inner.clone(),
        );

        let err = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LinkageError::Store(StoreError::Unavailable(_))
        ));

        // The orphan customer from step 1 is persisted and retrievable
        let customers = CustomerRepository::list(inner.as_ref()).await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Anna Müller");
        assert!(customers[0].events.is_empty());
        let by_id = CustomerRepository::get_by_id(inner.as_ref(), &customers[0].id)
            .await
            .unwrap();
        assert!(by_id.is_some());
        // No event was created
        assert!(EventRepository::list(inner.as_ref()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reverse_index_failure_downgrades_to_warning() {
        let inner = store();
        let coordinator = LinkageService::new(
            inner.clone(),
            Arc::new(FlakyCustomers {
                inner: inner.clone(),
                fail_update: true,
            }),
        );

        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        assert!(matches!(
            created.warning,
            Some(LinkageWarning::ReverseIndexStale { .. })
        ));
        // Event and customer both exist; only the reverse index is stale
        assert_eq!(created.event.customer_id, created.customer.id);
        let stored = CustomerRepository::get_by_id(inner.as_ref(), &created.customer.id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.events.is_empty());
    }

    #[tokio::test]
    async fn blank_event_fields_never_clobber_customer_fields() {
        let store = store();
        let coordinator = service(&store);
        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        // Staff edit the event but clear nothing deliberately; optional
        // contact fields come back blank.
        let mut edited = created.event.clone();
        edited.email = String::new();
        edited.phone = String::new();
        edited.notes = String::new();
        edited.description = "Tische umstellen".into();

        let saved = coordinator.save_event(edited).await.unwrap();
        assert!(saved.warning.is_none());

        let customer = CustomerRepository::get_by_id(store.as_ref(), &created.customer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.email, "a@x.de");
        assert_eq!(customer.phone, "0123");
    }

    #[tokio::test]
    async fn curated_address_is_never_recomposed() {
        let store = store();
        let coordinator = service(&store);
        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        // Staff curate the address by hand
        CustomerRepository::update(
            store.as_ref(),
            &created.customer.id,
            CustomerPatch {
                address: Some("Seeweg 2, Rückgebäude, 80331 München".into()),
                ..CustomerPatch::default()
            },
        )
        .await
        .unwrap();

        let mut edited = created.event.clone();
        edited.street_and_number = "Seeweg 2".into();
        edited.zip_and_city = "80331 München".into();
        coordinator.save_event(edited).await.unwrap();

        let customer = CustomerRepository::get_by_id(store.as_ref(), &created.customer.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.address, "Seeweg 2, Rückgebäude, 80331 München");
        // The parts still sync
        assert_eq!(customer.street_and_number, "Seeweg 2");
    }

    #[tokio::test]
    async fn save_without_link_synthesizes_customer() {
        let store = store();
        let coordinator = service(&store);

        // An event that captured contact data without a customer record
        let event = EventRepository::create(
            store.as_ref(),
            Event {
                title: "Firmenfeier".into(),
                date: "2025-08-20".into(),
                first_name: "Mehmet".into(),
                last_name: "Demir".into(),
                email: "m@firma.de".into(),
                street_and_number: "Hauptstr. 5".into(),
                zip_and_city: "80331 München".into(),
                ..Event::default()
            },
        )
        .await
        .unwrap();

        let saved = coordinator.save_event(event.clone()).await.unwrap();
        assert!(saved.warning.is_none());
        assert!(!saved.event.customer_id.is_empty());
        assert_eq!(saved.event.customer, "Mehmet Demir");

        let customer = CustomerRepository::get_by_id(store.as_ref(), &saved.event.customer_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.name, "Mehmet Demir");
        assert_eq!(customer.address, "Hauptstr. 5, 80331 München");
        assert_eq!(customer.events, vec![event.id.clone()]);

        // The forward link landed in the store too
        let stored = EventRepository::get_by_id(store.as_ref(), &event.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.customer_id, customer.id);
    }

    #[tokio::test]
    async fn save_without_link_or_contact_changes_nothing() {
        let store = store();
        let coordinator = service(&store);
        let event = EventRepository::create(
            store.as_ref(),
            Event {
                title: "Restaurant intern".into(),
                date: "2025-04-01".into(),
                ..Event::default()
            },
        )
        .await
        .unwrap();

        let saved = coordinator.save_event(event).await.unwrap();
        assert!(saved.event.customer_id.is_empty());
        assert!(CustomerRepository::list(store.as_ref())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn customer_side_failure_does_not_block_event_save() {
        let inner = store();
        let coordinator = LinkageService::new(
            inner.clone(),
            Arc::new(FlakyCustomers {
                inner: inner.clone(),
                fail_update: false,
            }),
        );
        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        // Now fail all customer updates
        let flaky = LinkageService::new(
            inner.clone(),
            Arc::new(FlakyCustomers {
                inner: inner.clone(),
                fail_update: true,
            }),
        );
        let mut edited = created.event.clone();
        edited.email = "neu@x.de".into();
        edited.title = "Geburtstag Müller (50.)".into();

        let saved = flaky.save_event(edited).await.unwrap();
        assert!(matches!(
            saved.warning,
            Some(LinkageWarning::CustomerSyncFailed { .. })
        ));

        // The event update went through regardless
        let stored = EventRepository::get_by_id(inner.as_ref(), &created.event.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title, "Geburtstag Müller (50.)");
    }

    #[tokio::test]
    async fn delete_event_cleans_reverse_index() {
        let store = store();
        let coordinator = service(&store);
        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        let warning = coordinator.delete_event(&created.event).await.unwrap();
        assert!(warning.is_none());

        let customer = CustomerRepository::get_by_id(store.as_ref(), &created.customer.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!customer.events.contains(&created.event.id));
        assert!(EventRepository::get_by_id(store.as_ref(), &created.event.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_event_index_failure_is_non_fatal() {
        let inner = store();
        let coordinator = service(&inner);
        let created = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        let flaky = LinkageService::new(
            inner.clone(),
            Arc::new(FlakyCustomers {
                inner: inner.clone(),
                fail_update: true,
            }),
        );
        let warning = flaky.delete_event(&created.event).await.unwrap();
        assert!(matches!(
            warning,
            Some(LinkageWarning::ReverseIndexStale { .. })
        ));
        // The event itself is gone
        assert!(EventRepository::get_by_id(inner.as_ref(), &created.event.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_customer_refuses_while_events_reference_it() {
        let store = store();
        let coordinator = service(&store);
        let first = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();

        // Second event pointing at the same customer
        EventRepository::create(
            store.as_ref(),
            Event {
                title: "Nachfeier".into(),
                date: "2025-06-02".into(),
                customer_id: first.customer.id.clone(),
                customer: first.customer.name.clone(),
                ..Event::default()
            },
        )
        .await
        .unwrap();

        let err = coordinator
            .delete_customer(&first.customer.id, false)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LinkageError::HasLinkedEvents {
                customer_id: first.customer.id.clone(),
                count: 2
            }
        );
        // Customer still there
        assert!(
            CustomerRepository::get_by_id(store.as_ref(), &first.customer.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn forced_customer_delete_clears_event_links() {
        let store = store();
        let coordinator = service(&store);
        let first = coordinator
            .create_event_with_customer(draft_birthday(), contact_anna())
            .await
            .unwrap();
        let second = EventRepository::create(
            store.as_ref(),
            Event {
                title: "Nachfeier".into(),
                date: "2025-06-02".into(),
                customer_id: first.customer.id.clone(),
                ..Event::default()
            },
        )
        .await
        .unwrap();

        coordinator
            .delete_customer(&first.customer.id, true)
            .await
            .unwrap();

        assert!(
            CustomerRepository::get_by_id(store.as_ref(), &first.customer.id)
                .await
                .unwrap()
                .is_none()
        );
        // No event is left pointing at the vanished id
        for id in [&first.event.id, &second.id] {
            let event = EventRepository::get_by_id(store.as_ref(), id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(event.customer_id, "");
        }
    }

    #[tokio::test]
    async fn delete_unreferenced_customer_needs_no_force() {
        let store = store();
        let coordinator = service(&store);
        let customer = CustomerRepository::create(
            store.as_ref(),
            Customer {
                name: "Ohne Events".into(),
                ..Customer::default()
            },
        )
        .await
        .unwrap();

        coordinator.delete_customer(&customer.id, false).await.unwrap();
        assert!(CustomerRepository::get_by_id(store.as_ref(), &customer.id)
            .await
            .unwrap()
            .is_none());
    }
}
