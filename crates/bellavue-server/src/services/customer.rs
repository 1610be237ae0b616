// Customer service: validation and CRUD over the customers collection.
//
// Owns the invalidation trigger for the denormalized display name: whenever
// an update touches a name field, the new name is re-patched onto every
// event that references the customer.

use std::sync::Arc;

use tokio::sync::broadcast;

use bellavue_core::{
    compose_address, compose_display_name, Customer, CustomerPatch, EventPatch, StoreError,
    StoreResult,
};

use crate::storage::{CustomerRepository, EventRepository};

pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    events: Arc<dyn EventRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { customers, events }
    }

    /// Create a customer directly. The display name is composed from the
    /// name parts when not given; the display address likewise.
    pub async fn create(&self, mut draft: Customer) -> StoreResult<Customer> {
        if draft.name.trim().is_empty() {
            draft.name = compose_display_name(&draft.first_name, &draft.last_name);
        }
        if draft.name.is_empty() {
            return Err(StoreError::Validation("customer name is required".into()));
        }
        if draft.address.trim().is_empty() {
            draft.address = compose_address(&draft.street_and_number, &draft.zip_and_city);
        }
        self.customers.create(draft).await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Customer>> {
        self.customers.get_by_id(id).await
    }

    /// Name-ascending snapshot, optionally filtered by a case-insensitive
    /// substring over name, email, and company.
    pub async fn list(&self, search: Option<&str>) -> StoreResult<Vec<Customer>> {
        let customers = self.customers.list().await?;
        Ok(match search {
            Some(query) if !query.trim().is_empty() => {
                let pattern = query.trim().to_lowercase();
                customers
                    .into_iter()
                    .filter(|c| {
                        c.name.to_lowercase().contains(&pattern)
                            || c.email.to_lowercase().contains(&pattern)
                            || c.company.to_lowercase().contains(&pattern)
                    })
                    .collect()
            }
            _ => customers,
        })
    }

    /// Merge-patch a customer. When the patch touches a name field, the
    /// final display name is recomposed (unless set explicitly) and pushed
    /// onto every event referencing this customer, so the denormalized
    /// `customer` field cannot drift. Event-side patch failures are logged
    /// and reported, not fatal.
    pub async fn update(&self, id: &str, mut patch: CustomerPatch) -> StoreResult<()> {
        if patch.touches_display_name() && patch.name.is_none() {
            let existing = self
                .customers
                .get_by_id(id)
                .await?
                .ok_or_else(|| StoreError::NotFound(format!("customer {id}")))?;
            let first = patch
                .first_name
                .clone()
                .unwrap_or(existing.first_name);
            let last = patch.last_name.clone().unwrap_or(existing.last_name);
            let composed = compose_display_name(&first, &last);
            if !composed.is_empty() {
                patch.name = Some(composed);
            }
        }

        let new_name = patch.name.clone();
        self.customers.update(id, patch).await?;

        if let Some(name) = new_name {
            self.refresh_denormalized_names(id, &name).await;
        }
        Ok(())
    }

    async fn refresh_denormalized_names(&self, customer_id: &str, name: &str) {
        let events = match self.events.list().await {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(customer_id, "listing events for name refresh failed: {err}");
                return;
            }
        };
        for event in events.iter().filter(|e| e.customer_id == customer_id) {
            let patch = EventPatch {
                customer: Some(name.to_string()),
                ..EventPatch::default()
            };
            if let Err(err) = self.events.update(&event.id, patch).await {
                tracing::warn!(
                    customer_id,
                    event_id = %event.id,
                    "denormalized name refresh failed: {err}"
                );
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Vec<Customer>> {
        self.customers.subscribe()
    }
}
