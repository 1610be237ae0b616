// Backup service: wholesale export and import of both collections.
//
// Import replaces store state entirely and therefore requires an explicit
// confirmation flag; there is no merge logic.

use std::sync::Arc;

use bellavue_core::{Backup, StoreError, StoreResult};

use crate::storage::{CustomerRepository, EventRepository};

pub struct BackupService {
    events: Arc<dyn EventRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl BackupService {
    pub fn new(events: Arc<dyn EventRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self { events, customers }
    }

    pub async fn export(&self) -> StoreResult<Backup> {
        let events = self.events.list().await?;
        let customers = self.customers.list().await?;
        Ok(Backup::new(events, customers))
    }

    /// Replace both collections with the backup's contents, preserving ids.
    pub async fn import(&self, backup: Backup, confirmed: bool) -> StoreResult<()> {
        if !confirmed {
            return Err(StoreError::Validation(
                "import replaces all data and requires confirmation".into(),
            ));
        }
        let event_count = backup.events.len();
        let customer_count = backup.customers.len();
        self.events.replace_all(backup.events).await?;
        self.customers.replace_all(backup.customers).await?;
        tracing::info!(event_count, customer_count, "backup imported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use bellavue_core::{Customer, Event};

    fn service() -> (Arc<InMemoryStore>, BackupService) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), BackupService::new(store.clone(), store))
    }

    #[tokio::test]
    async fn export_import_round_trip_preserves_ids() {
        let (store, service) = service();
        let event = EventRepository::create(
            store.as_ref(),
            Event {
                title: "Hochzeit".into(),
                date: "2025-06-14".into(),
                ..Event::default()
            },
        )
        .await
        .unwrap();
        let customer = CustomerRepository::create(
            store.as_ref(),
            Customer {
                name: "Anna Müller".into(),
                ..Customer::default()
            },
        )
        .await
        .unwrap();

        let backup = service.export().await.unwrap();

        // Wipe by importing an empty backup, then restore
        service
            .import(Backup::new(vec![], vec![]), true)
            .await
            .unwrap();
        assert!(EventRepository::list(store.as_ref()).await.unwrap().is_empty());

        service.import(backup, true).await.unwrap();
        let events = EventRepository::list(store.as_ref()).await.unwrap();
        let customers = CustomerRepository::list(store.as_ref()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, event.id);
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, customer.id);
    }

    #[tokio::test]
    async fn import_without_confirmation_is_refused() {
        let (store, service) = service();
        EventRepository::create(
            store.as_ref(),
            Event {
                title: "bleibt".into(),
                date: "2025-06-14".into(),
                ..Event::default()
            },
        )
        .await
        .unwrap();

        let err = service
            .import(Backup::new(vec![], vec![]), false)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(EventRepository::list(store.as_ref()).await.unwrap().len(), 1);
    }
}
