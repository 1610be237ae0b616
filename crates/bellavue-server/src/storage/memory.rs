// In-memory document store
//
// Backs both repository traits for dev mode and tests. Documents live in
// HashMaps behind parking_lot locks; every write broadcasts the re-sorted
// collection snapshot to all subscribers, matching the hosted store's
// listener semantics (writers see their own writes echoed).
// Decision: ids are 20-char alphanumeric strings in the hosted store's
// auto-id format, assigned here and never by the caller.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::Rng;
use tokio::sync::broadcast;

use bellavue_core::{Customer, CustomerPatch, Event, EventPatch, StoreError, StoreResult};

use super::repositories::{CustomerRepository, EventRepository};

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 20;
const CHANNEL_CAPACITY: usize = 32;

fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// In-memory database for dev mode and tests.
/// All data is lost on restart.
pub struct InMemoryStore {
    events: RwLock<HashMap<String, Event>>,
    customers: RwLock<HashMap<String, Customer>>,
    events_tx: broadcast::Sender<Vec<Event>>,
    customers_tx: broadcast::Sender<Vec<Customer>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (customers_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        InMemoryStore {
            events: RwLock::new(HashMap::new()),
            customers: RwLock::new(HashMap::new()),
            events_tx,
            customers_tx,
        }
    }

    fn event_snapshot(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.read().values().cloned().collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        events
    }

    fn customer_snapshot(&self) -> Vec<Customer> {
        let mut customers: Vec<Customer> = self.customers.read().values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        customers
    }

    fn notify_events(&self) {
        // Send fails only when nobody is listening
        let _ = self.events_tx.send(self.event_snapshot());
    }

    fn notify_customers(&self) {
        let _ = self.customers_tx.send(self.customer_snapshot());
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, mut draft: Event) -> StoreResult<Event> {
        draft.id = generate_id();
        self.events.write().insert(draft.id.clone(), draft.clone());
        self.notify_events();
        Ok(draft)
    }

    async fn update(&self, id: &str, patch: EventPatch) -> StoreResult<()> {
        {
            let mut events = self.events.write();
            let event = events
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(format!("event {id}")))?;
            patch.apply(event);
        }
        self.notify_events();
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        if self.events.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("event {id}")));
        }
        self.notify_events();
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Event>> {
        Ok(self.events.read().get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Event>> {
        Ok(self.event_snapshot())
    }

    async fn replace_all(&self, events: Vec<Event>) -> StoreResult<()> {
        {
            let mut map = self.events.write();
            map.clear();
            for event in events {
                map.insert(event.id.clone(), event);
            }
        }
        self.notify_events();
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<Event>> {
        self.events_tx.subscribe()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn create(&self, mut draft: Customer) -> StoreResult<Customer> {
        draft.id = generate_id();
        self.customers
            .write()
            .insert(draft.id.clone(), draft.clone());
        self.notify_customers();
        Ok(draft)
    }

    async fn update(&self, id: &str, patch: CustomerPatch) -> StoreResult<()> {
        {
            let mut customers = self.customers.write();
            let customer = customers
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(format!("customer {id}")))?;
            patch.apply(customer);
        }
        self.notify_customers();
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        if self.customers.write().remove(id).is_none() {
            return Err(StoreError::NotFound(format!("customer {id}")));
        }
        self.notify_customers();
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
        Ok(self.customers.read().get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.customer_snapshot())
    }

    async fn replace_all(&self, customers: Vec<Customer>) -> StoreResult<()> {
        {
            let mut map = self.customers.write();
            map.clear();
            for customer in customers {
                map.insert(customer.id.clone(), customer);
            }
        }
        self.notify_customers();
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Vec<Customer>> {
        self.customers_tx.subscribe()
    }
}
