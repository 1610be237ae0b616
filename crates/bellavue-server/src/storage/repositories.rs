// Repository contracts over the document store
//
// One trait per entity collection, mirroring the hosted store's collection
// API: create/update/delete/get_by_id/list plus a subscribe-for-changes
// channel. The hosted adapter is out of scope; the in-memory backend in
// `memory.rs` implements these for dev mode and tests.

use async_trait::async_trait;
use tokio::sync::broadcast;

use bellavue_core::{Customer, CustomerPatch, Event, EventPatch, StoreResult};

/// Typed access to the `events` collection.
///
/// `list` returns a snapshot ordered ascending by event date, the one
/// ordering the application uses. `subscribe` delivers the full re-sorted
/// snapshot after every write, including writes made by this same client
/// (echo semantics); writers must not wait for the echo to observe their own
/// result.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a draft (id ignored); the store assigns the id and the stored
    /// document is returned.
    async fn create(&self, draft: Event) -> StoreResult<Event>;

    /// Merge-patch: only fields named in the patch are overwritten.
    async fn update(&self, id: &str, patch: EventPatch) -> StoreResult<()>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// `Ok(None)` for a missing id; never an error.
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Event>>;

    async fn list(&self) -> StoreResult<Vec<Event>>;

    /// Replace the whole collection, preserving the given ids. Backup
    /// import only.
    async fn replace_all(&self, events: Vec<Event>) -> StoreResult<()>;

    fn subscribe(&self) -> broadcast::Receiver<Vec<Event>>;
}

/// Typed access to the `customers` collection. Snapshots are ordered
/// ascending by display name.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, draft: Customer) -> StoreResult<Customer>;

    async fn update(&self, id: &str, patch: CustomerPatch) -> StoreResult<()>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Customer>>;

    async fn list(&self) -> StoreResult<Vec<Customer>>;

    async fn replace_all(&self, customers: Vec<Customer>) -> StoreResult<()>;

    fn subscribe(&self) -> broadcast::Receiver<Vec<Customer>>;
}
