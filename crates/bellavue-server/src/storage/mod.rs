// Storage layer: repository contracts plus the in-memory backend.

pub mod memory;
pub mod repositories;

pub use memory::InMemoryStore;
pub use repositories::{CustomerRepository, EventRepository};
