// Error types shared across the storage and service layers

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the document store.
///
/// `get_by_id` on a missing document returns `Ok(None)`; `NotFound` is only
/// raised when an update or delete targets a vanished id.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An update or delete targeted an id with no corresponding document
    #[error("document not found: {0}")]
    NotFound(String),

    /// Store-level authorization failure; never retried automatically
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Transient connectivity failure; the caller decides whether to re-attempt
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Local pre-network check failed; nothing was sent to the store
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Errors surfaced by the linkage coordinator.
///
/// A failure of the prerequisite step of a multi-step protocol escalates to
/// one of these; failures after the authoritative half already succeeded are
/// downgraded to a [`LinkageWarning`] instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkageError {
    #[error("validation failed: {0}")]
    Validation(String),

    /// A customer delete was refused because events still reference it
    #[error("customer {customer_id} still has {count} linked event(s)")]
    HasLinkedEvents { customer_id: String, count: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Non-fatal outcome of a coordinator step that ran after the authoritative
/// write already succeeded. The primary entity is usable; only secondary
/// bookkeeping is stale.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkageWarning {
    /// The customer's `events` reverse index could not be updated
    #[error("customer {customer_id} reverse index is stale for event {event_id}: {reason}")]
    ReverseIndexStale {
        customer_id: String,
        event_id: String,
        reason: String,
    },

    /// Contact fields could not be synced onto the linked customer
    #[error("customer {customer_id} contact sync failed: {reason}")]
    CustomerSyncFailed {
        customer_id: String,
        reason: String,
    },
}
