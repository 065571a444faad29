//! Domain events: records of meaningful state changes.

use chrono::{DateTime, Utc};

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
///
/// Aggregates buffer them for eventual external consumption; a persistence
/// collaborator drains the buffer after a successful write.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "cadastro.customer.registered").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn schema_version(&self) -> u32 {
        1
    }

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
