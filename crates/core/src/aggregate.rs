//! Aggregate roots: consistency boundaries with deferred domain events.

use crate::entity::{Entity, EntityType};
use crate::error::{DomainError, DomainResult};
use crate::event::DomainEvent;
use crate::id::EntityId;

/// Behaviour a concrete aggregate kind plugs into [`AggregateRoot`].
pub trait AggregateType: EntityType {
    /// Events this aggregate emits.
    type Event: DomainEvent;

    /// Evolve props from a single event.
    ///
    /// Used when replaying history; must stay deterministic. Version
    /// bookkeeping is handled by [`AggregateRoot`], one increment per
    /// replayed event.
    fn apply(props: &mut Self::Props, event: &Self::Event);
}

/// Optimistic concurrency expectation for an aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (useful for idempotent commands, migrations, etc.).
    Any,
    /// Require the aggregate to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::concurrency(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}

/// An aggregate root: an [`Entity`] plus an exclusively-owned buffer of
/// pending domain events and an optimistic-concurrency version counter.
///
/// The buffer is append-only until drained through
/// [`AggregateRoot::mark_as_committed`] or [`AggregateRoot::clear_events`];
/// both buffer and version are private, so no external code can splice the
/// event list or set the version directly. The version advances only on
/// commit acknowledgment and on history replay, never on ordinary mutation.
pub struct AggregateRoot<T: AggregateType> {
    entity: Entity<T>,
    pending_events: Vec<T::Event>,
    version: u64,
}

// Hand-written impls for the same reason as `Entity`: derives would bound
// the kind marker `T` itself.
impl<T: AggregateType> Clone for AggregateRoot<T> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
            pending_events: self.pending_events.clone(),
            version: self.version,
        }
    }
}

impl<T: AggregateType> core::fmt::Debug for AggregateRoot<T>
where
    T::Props: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AggregateRoot")
            .field("entity", &self.entity)
            .field("pending_events", &self.pending_events)
            .field("version", &self.version)
            .finish()
    }
}

impl<T: AggregateType> AggregateRoot<T> {
    /// Create a fresh aggregate with a generated identifier.
    pub fn new(props: T::Props) -> DomainResult<Self> {
        Ok(Self {
            entity: Entity::new(props)?,
            pending_events: Vec::new(),
            version: 0,
        })
    }

    /// Create a fresh aggregate with a known identifier.
    pub fn with_id(id: EntityId, props: T::Props) -> DomainResult<Self> {
        Ok(Self {
            entity: Entity::with_id(id, props)?,
            pending_events: Vec::new(),
            version: 0,
        })
    }

    /// Reconstruct an aggregate by replaying its event history.
    ///
    /// Each event goes through [`AggregateType::apply`] and advances the
    /// version by one. The rebuilt state is validated once at the end, and
    /// the pending buffer starts empty: replayed events are history, not new
    /// facts. Reconstruction only; fresh creation goes through
    /// [`AggregateRoot::new`].
    pub fn load_from_history(
        id: EntityId,
        events: impl IntoIterator<Item = T::Event>,
    ) -> DomainResult<Self>
    where
        T::Props: Default,
    {
        let mut props = T::Props::default();
        let mut version = 0u64;
        for event in events {
            T::apply(&mut props, &event);
            version += 1;
        }
        if version == 0 {
            return Err(DomainError::invalid_entity(format!(
                "{}: cannot reconstruct from an empty history",
                T::KIND
            )));
        }
        Ok(Self {
            entity: Entity::with_id(id, props)?,
            pending_events: Vec::new(),
            version,
        })
    }

    pub fn id(&self) -> &EntityId {
        self.entity.id()
    }

    pub fn props(&self) -> &T::Props {
        self.entity.props()
    }

    /// Current version of the aggregate's state.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation through the validation contract.
    ///
    /// A rejected mutation leaves id, props, version and the event buffer
    /// all unchanged.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T::Props)) -> DomainResult<()> {
        self.entity.update(mutate)
    }

    /// Record a domain event for eventual external consumption.
    ///
    /// The version is deliberately untouched; it advances on commit
    /// acknowledgment only.
    pub fn record(&mut self, event: T::Event) {
        self.pending_events.push(event);
    }

    pub fn has_uncommitted_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Read-only view of the pending events, in recording order.
    pub fn uncommitted_events(&self) -> &[T::Event] {
        &self.pending_events
    }

    /// Acknowledge a successful persistence write.
    ///
    /// Clears the buffer and advances the version by exactly one, however
    /// many events were pending. Intended to be called by the persistence
    /// collaborator immediately after the write succeeds.
    pub fn mark_as_committed(&mut self) {
        self.pending_events.clear();
        self.version += 1;
    }

    /// Drop pending events without advancing the version.
    pub fn clear_events(&mut self) {
        self.pending_events.clear();
    }
}

impl<T: AggregateType> PartialEq for AggregateRoot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl<T: AggregateType> Eq for AggregateRoot<T> {}
