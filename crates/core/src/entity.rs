//! Entities: identity + continuity across state changes.

use crate::error::DomainResult;
use crate::id::EntityId;

/// Behaviour a concrete entity kind plugs into [`Entity`].
///
/// The implementing type is a zero-sized kind marker; the owned state lives
/// in [`EntityType::Props`].
pub trait EntityType {
    /// Stable kind name for diagnostics and stream identifiers
    /// (lowercase, kebab-case: `"customer"`, `"user-account"`).
    const KIND: &'static str;

    /// Owned state of the entity.
    type Props: Clone;

    /// Validate candidate props. First failure wins.
    fn validate(props: &Self::Props) -> DomainResult<()>;
}

/// An identity-bearing domain object.
///
/// Validation runs at construction and on every update; the instance can
/// never be observed holding invalid props. Equality is by identifier only,
/// never by props, and the `T` parameter seals comparison to a single
/// entity kind, so entities of unrelated concrete types cannot be compared
/// at all, even when generated ids happen to coincide.
pub struct Entity<T: EntityType> {
    id: EntityId,
    props: T::Props,
}

// Hand-written impls: the derives would bound the zero-sized kind marker
// `T` itself instead of `T::Props`.
impl<T: EntityType> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            props: self.props.clone(),
        }
    }
}

impl<T: EntityType> core::fmt::Debug for Entity<T>
where
    T::Props: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &T::KIND)
            .field("id", &self.id)
            .field("props", &self.props)
            .finish()
    }
}

impl<T: EntityType> Entity<T> {
    /// Create a new entity with a generated identifier.
    pub fn new(props: T::Props) -> DomainResult<Self> {
        Self::with_id(EntityId::new(), props)
    }

    /// Reconstruct an entity with a known identifier.
    pub fn with_id(id: EntityId, props: T::Props) -> DomainResult<Self> {
        T::validate(&props)?;
        Ok(Self { id, props })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn props(&self) -> &T::Props {
        &self.props
    }

    /// Apply a mutation through the validation contract.
    ///
    /// The mutation runs on a copy of the props and only commits once
    /// validation passes; a rejected update returns the failure and the
    /// entity keeps its prior state.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T::Props)) -> DomainResult<()> {
        let mut next = self.props.clone();
        mutate(&mut next);
        T::validate(&next)?;
        self.props = next;
        Ok(())
    }

    /// Consume the entity, yielding its parts (for persistence mappers).
    pub fn into_parts(self) -> (EntityId, T::Props) {
        (self.id, self.props)
    }
}

impl<T: EntityType> PartialEq for Entity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: EntityType> Eq for Entity<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[derive(Debug, Clone, PartialEq)]
    struct CustomerProps {
        name: String,
        credit_limit: i64,
    }

    struct Customer;

    impl EntityType for Customer {
        const KIND: &'static str = "customer";
        type Props = CustomerProps;

        fn validate(props: &CustomerProps) -> DomainResult<()> {
            if props.name.trim().is_empty() {
                return Err(DomainError::validation_for("name", "name cannot be empty"));
            }
            if props.credit_limit < 0 {
                return Err(DomainError::validation_for(
                    "credit_limit",
                    "credit limit cannot be negative",
                ));
            }
            Ok(())
        }
    }

    fn valid_props() -> CustomerProps {
        CustomerProps {
            name: "Acme Ltda".to_string(),
            credit_limit: 10_000,
        }
    }

    #[test]
    fn construction_generates_an_identifier() {
        let a = Entity::<Customer>::new(valid_props()).unwrap();
        let b = Entity::<Customer>::new(valid_props()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn construction_rejects_invalid_props() {
        let err = Entity::<Customer>::new(CustomerProps {
            name: "   ".to_string(),
            credit_limit: 0,
        })
        .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn update_commits_only_when_validation_passes() {
        let mut customer = Entity::<Customer>::new(valid_props()).unwrap();

        customer.update(|p| p.credit_limit = 20_000).unwrap();
        assert_eq!(customer.props().credit_limit, 20_000);
    }

    #[test]
    fn failed_update_leaves_state_unchanged() {
        let mut customer = Entity::<Customer>::new(valid_props()).unwrap();
        let before = customer.props().clone();

        let err = customer.update(|p| p.credit_limit = -1).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(customer.props(), &before);
    }

    #[test]
    fn equality_is_by_identifier_only() {
        let id = EntityId::new();
        let a = Entity::<Customer>::with_id(id, valid_props()).unwrap();
        let mut b = Entity::<Customer>::with_id(
            id,
            CustomerProps {
                name: "Other Name".to_string(),
                credit_limit: 1,
            },
        )
        .unwrap();

        assert_eq!(a, b);

        b.update(|p| p.credit_limit = 99).unwrap();
        assert_eq!(a, b, "props changes never affect identity equality");

        let other = Entity::<Customer>::new(valid_props()).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn into_parts_yields_id_and_props() {
        let entity = Entity::<Customer>::new(valid_props()).unwrap();
        let id = *entity.id();
        let (part_id, props) = entity.into_parts();
        assert_eq!(part_id, id);
        assert_eq!(props, valid_props());
    }
}
