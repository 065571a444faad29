//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use crate::error::DomainResult;

/// Base contract for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// built from equal props are equal no matter how they were produced, and
/// "modifying" one means deriving a new instance.
///
/// ## Structural equality
///
/// Equality is the derived `PartialEq` of the props type, which gives
/// recursive structural comparison over a closed set of shapes: `chrono`
/// timestamps compare by instant, nested value objects by their own
/// equality, `Vec`s element-wise, plain records field by field, primitives
/// by value. There is no open-ended runtime type inspection anywhere.
///
/// ## Fail-fast construction
///
/// [`ValueObject::rebuild`] is the only way to produce an instance and must
/// run [`ValueObject::validate`] first, so a partially-valid value object
/// can never be observed. Expected bad input surfaces as an `Err`; only
/// genuinely unreachable states may panic.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     type Props = (i64, String);
///     // validate / rebuild / props ...
/// }
///
/// let price = Money::rebuild((100, "BRL".into()))?;
/// let discounted = price.copy_with(|(amount, _)| *amount = 80)?;
/// ```
pub trait ValueObject: Sized + Clone + PartialEq + core::fmt::Debug {
    /// Owned attribute record.
    type Props: Clone;

    /// Validate candidate props. First failure wins.
    fn validate(props: &Self::Props) -> DomainResult<()>;

    /// Build an instance from raw props, running the full validation
    /// pipeline.
    ///
    /// This is the explicit reconstruction path that [`ValueObject::copy_with`]
    /// relies on; there is no reflective constructor dispatch.
    fn rebuild(props: Self::Props) -> DomainResult<Self>;

    /// Read-only view of the props.
    fn props(&self) -> &Self::Props;

    /// Derive a new instance with some props replaced.
    ///
    /// The mutation runs on a copy and the result goes back through
    /// [`ValueObject::rebuild`], so a validation failure yields an error and
    /// the original instance is untouched either way.
    fn copy_with(&self, mutate: impl FnOnce(&mut Self::Props)) -> DomainResult<Self> {
        let mut props = self.props().clone();
        mutate(&mut props);
        Self::rebuild(props)
    }
}
