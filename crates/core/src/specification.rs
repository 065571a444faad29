//! Composable business-rule specifications.

use core::marker::PhantomData;

/// A composable boolean predicate over a candidate type.
///
/// Combinators return new composite objects holding the operands by value
/// and never mutate them. Evaluation short-circuits left-to-right exactly as
/// `&&`/`||` do, so an expensive right operand is only consulted when the
/// left one does not already decide the outcome.
pub trait Specification<T> {
    /// Whether the candidate satisfies this rule.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Human-readable description of the rule, for explaining a `false`
    /// evaluation.
    ///
    /// Computed per call, never cached. Composites mirror their own boolean
    /// structure: an AND of two rules reports `"<left> AND <right>"`.
    fn reason_for_dissatisfaction(&self) -> String;

    /// Both this rule and `other` must hold.
    fn and<S>(self, other: S) -> And<T, Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And {
            left: self,
            right: other,
            _candidate: PhantomData,
        }
    }

    /// Either this rule or `other` must hold.
    fn or<S>(self, other: S) -> Or<T, Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or {
            left: self,
            right: other,
            _candidate: PhantomData,
        }
    }

    /// This rule must not hold.
    fn not(self) -> Not<T, Self>
    where
        Self: Sized,
    {
        Not {
            inner: self,
            _candidate: PhantomData,
        }
    }
}

/// AND combination of two specifications.
#[derive(Debug, Clone)]
pub struct And<T, L, R> {
    left: L,
    right: R,
    _candidate: PhantomData<fn(&T)>,
}

impl<T, L, R> Specification<T> for And<T, L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }

    fn reason_for_dissatisfaction(&self) -> String {
        format!(
            "{} AND {}",
            self.left.reason_for_dissatisfaction(),
            self.right.reason_for_dissatisfaction()
        )
    }
}

/// OR combination of two specifications.
#[derive(Debug, Clone)]
pub struct Or<T, L, R> {
    left: L,
    right: R,
    _candidate: PhantomData<fn(&T)>,
}

impl<T, L, R> Specification<T> for Or<T, L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }

    fn reason_for_dissatisfaction(&self) -> String {
        format!(
            "{} OR {}",
            self.left.reason_for_dissatisfaction(),
            self.right.reason_for_dissatisfaction()
        )
    }
}

/// Negation of a specification.
#[derive(Debug, Clone)]
pub struct Not<T, S> {
    inner: S,
    _candidate: PhantomData<fn(&T)>,
}

impl<T, S> Specification<T> for Not<T, S>
where
    S: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }

    fn reason_for_dissatisfaction(&self) -> String {
        format!("NOT ({})", self.inner.reason_for_dissatisfaction())
    }
}
