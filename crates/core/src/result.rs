//! Railway-style reductions over [`DomainResult`] sequences.
//!
//! `Result` itself already covers the monadic surface (`map`, `and_then`,
//! `map_err`), and `Ok`/`Err` are the only constructors, so a success can
//! never carry an error payload. This module adds the multi-result
//! reductions the domain layer needs on top of that.

use std::future::Future;

use futures::future::join_all;

use crate::error::{DomainError, DomainResult, ValidationError};

/// Reduce a sequence of results to the first failure, else all values.
///
/// The scan runs in input order, so "first failure wins" is deterministic:
/// trailing successes after a failure never change the outcome.
pub fn combine<T>(results: impl IntoIterator<Item = DomainResult<T>>) -> DomainResult<Vec<T>> {
    let results = results.into_iter();
    let mut values = Vec::with_capacity(results.size_hint().0);
    for result in results {
        values.push(result?);
    }
    Ok(values)
}

/// [`combine`] for unit results (validation pipelines).
pub fn combine_unit(results: impl IntoIterator<Item = DomainResult<()>>) -> DomainResult<()> {
    for result in results {
        result?;
    }
    Ok(())
}

/// Resolve independent pending computations concurrently, then reduce them
/// first-failure-wins.
///
/// The computations have no ordering dependency between them; only the final
/// reduction is ordered, using the original input order as the tie-break for
/// "first". Callers own any timeout behaviour before handing futures in.
pub async fn combine_async<T, F>(futures: impl IntoIterator<Item = F>) -> DomainResult<Vec<T>>
where
    F: Future<Output = DomainResult<T>>,
{
    combine(join_all(futures).await)
}

/// Gather every validation failure instead of stopping at the first.
///
/// Returns all success values when nothing failed. A single validation
/// failure comes back unchanged; two or more are wrapped in
/// [`DomainError::AggregateValidation`], preserving input order. Any
/// non-validation error short-circuits unchanged, since it signals something
/// other than bad field input.
pub fn collect_validations<T>(
    results: impl IntoIterator<Item = DomainResult<T>>,
) -> DomainResult<Vec<T>> {
    let mut values = Vec::new();
    let mut failures: Vec<ValidationError> = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(DomainError::Validation(failure)) => failures.push(failure),
            Err(DomainError::AggregateValidation(mut nested)) => failures.append(&mut nested),
            Err(other) => return Err(other),
        }
    }
    if failures.is_empty() {
        Ok(values)
    } else if failures.len() == 1 {
        Err(DomainError::Validation(failures.remove(0)))
    } else {
        Err(DomainError::AggregateValidation(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_returns_all_values_when_everything_succeeds() {
        let combined = combine(vec![Ok(1), Ok(2), Ok(3)]).unwrap();
        assert_eq!(combined, vec![1, 2, 3]);
    }

    #[test]
    fn combine_returns_first_failure_unchanged() {
        let results: Vec<DomainResult<u32>> = vec![
            Ok(1),
            Ok(2),
            Err(DomainError::validation("x")),
            Ok(4),
            Err(DomainError::validation("y")),
        ];

        let err = combine(results).unwrap_err();
        assert_eq!(err, DomainError::validation("x"));
    }

    #[test]
    fn combine_unit_passes_validation_pipelines() {
        assert!(combine_unit(vec![Ok(()), Ok(())]).is_ok());

        let err = combine_unit(vec![Ok(()), Err(DomainError::business_rule("no"))]).unwrap_err();
        assert_eq!(err, DomainError::business_rule("no"));
    }

    #[test]
    fn collect_validations_reports_every_failure_in_order() {
        let results: Vec<DomainResult<u32>> = vec![
            Err(DomainError::validation_for("email", "malformed")),
            Ok(7),
            Err(DomainError::validation_for("cpf", "check digit mismatch")),
        ];

        match collect_validations(results).unwrap_err() {
            DomainError::AggregateValidation(failures) => {
                assert_eq!(failures.len(), 2);
                assert_eq!(failures[0].field.as_deref(), Some("email"));
                assert_eq!(failures[1].field.as_deref(), Some("cpf"));
            }
            other => panic!("expected AggregateValidation, got {other:?}"),
        }
    }

    #[test]
    fn collect_validations_keeps_a_single_failure_unwrapped() {
        let results: Vec<DomainResult<u32>> =
            vec![Ok(1), Err(DomainError::validation_for("cep", "must have 8 digits"))];

        let err = collect_validations(results).unwrap_err();
        assert_eq!(err, DomainError::validation_for("cep", "must have 8 digits"));
    }

    #[test]
    fn collect_validations_short_circuits_on_non_validation_errors() {
        let results: Vec<DomainResult<u32>> = vec![
            Err(DomainError::validation("ignored")),
            Err(DomainError::concurrency("stale version")),
        ];

        let err = collect_validations(results).unwrap_err();
        assert_eq!(err, DomainError::concurrency("stale version"));
    }

    async fn ready(result: DomainResult<u32>) -> DomainResult<u32> {
        result
    }

    #[tokio::test]
    async fn combine_async_resolves_all_values() {
        let futures = vec![ready(Ok(1)), ready(Ok(2)), ready(Ok(3))];
        assert_eq!(combine_async(futures).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn combine_async_uses_input_order_as_tie_break() {
        // Two failures; the reduction must pick the first by input order,
        // not by completion order.
        let futures = vec![
            ready(Err(DomainError::validation("first"))),
            ready(Ok(2)),
            ready(Err(DomainError::validation("second"))),
        ];

        let err = combine_async(futures).await.unwrap_err();
        assert_eq!(err, DomainError::validation("first"));
    }
}
