//! Inclusive range validation for coerced request parameters.
//!
//! [`BetweenValidator`] checks that a parameter (or every element of a
//! collection parameter) lies in a closed interval whose endpoints may be
//! fixed or computed per request.
//!
//! The check runs in a fixed order:
//!
//! 1. A scope that is not a mapping is ignored.
//! 2. A missing or null value passes unless the parameter is required at
//!    the root scope.
//! 3. Both endpoints are resolved once for the call.
//! 4. The value's representative kind must equal the kind of `from`
//!    exactly. An integer `from` rejects a float value even when it is
//!    numerically inside the interval.
//! 5. Every element must satisfy `from <= element <= to`.
//!
//! Any failure yields the same [`ValidationError`] with
//! [`MessageKey::Values`](crate::error::MessageKey::Values).
//!
//! # Examples
//!
//! ```rust
//! use paramguard_validator::prelude::*;
//!
//! let validator = between(1, 10);
//! let root = ScopeContext::root();
//!
//! let params = ParamValue::object([("v", ParamValue::from(5))]);
//! assert!(validator.validate_param("v", &params, &root).is_ok());
//!
//! let params = ParamValue::object([("v", ParamValue::from(11))]);
//! let error = validator.validate_param("v", &params, &root).unwrap_err();
//! assert_eq!(error.to_string(), "v does not have a valid value");
//! ```

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::bound::{Bound, Interval};
use crate::error::ValidationError;
use crate::foundation::ParamValidator;
use crate::scope::ScopeContext;
use crate::value::ParamValue;

/// Returns true if `value` passes the kind guard and every element lies in
/// `[from, to]`.
///
/// Null values never pass. Arrays are judged by their first element's
/// kind, so an empty array only passes against a null `from`.
#[must_use]
pub fn within(value: &ParamValue, from: &ParamValue, to: &ParamValue) -> bool {
    if value.is_null() || value.representative_kind() != from.kind() {
        return false;
    }

    value.as_elements().iter().all(|element| {
        matches!(from.compare(element), Some(Ordering::Less | Ordering::Equal))
            && matches!(element.compare(to), Some(Ordering::Less | Ordering::Equal))
    })
}

/// Validates that a parameter lies within an inclusive interval.
#[derive(Debug, Clone)]
pub struct BetweenValidator {
    interval: Interval<ParamValue>,
}

impl BetweenValidator {
    /// Creates a validator for the given interval.
    pub fn new(interval: Interval<ParamValue>) -> Self {
        Self { interval }
    }

    /// Creates a validator from a fixed inclusive range, e.g. `0.0..=10.0`.
    pub fn from_range<T: Into<ParamValue>>(range: RangeInclusive<T>) -> Self {
        let (from, to) = range.into_inner();
        Self::new(Interval::new(from, to))
    }

    /// Creates a validator from individual bounds.
    pub fn from_bounds(from: Bound<ParamValue>, to: Bound<ParamValue>) -> Self {
        Self::new(Interval::from_bounds(from, to))
    }
}

impl ParamValidator for BetweenValidator {
    fn validate_param(
        &self,
        name: &str,
        params: &ParamValue,
        scope: &ScopeContext,
    ) -> Result<(), ValidationError> {
        let Some(params) = params.as_object() else {
            return Ok(());
        };

        let value = params.get(name).filter(|value| !value.is_null());
        if value.is_none() && !scope.required_for_root_scope() {
            return Ok(());
        }

        let range = self.interval.resolve();
        tracing::trace!(param = name, from = %range.from, to = %range.to, "resolved between bounds");

        if value.is_some_and(|value| within(value, &range.from, &range.to)) {
            return Ok(());
        }

        let full_name = scope.full_name(name);
        tracing::debug!(param = %full_name, "parameter does not have a valid value");
        Err(ValidationError::range_violation(full_name))
    }
}

/// Creates a [`BetweenValidator`] with fixed endpoints.
pub fn between(from: impl Into<ParamValue>, to: impl Into<ParamValue>) -> BetweenValidator {
    BetweenValidator::new(Interval::new(from, to))
}

impl From<Interval<ParamValue>> for BetweenValidator {
    fn from(interval: Interval<ParamValue>) -> Self {
        Self::new(interval)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageKey;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn params(value: impl Into<ParamValue>) -> ParamValue {
        ParamValue::object([("v", value.into())])
    }

    fn check(validator: &BetweenValidator, value: impl Into<ParamValue>) -> Result<(), ValidationError> {
        validator.validate_param("v", &params(value), &ScopeContext::root())
    }

    #[rstest]
    #[case(1, true)]
    #[case(5, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn integer_bounds_are_inclusive(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(check(&between(1, 10), value).is_ok(), ok);
    }

    #[rstest]
    #[case::inside(5, true)]
    #[case::at_integer_end(0, true)]
    #[case::above_float_end(11, false)]
    fn integer_value_against_float_upper_bound(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(check(&between(0, 10.5), value).is_ok(), ok);
    }

    #[test]
    fn float_value_fails_integer_bounds() {
        assert!(check(&between(4, 7), 5.4).is_err());
        assert!(check(&between(4.0, 7.0), 5.4).is_ok());
    }

    #[test]
    fn collections_need_every_element_in_range() {
        let validator = between(1, 10);
        assert!(check(&validator, vec![2_i64, 5, 9]).is_ok());
        assert!(check(&validator, vec![2_i64, 5, 11]).is_err());
    }

    #[test]
    fn mixed_kind_collection_fails() {
        let value = ParamValue::Array(vec![ParamValue::from(2), ParamValue::from(3.0)]);
        assert!(check(&between(1, 10), value).is_err());
    }

    #[test]
    fn empty_collection_fails_kind_guard() {
        assert!(check(&between(1, 10), ParamValue::Array(vec![])).is_err());
    }

    #[test]
    fn non_mapping_scope_is_ignored() {
        let validator = between(1, 10);
        let scope = ScopeContext::root().with_required(true);
        assert!(validator.validate_param("v", &ParamValue::from(99), &scope).is_ok());
        assert!(validator.validate_param("v", &ParamValue::Null, &scope).is_ok());
    }

    #[test]
    fn absence_rules() {
        let validator = between(1, 10);
        let empty = ParamValue::object::<&str, _>([]);
        let null = params(ParamValue::Null);

        assert!(validator.validate_param("v", &empty, &ScopeContext::root()).is_ok());
        assert!(
            validator
                .validate_param("v", &empty, &ScopeContext::nested(["optional"]).with_required(true))
                .is_ok()
        );

        let root_required = ScopeContext::root().with_required(true);
        assert!(validator.validate_param("v", &empty, &root_required).is_err());
        assert!(validator.validate_param("v", &null, &root_required).is_err());
    }

    #[test]
    fn false_is_a_present_value() {
        let validator = between(1, 10);
        let error = check(&validator, false).unwrap_err();
        assert_eq!(error.message_key(), MessageKey::Values);

        let nested = ScopeContext::nested(["optional"]);
        assert!(validator.validate_param("v", &params(false), &nested).is_err());
    }

    #[test]
    fn failure_names_scoped_param() {
        let error = between(1, 10)
            .validate_param("v", &params(50), &ScopeContext::nested(["filters"]))
            .unwrap_err();
        assert_eq!(error.params(), ["filters[v]".to_owned()]);
        assert_eq!(error.message_key(), MessageKey::Values);
    }

    #[test]
    fn resolver_invoked_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let validator = BetweenValidator::from_bounds(
            Bound::resolver(move || {
                counted.fetch_add(1, AtomicOrdering::SeqCst);
                ParamValue::from(1)
            }),
            Bound::fixed(10),
        );

        assert!(check(&validator, vec![1_i64, 2, 3, 4, 5]).is_ok());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);

        assert!(check(&validator, 7).is_ok());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 2);
    }

    #[test]
    fn resolver_not_invoked_when_absence_is_tolerated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let validator = BetweenValidator::from_bounds(
            Bound::resolver(move || {
                counted.fetch_add(1, AtomicOrdering::SeqCst);
                ParamValue::from(1)
            }),
            Bound::fixed(10),
        );

        let empty = ParamValue::object::<&str, _>([]);
        assert!(validator.validate_param("v", &empty, &ScopeContext::root()).is_ok());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn unordered_kinds_always_fail() {
        assert!(!within(&ParamValue::from(true), &ParamValue::from(false), &ParamValue::from(true)));
        assert!(!within(&ParamValue::Null, &ParamValue::Null, &ParamValue::Null));
        assert!(!within(&ParamValue::from(f64::NAN), &ParamValue::from(0.0), &ParamValue::from(1.0)));
    }

    #[test]
    fn float_range_bounds() {
        let validator = BetweenValidator::from_range(0.0..=10.0);
        assert!(check(&validator, 5.2).is_ok());
        assert!(check(&validator, vec![8.6, 7.5, 3.0, 0.9]).is_ok());
        assert!(check(&validator, vec![8.6, 75.0, 3.0, 0.9]).is_err());
        assert!(check(&validator, "a").is_err());
    }

    #[test]
    fn reversed_interval_admits_nothing() {
        assert!(check(&between(10, 1), 5).is_err());
    }

    #[test]
    fn strings_compare_lexicographically() {
        let validator = between("a", "b");
        assert!(check(&validator, "a").is_ok());
        assert!(check(&validator, "az").is_ok());
        assert!(check(&validator, "c").is_err());
    }
}
