//! The validator trait and request-level aggregation.

use crate::error::{ValidationError, ValidationErrors};
use crate::scope::ScopeContext;
use crate::value::ParamValue;

/// A validator for one named parameter within a scope's coerced values.
///
/// `params` is the full set of coerced parameters of the enclosing scope,
/// normally a [`ParamValue::Object`]. Implementations must treat anything
/// else as "nothing to check".
pub trait ParamValidator {
    /// Validates the parameter `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the parameter is acceptable (or not this validator's concern)
    /// * `Err(ValidationError)` naming the scope-qualified parameter otherwise
    fn validate_param(
        &self,
        name: &str,
        params: &ParamValue,
        scope: &ScopeContext,
    ) -> Result<(), ValidationError>;
}

impl<V: ParamValidator + ?Sized> ParamValidator for &V {
    fn validate_param(
        &self,
        name: &str,
        params: &ParamValue,
        scope: &ScopeContext,
    ) -> Result<(), ValidationError> {
        (**self).validate_param(name, params, scope)
    }
}

/// One parameter's validator together with its name and scope.
#[derive(Clone, Copy)]
pub struct ParamCheck<'a> {
    pub name: &'a str,
    pub scope: &'a ScopeContext,
    pub validator: &'a dyn ParamValidator,
}

/// Runs every check against the same scope values and collects all
/// failures in order.
pub fn validate_params(checks: &[ParamCheck<'_>], params: &ParamValue) -> Result<(), ValidationErrors> {
    let errors: ValidationErrors = checks
        .iter()
        .filter_map(|check| {
            check
                .validator
                .validate_param(check.name, params, check.scope)
                .err()
        })
        .collect();

    errors.into_result(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageKey;

    struct AlwaysValid;

    impl ParamValidator for AlwaysValid {
        fn validate_param(&self, _: &str, _: &ParamValue, _: &ScopeContext) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl ParamValidator for AlwaysFails {
        fn validate_param(
            &self,
            name: &str,
            _: &ParamValue,
            scope: &ScopeContext,
        ) -> Result<(), ValidationError> {
            Err(ValidationError::new([scope.full_name(name)], MessageKey::Presence))
        }
    }

    #[test]
    fn all_passing_checks_succeed() {
        let scope = ScopeContext::root();
        let checks = [
            ParamCheck { name: "a", scope: &scope, validator: &AlwaysValid },
            ParamCheck { name: "b", scope: &scope, validator: &AlwaysValid },
        ];
        assert!(validate_params(&checks, &ParamValue::object::<&str, _>([])).is_ok());
    }

    #[test]
    fn failures_are_collected_in_order() {
        let root = ScopeContext::root();
        let nested = ScopeContext::nested(["outer"]);
        let checks = [
            ParamCheck { name: "a", scope: &root, validator: &AlwaysFails },
            ParamCheck { name: "b", scope: &root, validator: &AlwaysValid },
            ParamCheck { name: "c", scope: &nested, validator: &AlwaysFails },
        ];

        let errors = validate_params(&checks, &ParamValue::Null).unwrap_err();
        let names: Vec<&str> = errors
            .errors()
            .iter()
            .flat_map(|e| e.params().iter().map(String::as_str))
            .collect();
        assert_eq!(names, vec!["a", "outer[c]"]);
    }
}
