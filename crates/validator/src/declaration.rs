//! Declaration-time consistency checks for range options.
//!
//! When a parameter is declared, its type, default and interval are
//! checked against each other once. Anything that depends on a resolver is
//! skipped here and left to request time.

use crate::between::within;
use crate::bound::{Bound, Interval};
use crate::error::DeclarationError;
use crate::value::{ParamType, ParamValue};

/// The options of a parameter declaration relevant to range checking.
#[derive(Debug, Clone)]
pub struct ParamDeclaration {
    pub name: String,
    pub param_type: Option<ParamType>,
    pub default: Option<Bound<ParamValue>>,
    pub between: Interval<ParamValue>,
}

impl ParamDeclaration {
    /// Creates a declaration with an interval and no type or default.
    pub fn new(name: impl Into<String>, between: Interval<ParamValue>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            default: None,
            between,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = Some(param_type);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_default(mut self, default: impl Into<Bound<ParamValue>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Rejects declarations whose fixed options already contradict each other.
///
/// - Fixed bounds must have exactly the declared element kind.
/// - A fixed default must itself pass the range check against fixed bounds.
///
/// # Examples
///
/// ```rust
/// use paramguard_validator::bound::Interval;
/// use paramguard_validator::declaration::{ParamDeclaration, check_between};
/// use paramguard_validator::value::{ParamType, ValueKind};
///
/// let decl = ParamDeclaration::new("v", Interval::new(8.5, 11))
///     .with_type(ParamType::Scalar(ValueKind::Integer));
/// assert!(check_between(&decl).is_err());
/// ```
pub fn check_between(decl: &ParamDeclaration) -> Result<(), DeclarationError> {
    let Some(bounds) = decl.between.as_fixed() else {
        tracing::trace!(param = %decl.name, "between uses a resolver, deferring to request time");
        return Ok(());
    };

    if let Some(param_type) = decl.param_type {
        let expected = param_type.element_kind();
        if bounds.from.kind() != expected || bounds.to.kind() != expected {
            tracing::debug!(param = %decl.name, %param_type, "between bounds do not match declared type");
            return Err(DeclarationError::incompatible(
                &decl.name,
                ("type", param_type),
                ("between", bounds),
            ));
        }
    }

    if let Some(default) = decl.default.as_ref().and_then(Bound::as_fixed)
        && !within(default, bounds.from, bounds.to)
    {
        tracing::debug!(param = %decl.name, %default, "default is outside between");
        return Err(DeclarationError::incompatible(
            &decl.name,
            ("default", default),
            ("between", bounds),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;
    use pretty_assertions::assert_eq;

    fn integer() -> ParamType {
        ParamType::Scalar(ValueKind::Integer)
    }

    #[test]
    fn consistent_declaration_passes() {
        let decl = ParamDeclaration::new("v", Interval::new(8, 12))
            .with_type(integer())
            .with_default(ParamValue::from(10));
        assert!(check_between(&decl).is_ok());
    }

    #[test]
    fn array_type_checks_element_kind() {
        let decl = ParamDeclaration::new("v", Interval::new(8, 12))
            .with_type(ParamType::ArrayOf(ValueKind::Integer))
            .with_default(ParamValue::from(10));
        assert!(check_between(&decl).is_ok());
    }

    #[test]
    fn bound_kind_must_match_type() {
        let decl = ParamDeclaration::new("v", Interval::new(8.5, 11)).with_type(integer());
        let error = check_between(&decl).unwrap_err();
        assert_eq!(
            error,
            DeclarationError::IncompatibleOptionValues {
                param: "v".into(),
                option1: "type".into(),
                value1: "integer".into(),
                option2: "between".into(),
                value2: "[8.5, 11]".into(),
            }
        );
    }

    #[test]
    fn default_outside_interval_is_rejected() {
        let decl = ParamDeclaration::new("v", Interval::new(1, 7)).with_default(ParamValue::from(8));
        let error = check_between(&decl).unwrap_err();
        assert_eq!(
            error.to_string(),
            "`v`: default 8 is incompatible with between [1, 7]"
        );
    }

    #[test]
    fn default_of_wrong_kind_is_rejected() {
        let decl = ParamDeclaration::new("v", Interval::new(1, 7)).with_default(ParamValue::from(4.0));
        assert!(check_between(&decl).is_err());
    }

    #[test]
    fn resolver_default_is_deferred() {
        let decl = ParamDeclaration::new("v", Interval::new(1, 7))
            .with_default(Bound::resolver(|| ParamValue::from(100)));
        assert!(check_between(&decl).is_ok());
    }

    #[test]
    fn resolver_bound_is_deferred() {
        let decl = ParamDeclaration::new(
            "v",
            Interval::from_bounds(Bound::resolver(|| ParamValue::from(1)), Bound::fixed(10)),
        )
        .with_type(ParamType::Scalar(ValueKind::Float))
        .with_default(ParamValue::from(100));
        assert!(check_between(&decl).is_ok());
    }
}
