//! Static range declarations loaded from configuration.
//!
//! Intervals written in JSON (or any serde format) accept either a pair or
//! a map:
//!
//! ```json
//! { "name": "v", "type": "integer", "default": 10, "between": [8, 12] }
//! { "name": "v", "type": {"array_of": "float"}, "between": {"from": 0.0, "to": 10.0} }
//! ```
//!
//! Options only describe fixed endpoints. Resolver bounds are code-only.

use serde::Deserialize;

use crate::between::BetweenValidator;
use crate::bound::Interval;
use crate::declaration::{ParamDeclaration, check_between};
use crate::error::DeclarationError;
use crate::value::{ParamType, ParamValue};

/// A fixed interval as written in configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BetweenOptions {
    /// `[from, to]`
    Pair([ParamValue; 2]),
    /// `{"from": .., "to": ..}`
    Bounds { from: ParamValue, to: ParamValue },
}

impl BetweenOptions {
    /// Splits the options into `(from, to)`.
    #[must_use]
    pub fn into_endpoints(self) -> (ParamValue, ParamValue) {
        match self {
            Self::Pair([from, to]) | Self::Bounds { from, to } => (from, to),
        }
    }
}

impl From<BetweenOptions> for Interval<ParamValue> {
    fn from(options: BetweenOptions) -> Self {
        let (from, to) = options.into_endpoints();
        Self::new(from, to)
    }
}

/// A parameter declaration as written in configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamOptions {
    pub name: String,
    #[serde(default, rename = "type")]
    pub param_type: Option<ParamType>,
    #[serde(default)]
    pub default: Option<ParamValue>,
    pub between: BetweenOptions,
}

impl ParamOptions {
    /// Converts into a declaration without checking it.
    #[must_use]
    pub fn into_declaration(self) -> ParamDeclaration {
        let mut decl = ParamDeclaration::new(self.name, self.between.into());
        decl.param_type = self.param_type;
        decl.default = self.default.map(Into::into);
        decl
    }

    /// Checks the declaration and builds its request-time validator.
    pub fn build(self) -> Result<BetweenValidator, DeclarationError> {
        let decl = self.into_declaration();
        check_between(&decl)?;
        Ok(BetweenValidator::new(decl.between))
    }
}
