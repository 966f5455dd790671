//! Prelude module for convenient imports.
//!
//! ```rust
//! use paramguard_validator::prelude::*;
//!
//! let validator = BetweenValidator::from_bounds(Bound::resolver(|| ParamValue::from(4)), Bound::fixed(7));
//! let params = ParamValue::object([("v", ParamValue::from(5.4))]);
//! assert!(validator.validate_param("v", &params, &ScopeContext::root()).is_err());
//! ```

pub use crate::between::{BetweenValidator, between, within};
pub use crate::bound::{Bound, Interval, ResolvedInterval};
pub use crate::declaration::{ParamDeclaration, check_between};
pub use crate::error::{DeclarationError, MessageKey, ValidationError, ValidationErrors};
pub use crate::foundation::{ParamCheck, ParamValidator, validate_params};
pub use crate::options::{BetweenOptions, ParamOptions};
pub use crate::scope::ScopeContext;
pub use crate::value::{ParamType, ParamValue, ValueKind};
