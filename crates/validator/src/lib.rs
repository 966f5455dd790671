//! # paramguard-validator
//!
//! Inclusive range validation for request parameters that have already been
//! coerced to typed values.
//!
//! ## Quick Start
//!
//! ```rust
//! use paramguard_validator::prelude::*;
//!
//! let validator = between(1, 10);
//! let scope = ScopeContext::root().with_required(true);
//!
//! let params = ParamValue::object([("count", ParamValue::from(vec![2_i64, 5, 9]))]);
//! assert!(validator.validate_param("count", &params, &scope).is_ok());
//! ```
//!
//! ## Bounds
//!
//! Endpoints are [`Bound`](bound::Bound)s: fixed values, or resolvers that
//! are called afresh on every validation (e.g. "now" or a random cap). A
//! single call resolves each endpoint exactly once and reuses it for every
//! element of a collection.
//!
//! ## Type guard
//!
//! The value's [representative kind](value::ParamValue::representative_kind)
//! must equal the kind of the resolved `from` exactly before any comparison
//! happens. `5.4` is rejected by the integer interval `[4, 7]`.
//!
//! ## Declarations
//!
//! [`declaration::check_between`] rejects a parameter declaration whose
//! fixed default or fixed bounds already contradict its declared type.
//! [`options::ParamOptions`] reads such declarations from configuration.

pub mod between;
pub mod bound;
pub mod declaration;
pub mod error;
pub mod foundation;
pub mod options;
pub mod prelude;
pub mod scope;
pub mod value;
