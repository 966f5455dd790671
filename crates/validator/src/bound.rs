//! Interval endpoints that are either fixed or computed per call.
//!
//! A [`Bound`] resolver is invoked every time the interval is resolved.
//! Nothing is memoized: a resolver returning the current time or a random
//! number yields a fresh endpoint on each validation.
//!
//! # Examples
//!
//! ```rust
//! use paramguard_validator::bound::{Bound, Interval};
//!
//! let fixed: Interval<i64> = Interval::new(1, 10);
//! assert_eq!(fixed.resolve().to, 10);
//!
//! let lazy: Interval<i64> = Interval::from_bounds(Bound::resolver(|| 4), Bound::fixed(7));
//! assert_eq!(lazy.resolve().from, 4);
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

// ============================================================================
// BOUND
// ============================================================================

/// One endpoint of an [`Interval`].
pub enum Bound<T> {
    /// A value known at declaration time.
    Fixed(T),
    /// A zero-argument function producing the value on each resolution.
    Resolver(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Bound<T> {
    /// Creates a fixed bound.
    pub fn fixed(value: impl Into<T>) -> Self {
        Self::Fixed(value.into())
    }

    /// Creates a bound computed on every resolution.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(f))
    }

    /// Returns the fixed value, if any.
    #[must_use]
    pub const fn as_fixed(&self) -> Option<&T> {
        match self {
            Self::Fixed(value) => Some(value),
            Self::Resolver(_) => None,
        }
    }
}

impl<T: Clone> Bound<T> {
    /// Produces the concrete value for this call.
    pub fn resolve(&self) -> T {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Resolver(f) => f(),
        }
    }
}

impl<T: Clone> Clone for Bound<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(value) => Self::Fixed(value.clone()),
            Self::Resolver(f) => Self::Resolver(Arc::clone(f)),
        }
    }
}

// Manual Debug impl since the resolver closure has none
impl<T: fmt::Debug> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl<T> From<T> for Bound<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

// ============================================================================
// INTERVAL
// ============================================================================

/// A closed interval `[from, to]`.
///
/// Endpoints are never checked against each other; an interval with
/// `from > to` simply admits nothing.
#[derive(Debug, Clone)]
pub struct Interval<T> {
    from: Bound<T>,
    to: Bound<T>,
}

impl<T> Interval<T> {
    /// Creates an interval from two fixed endpoints.
    pub fn new(from: impl Into<T>, to: impl Into<T>) -> Self {
        Self {
            from: Bound::Fixed(from.into()),
            to: Bound::Fixed(to.into()),
        }
    }

    /// Creates an interval from any mix of fixed and resolver bounds.
    pub fn from_bounds(from: Bound<T>, to: Bound<T>) -> Self {
        Self { from, to }
    }

    /// Returns both endpoints when neither needs a resolver call.
    #[must_use]
    pub fn as_fixed(&self) -> Option<ResolvedInterval<&T>> {
        Some(ResolvedInterval {
            from: self.from.as_fixed()?,
            to: self.to.as_fixed()?,
        })
    }
}

impl<T: Clone> Interval<T> {
    /// Resolves both endpoints, invoking each resolver exactly once.
    pub fn resolve(&self) -> ResolvedInterval<T> {
        ResolvedInterval {
            from: self.from.resolve(),
            to: self.to.resolve(),
        }
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (from, to) = range.into_inner();
        Self::from_bounds(Bound::Fixed(from), Bound::Fixed(to))
    }
}

/// Concrete endpoints for a single validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval<T> {
    pub from: T,
    pub to: T,
}

impl<T: fmt::Display> fmt::Display for ResolvedInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}
