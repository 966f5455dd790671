//! Scope descriptor handed to validators by the parameter-tree walker.

use std::borrow::Cow;
use std::ops::Deref;

/// Where a parameter sits in the request's parameter tree and whether it
/// was declared required.
///
/// The scope path is the chain of enclosing parameter names, outermost
/// first. An empty path is the root scope.
///
/// # Examples
///
/// ```rust
/// use paramguard_validator::scope::ScopeContext;
///
/// let root = ScopeContext::root().with_required(true);
/// assert!(root.is_root());
/// assert_eq!(root.full_name("v"), "v");
///
/// let nested = ScopeContext::nested(["filters", "range"]);
/// assert!(!nested.is_root());
/// assert_eq!(nested.full_name("v"), "filters[range][v]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeContext {
    required: bool,
    path: Vec<Cow<'static, str>>,
}

impl ScopeContext {
    /// Creates the root scope for an optional parameter.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a nested scope from the enclosing parameter names.
    pub fn nested<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            required: false,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets whether the parameter under test was declared required.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Returns a child scope one level deeper, keeping the required flag.
    #[must_use]
    pub fn child(&self, name: impl Into<Cow<'static, str>>) -> Self {
        let mut path = self.path.clone();
        path.push(name.into());
        Self {
            required: self.required,
            path,
        }
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Required parameters are only enforced at the root; nested required
    /// checks belong to the presence validator.
    #[must_use]
    pub fn required_for_root_scope(&self) -> bool {
        self.required && self.is_root()
    }

    /// Renders the scope-qualified name used in error reports.
    #[must_use]
    pub fn full_name(&self, attr: &str) -> String {
        let mut segments = self.path.iter().map(Deref::deref).chain([attr]);
        let mut name = segments.next().unwrap_or_default().to_owned();
        for segment in segments {
            name.push('[');
            name.push_str(segment);
            name.push(']');
        }
        name
    }
}
