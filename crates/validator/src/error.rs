//! Error types for parameter validation.
//!
//! Request-time failures are [`ValidationError`]s: a list of
//! scope-qualified parameter names plus a [`MessageKey`] classifying the
//! failure. They deliberately carry no bound values and no offending
//! element. Declaration-time failures are [`DeclarationError`]s.

use std::fmt;

// ============================================================================
// MESSAGE KEY
// ============================================================================

/// Classification of a request-time validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// The value is not one the parameter permits (range violation).
    Values,
    /// The value could not be coerced to the declared type.
    Coerce,
    /// A required parameter is missing.
    Presence,
}

impl MessageKey {
    /// Machine-readable code for programmatic handling and i18n lookups.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::Coerce => "coerce",
            Self::Presence => "presence",
        }
    }

    /// Default English message, rendered after the parameter names.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Values => "does not have a valid value",
            Self::Coerce => "is invalid",
            Self::Presence => "is missing",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A request-time validation failure.
///
/// # Examples
///
/// ```rust
/// use paramguard_validator::error::{MessageKey, ValidationError};
///
/// let error = ValidationError::range_violation("v");
/// assert_eq!(error.message_key(), MessageKey::Values);
/// assert_eq!(error.to_string(), "v does not have a valid value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {}", .params.join(", "), .message_key.message())]
pub struct ValidationError {
    params: Vec<String>,
    message_key: MessageKey,
}

impl ValidationError {
    /// Creates an error for the given scope-qualified parameter names.
    pub fn new<I, S>(params: I, message_key: MessageKey) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            message_key,
        }
    }

    /// Creates the "value not permitted" failure for one parameter.
    pub fn range_violation(full_name: impl Into<String>) -> Self {
        Self::new([full_name], MessageKey::Values)
    }

    /// Scope-qualified names of the offending parameters.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[must_use]
    pub const fn message_key(&self) -> MessageKey {
        self.message_key
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.message_key.code()
    }

    #[must_use]
    pub const fn is_range_violation(&self) -> bool {
        matches!(self.message_key, MessageKey::Values)
    }

    /// Validation failures are deterministic for a given input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// DECLARATION ERROR
// ============================================================================

/// A parameter declaration whose options contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// Two options of one declaration cannot both hold.
    #[error("`{param}`: {option1} {value1} is incompatible with {option2} {value2}")]
    IncompatibleOptionValues {
        param: String,
        option1: String,
        value1: String,
        option2: String,
        value2: String,
    },
}

impl DeclarationError {
    /// Builds an [`IncompatibleOptionValues`](Self::IncompatibleOptionValues)
    /// from two `(option, value)` pairs.
    pub fn incompatible<A, B>(
        param: impl Into<String>,
        (option1, value1): (&str, A),
        (option2, value2): (&str, B),
    ) -> Self
    where
        A: fmt::Display,
        B: fmt::Display,
    {
        Self::IncompatibleOptionValues {
            param: param.into(),
            option1: option1.to_owned(),
            value1: value1.to_string(),
            option2: option2.to_owned(),
            value2: value2.to_string(),
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IncompatibleOptionValues { .. } => "PARAM_INCOMPATIBLE_OPTIONS",
        }
    }
}
