//! Fault types for misuse of the unsafe accessors and constructors.
//!
//! These are not represented failures. A represented failure is an
//! error-side [`Either`](crate::control::Either) or a failed
//! [`Outcome`](crate::outcome::Outcome); the types here signal a call-site
//! bug such as reading the value of an `Either` that was never checked.

use std::fmt;

/// Raised when an accessor is invoked against the wrong variant.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::InvalidStateError;
///
/// let error = InvalidStateError {
///     operation: "Either::get_value_or_fail",
///     found: "left",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Either::get_value_or_fail: Either is left."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidStateError {
    /// The accessor that was called.
    pub operation: &'static str,
    /// The side the value was actually on.
    pub found: &'static str,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: Either is {}.", self.operation, self.found)
    }
}

impl std::error::Error for InvalidStateError {}

impl InvalidStateError {
    /// Emits the fault as a `warn` event and hands it back.
    #[inline]
    pub(crate) fn reported(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            operation = self.operation,
            found = self.found,
            "accessor called on the wrong variant"
        );
        self
    }
}

/// Raised when a failure that must carry at least one error is built from
/// an empty error list.
///
/// # Examples
///
/// ```rust
/// use outcomes::error::EmptyErrorsError;
///
/// let error = EmptyErrorsError { constructor: "ServiceResult::try_not_found" };
/// assert_eq!(
///     format!("{}", error),
///     "ServiceResult::try_not_found: at least one error is required."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyErrorsError {
    /// The constructor that rejected the list.
    pub constructor: &'static str,
}

impl fmt::Display for EmptyErrorsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: at least one error is required.",
            self.constructor
        )
    }
}

impl std::error::Error for EmptyErrorsError {}

impl EmptyErrorsError {
    #[inline]
    pub(crate) fn reported(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            constructor = self.constructor,
            "failure constructor received no errors"
        );
        self
    }
}

/// Every fault this crate can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// An accessor was called on the wrong variant.
    InvalidState(InvalidStateError),
    /// A failure constructor was handed no errors.
    EmptyErrors(EmptyErrorsError),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(error) => write!(formatter, "{error}"),
            Self::EmptyErrors(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OutcomeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState(error) => Some(error),
            Self::EmptyErrors(error) => Some(error),
        }
    }
}

impl From<InvalidStateError> for OutcomeError {
    fn from(error: InvalidStateError) -> Self {
        Self::InvalidState(error)
    }
}

impl From<EmptyErrorsError> for OutcomeError {
    fn from(error: EmptyErrorsError) -> Self {
        Self::EmptyErrors(error)
    }
}
