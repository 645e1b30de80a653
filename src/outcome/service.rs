//! `ServiceResult` - an [`Outcome`] over the canonical error list.

use super::Outcome;
use crate::control::Either;
use crate::error::EmptyErrorsError;
use crate::error_list::{ErrorEntry, ErrorList};

/// What a [`ServiceResult`] means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// A plain success.
    Success,
    /// A plain failure.
    Failure,
    /// A success that created something.
    Created,
    /// A success that deleted something.
    Deleted,
    /// A failure because something does not exist.
    NotFound,
    /// A failure because the caller is not allowed.
    Unauthorized,
}

impl ServiceKind {
    /// Returns `true` for the successful kinds.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::Created | Self::Deleted)
    }
}

/// An [`Outcome<ErrorList>`] tagged with a [`ServiceKind`].
///
/// Two service results are equal only if they have the same kind and the
/// same errors, so `created()` and `success()` differ.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::{Attempt, Either};
/// use outcomes::outcome::ServiceResult;
///
/// let rejected: Attempt<u32> = Attempt::failure([("field", "required")]);
/// assert_eq!(
///     ServiceResult::from_either(rejected),
///     ServiceResult::failure([("field", "required")])
/// );
///
/// let accepted: Attempt<u32> = Either::Right(7);
/// assert_eq!(ServiceResult::from(accepted), ServiceResult::success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceResult {
    kind: ServiceKind,
    outcome: Outcome<ErrorList>,
}

impl ServiceResult {
    #[inline]
    fn successful(kind: ServiceKind) -> Self {
        Self {
            kind,
            outcome: Outcome::success(),
        }
    }

    #[inline]
    const fn failed(kind: ServiceKind, errors: ErrorList) -> Self {
        Self {
            kind,
            outcome: Outcome::failure(errors),
        }
    }

    fn failed_non_empty(
        kind: ServiceKind,
        constructor: &'static str,
        errors: ErrorList,
    ) -> Result<Self, EmptyErrorsError> {
        if errors.join("").is_empty() {
            Err(EmptyErrorsError { constructor }.reported())
        } else {
            Ok(Self::failed(kind, errors))
        }
    }

    /// A plain success with no errors.
    #[inline]
    pub fn success() -> Self {
        Self::successful(ServiceKind::Success)
    }

    /// A success that created something.
    #[inline]
    pub fn created() -> Self {
        Self::successful(ServiceKind::Created)
    }

    /// A success that deleted something.
    #[inline]
    pub fn deleted() -> Self {
        Self::successful(ServiceKind::Deleted)
    }

    /// A plain failure.
    pub fn failure(errors: impl Into<ErrorList>) -> Self {
        Self::failed(ServiceKind::Failure, errors.into())
    }

    /// A plain failure holding one message under an empty key.
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure(ErrorEntry::message_only(message))
    }

    /// A not-found failure holding one error.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if the error renders to nothing, as
    /// `""` or `("", "")` do.
    pub fn not_found(error: impl Into<ErrorEntry>) -> Result<Self, EmptyErrorsError> {
        Self::failed_non_empty(
            ServiceKind::NotFound,
            "ServiceResult::not_found",
            ErrorList::from(error.into()),
        )
    }

    /// An unauthorized failure holding one error.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if the error renders to nothing.
    pub fn unauthorized(error: impl Into<ErrorEntry>) -> Result<Self, EmptyErrorsError> {
        Self::failed_non_empty(
            ServiceKind::Unauthorized,
            "ServiceResult::unauthorized",
            ErrorList::from(error.into()),
        )
    }

    /// A not-found failure holding several errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if the errors render to nothing.
    pub fn try_not_found(errors: impl Into<ErrorList>) -> Result<Self, EmptyErrorsError> {
        Self::failed_non_empty(
            ServiceKind::NotFound,
            "ServiceResult::try_not_found",
            errors.into(),
        )
    }

    /// An unauthorized failure holding several errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyErrorsError`] if the errors render to nothing.
    pub fn try_unauthorized(errors: impl Into<ErrorList>) -> Result<Self, EmptyErrorsError> {
        Self::failed_non_empty(
            ServiceKind::Unauthorized,
            "ServiceResult::try_unauthorized",
            errors.into(),
        )
    }

    /// Collapses an [`Either`] over the error list into a service result.
    ///
    /// Any error-side variant becomes a plain [`ServiceResult::failure`] with
    /// the same errors; any success-side variant becomes
    /// [`ServiceResult::success`]. The success payload is dropped.
    pub fn from_either<R>(either: Either<ErrorList, R>) -> Self {
        either.fold(|errors| Self::failure(errors), |_| Self::success())
    }

    /// What this result means.
    #[inline]
    pub const fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Returns `true` on success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    /// The errors; empty on success.
    #[inline]
    pub const fn errors(&self) -> &ErrorList {
        self.outcome.error()
    }

    /// Renders the errors joined with `separator`.
    pub fn join_errors(&self, separator: &str) -> String {
        self.errors().join(separator)
    }

    /// The underlying outcome.
    #[inline]
    pub const fn as_outcome(&self) -> &Outcome<ErrorList> {
        &self.outcome
    }

    /// Drops the kind and returns the underlying outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<ErrorList> {
        self.outcome
    }
}

impl Default for ServiceResult {
    fn default() -> Self {
        Self::success()
    }
}

impl<R> From<Either<ErrorList, R>> for ServiceResult {
    fn from(either: Either<ErrorList, R>) -> Self {
        Self::from_either(either)
    }
}

impl From<ErrorEntry> for ServiceResult {
    fn from(error: ErrorEntry) -> Self {
        Self::failure(error)
    }
}

impl<K: Into<String>, M: Into<String>> From<(K, M)> for ServiceResult {
    fn from(pair: (K, M)) -> Self {
        Self::failure(ErrorEntry::from(pair))
    }
}

impl From<&str> for ServiceResult {
    fn from(message: &str) -> Self {
        Self::failure_message(message)
    }
}

impl From<String> for ServiceResult {
    fn from(message: String) -> Self {
        Self::failure_message(message)
    }
}

impl From<ServiceResult> for Outcome<ErrorList> {
    fn from(result: ServiceResult) -> Self {
        result.into_outcome()
    }
}
