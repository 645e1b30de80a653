//! Either type - a computation that produced an error or a value.
//!
//! `Either<L, R>` holds either an error-side payload `L` or a success-side
//! payload `R`. Each side comes in a plain form and in semantic forms that
//! carry the same payload but tell callers what kind of outcome it was:
//!
//! | Side  | Plain   | Semantic                     |
//! |-------|---------|------------------------------|
//! | error | `Left`  | `NotFound`, `Unauthorized`   |
//! | value | `Right` | `Created`, `Deleted`         |
//!
//! Semantic variants behave exactly like their plain counterpart under every
//! operation, and transformations keep the variant they started in.
//! Equality is structural: `Left(e) == Left(e)` but `Left(e) != NotFound(e)`.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Either;
//!
//! let found: Either<String, i32> = Either::from_right(42);
//! let missing: Either<String, i32> = Either::not_found("no such user".to_string());
//!
//! assert_eq!(found.map(|x| x * 2), Either::Right(84));
//! assert_eq!(
//!     missing.map(|x| x * 2),
//!     Either::NotFound("no such user".to_string())
//! );
//! ```
//!
//! # The error-list convention
//!
//! [`Attempt<R>`] fixes the error side to [`ErrorList`], the ordered
//! `(key, message)` shape used across the crate:
//!
//! ```rust
//! use outcomes::control::Attempt;
//!
//! let attempt: Attempt<i32> = Attempt::not_found_message("missing");
//! assert_eq!(attempt.join_errors(""), "missing");
//! ```

use crate::error::InvalidStateError;
use crate::error_list::{ErrorEntry, ErrorList};

/// A value that is either an error (`Left` side) or a success (`Right` side).
///
/// # Type Parameters
///
/// * `L` - The error payload
/// * `R` - The success payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// A plain failure.
    Left(L),
    /// A failure meaning the requested thing does not exist.
    NotFound(L),
    /// A failure meaning the caller is not allowed to do this.
    Unauthorized(L),
    /// A plain success.
    Right(R),
    /// A success meaning something was created.
    Created(R),
    /// A success meaning something was deleted.
    Deleted(R),
}

/// Which side of an [`Either`] is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The error side.
    Left,
    /// The success side.
    Right,
}

/// Semantic kind of an error-side [`Either`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeftKind {
    /// [`Either::Left`].
    #[default]
    Plain,
    /// [`Either::NotFound`].
    NotFound,
    /// [`Either::Unauthorized`].
    Unauthorized,
}

/// Semantic kind of a success-side [`Either`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RightKind {
    /// [`Either::Right`].
    #[default]
    Plain,
    /// [`Either::Created`].
    Created,
    /// [`Either::Deleted`].
    Deleted,
}

/// An [`Either`] whose error side is the canonical [`ErrorList`].
pub type Attempt<R> = Either<ErrorList, R>;

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a plain error-side value.
    #[inline]
    pub const fn from_left(error: L) -> Self {
        Self::Left(error)
    }

    /// Creates a plain success-side value.
    #[inline]
    pub const fn from_right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a [`Either::NotFound`] failure.
    #[inline]
    pub const fn not_found(error: L) -> Self {
        Self::NotFound(error)
    }

    /// Creates an [`Either::Unauthorized`] failure.
    #[inline]
    pub const fn unauthorized(error: L) -> Self {
        Self::Unauthorized(error)
    }

    /// Creates a [`Either::Created`] success.
    #[inline]
    pub const fn created(value: R) -> Self {
        Self::Created(value)
    }

    /// Creates a [`Either::Deleted`] success.
    #[inline]
    pub const fn deleted(value: R) -> Self {
        Self::Deleted(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns the side this value is on.
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) | Self::NotFound(_) | Self::Unauthorized(_) => Side::Left,
            Self::Right(_) | Self::Created(_) | Self::Deleted(_) => Side::Right,
        }
    }

    /// Returns `true` for any error-side variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// assert!(Either::<i32, String>::Left(42).is_left());
    /// assert!(Either::<i32, String>::Unauthorized(42).is_left());
    /// assert!(!Either::<i32, String>::Created("done".to_string()).is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self.side(), Side::Left)
    }

    /// Returns `true` for any success-side variant.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self.side(), Side::Right)
    }

    /// The semantic kind of an error-side value, `None` on the success side.
    #[inline]
    pub const fn left_kind(&self) -> Option<LeftKind> {
        match self {
            Self::Left(_) => Some(LeftKind::Plain),
            Self::NotFound(_) => Some(LeftKind::NotFound),
            Self::Unauthorized(_) => Some(LeftKind::Unauthorized),
            Self::Right(_) | Self::Created(_) | Self::Deleted(_) => None,
        }
    }

    /// The semantic kind of a success-side value, `None` on the error side.
    #[inline]
    pub const fn right_kind(&self) -> Option<RightKind> {
        match self {
            Self::Right(_) => Some(RightKind::Plain),
            Self::Created(_) => Some(RightKind::Created),
            Self::Deleted(_) => Some(RightKind::Deleted),
            Self::Left(_) | Self::NotFound(_) | Self::Unauthorized(_) => None,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, discarding a success payload.
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// Converts into an `Option<R>`, discarding an error payload.
    #[inline]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Returns a reference to the error payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) | Self::NotFound(error) | Self::Unauthorized(error) => Some(error),
            Self::Right(_) | Self::Created(_) | Self::Deleted(_) => None,
        }
    }

    /// Returns a reference to the success payload if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Right(value) | Self::Created(value) | Self::Deleted(value) => Some(value),
            Self::Left(_) | Self::NotFound(_) | Self::Unauthorized(_) => None,
        }
    }

    /// Borrows both payloads, keeping the variant.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::NotFound(error) => Either::NotFound(error),
            Self::Unauthorized(error) => Either::Unauthorized(error),
            Self::Right(value) => Either::Right(value),
            Self::Created(value) => Either::Created(value),
            Self::Deleted(value) => Either::Deleted(value),
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        self.fold(|error| (Some(error), None), |value| (None, Some(value)))
    }

    /// Returns the success payload.
    ///
    /// Only call this where the side has already been checked. On the error
    /// side it fails with [`InvalidStateError`], which marks a missing guard
    /// at the call site and should not be turned back into a represented
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is an error-side value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(7);
    /// assert_eq!(right.get_value_or_fail(), Ok(7));
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// assert!(left.get_value_or_fail().is_err());
    /// ```
    pub fn get_value_or_fail(self) -> Result<R, InvalidStateError> {
        self.right().ok_or_else(|| {
            InvalidStateError {
                operation: "Either::get_value_or_fail",
                found: "left",
            }
            .reported()
        })
    }

    /// Returns the error payload.
    ///
    /// The mirror image of [`Either::get_value_or_fail`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if this is a success-side value.
    pub fn get_error_or_fail(self) -> Result<L, InvalidStateError> {
        self.left().ok_or_else(|| {
            InvalidStateError {
                operation: "Either::get_error_or_fail",
                found: "right",
            }
            .reported()
        })
    }

    /// Returns the success payload, or `fallback` on the error side.
    #[inline]
    pub fn value_or(self, fallback: R) -> R {
        self.fold(|_| fallback, |value| value)
    }

    /// Returns the error payload, or `fallback` on the success side.
    #[inline]
    pub fn error_or(self, fallback: L) -> L {
        self.fold(|error| error, |_| fallback)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `left_function` to an error payload or `right_function` to a
    /// success payload, keeping the variant.
    ///
    /// Every other mapping operation is defined in terms of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Unauthorized(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Unauthorized(84));
    ///
    /// let right: Either<i32, String> = Either::Created("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Created(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::NotFound(error) => Either::NotFound(left_function(error)),
            Self::Unauthorized(error) => Either::Unauthorized(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
            Self::Created(value) => Either::Created(right_function(value)),
            Self::Deleted(value) => Either::Deleted(right_function(value)),
        }
    }

    /// Maps the success payload. Alias of [`Either::map_right`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// let right: Either<String, String> = Either::Right("a".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(1));
    /// ```
    #[inline]
    pub fn map<U, G>(self, function: G) -> Either<L, U>
    where
        G: FnOnce(R) -> U,
    {
        self.map_right(function)
    }

    /// Maps the success payload, leaving an error untouched.
    #[inline]
    pub fn map_right<U, G>(self, function: G) -> Either<L, U>
    where
        G: FnOnce(R) -> U,
    {
        self.bimap(|error| error, function)
    }

    /// Maps the error payload, leaving a success untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bimap(function, |value| value)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// Semantic variants fold like their plain counterpart.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) | Self::NotFound(error) | Self::Unauthorized(error) => {
                left_function(error)
            }
            Self::Right(value) | Self::Created(value) | Self::Deleted(value) => {
                right_function(value)
            }
        }
    }

    // =========================================================================
    // Binding
    // =========================================================================

    /// Chains a computation on the success payload.
    ///
    /// Equivalent to `self.map(function).flatten()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(Either::Right(8).flat_map(half), Either::Right(4));
    /// assert_eq!(Either::Right(3).flat_map(half), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, G>(self, function: G) -> Either<L, U>
    where
        G: FnOnce(R) -> Either<L, U>,
    {
        self.map_right(function).flatten()
    }

    /// Chains a computation and combines its result with the original
    /// success payload.
    ///
    /// `key` inspects the payload and produces the next step; `combine`
    /// receives the payload and the step's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// let user: Either<String, &str> = Either::Right("ada");
    /// let greeting = user.flat_map_combine(
    ///     |name| Either::Right(name.len()),
    ///     |name, length| format!("{name}:{length}"),
    /// );
    /// assert_eq!(greeting, Either::Right("ada:3".to_string()));
    /// ```
    pub fn flat_map_combine<U, T, K, C>(self, key: K, combine: C) -> Either<L, T>
    where
        K: FnOnce(&R) -> Either<L, U>,
        C: FnOnce(R, U) -> T,
    {
        self.flat_map(|value| {
            let next = key(&value);
            next.map_right(|intermediate| combine(value, intermediate))
        })
    }

    /// Chains a computation on the error payload.
    ///
    /// Equivalent to `self.map_left(function).flatten_left()`.
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        self.map_left(function).flatten_left()
    }

    /// Error-side counterpart of [`Either::flat_map_combine`].
    pub fn flat_map_left_combine<U, T, K, C>(self, key: K, combine: C) -> Either<T, R>
    where
        K: FnOnce(&L) -> Either<U, R>,
        C: FnOnce(L, U) -> T,
    {
        self.flat_map_left(|error| {
            let next = key(&error);
            next.map_left(|intermediate| combine(error, intermediate))
        })
    }

    /// Re-types an error-side value, handing back the success payload otherwise.
    #[inline]
    fn split_left<U>(self) -> Result<Either<L, U>, R> {
        match self {
            Self::Left(error) => Ok(Either::Left(error)),
            Self::NotFound(error) => Ok(Either::NotFound(error)),
            Self::Unauthorized(error) => Ok(Either::Unauthorized(error)),
            Self::Right(value) | Self::Created(value) | Self::Deleted(value) => Err(value),
        }
    }

    /// Re-types a success-side value, handing back the error payload otherwise.
    #[inline]
    fn split_right<T>(self) -> Result<Either<T, R>, L> {
        match self {
            Self::Right(value) => Ok(Either::Right(value)),
            Self::Created(value) => Ok(Either::Created(value)),
            Self::Deleted(value) => Ok(Either::Deleted(value)),
            Self::Left(error) | Self::NotFound(error) | Self::Unauthorized(error) => Err(error),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the success side.
    ///
    /// An outer error is propagated with its variant; an outer success
    /// yields the inner value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    ///
    /// let nested: Either<String, Either<String, i32>> = Either::Right(Either::Created(1));
    /// assert_eq!(nested.flatten(), Either::Created(1));
    ///
    /// let nested: Either<String, Either<String, i32>> = Either::NotFound("gone".to_string());
    /// assert_eq!(nested.flatten(), Either::NotFound("gone".to_string()));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self.split_left() {
            Ok(error) => error,
            Err(inner) => inner,
        }
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Removes one level of nesting on the error side.
    ///
    /// An outer success is propagated with its variant; an outer error
    /// yields the inner value unchanged.
    #[inline]
    pub fn flatten_left(self) -> Either<L, R> {
        match self.split_right() {
            Ok(value) => value,
            Err(inner) => inner,
        }
    }
}

// =============================================================================
// Error-list Operations
// =============================================================================

impl<R> Either<ErrorList, R> {
    /// Creates a plain failure from anything convertible to an [`ErrorList`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Attempt;
    ///
    /// let attempt: Attempt<i32> = Attempt::failure([("name", "required"), ("age", "too low")]);
    /// assert_eq!(attempt.join_errors(", "), "name: required, age: too low");
    /// ```
    pub fn failure(errors: impl Into<ErrorList>) -> Self {
        Self::Left(errors.into())
    }

    /// Creates a plain failure holding one message under an empty key.
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::Left(ErrorList::from(ErrorEntry::message_only(message)))
    }

    /// Creates a [`Either::NotFound`] failure holding one message.
    pub fn not_found_message(message: impl Into<String>) -> Self {
        Self::NotFound(ErrorList::from(ErrorEntry::message_only(message)))
    }

    /// Creates an [`Either::Unauthorized`] failure holding one message.
    pub fn unauthorized_message(message: impl Into<String>) -> Self {
        Self::Unauthorized(ErrorList::from(ErrorEntry::message_only(message)))
    }

    /// The error list, if this is an error-side value.
    #[inline]
    pub const fn errors(&self) -> Option<&ErrorList> {
        self.left_ref()
    }

    /// Renders the errors as `"key: message"` (or `"message"` for an empty
    /// key) joined with `separator`. A success renders as an empty string.
    pub fn join_errors(&self, separator: &str) -> String {
        self.left_ref()
            .map(|errors| errors.join(separator))
            .unwrap_or_default()
    }

    /// Renders the errors with `render` and joins them with `separator`.
    /// A success renders as an empty string.
    pub fn join_errors_with<F>(&self, render: F, separator: &str) -> String
    where
        F: FnMut(&ErrorEntry) -> String,
    {
        self.left_ref()
            .map(|errors| errors.join_with(render, separator))
            .unwrap_or_default()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Any success-side variant becomes `Ok`, any error-side variant `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
