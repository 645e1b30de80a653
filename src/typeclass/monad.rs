//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! For [`Either`] this holds for [`Either::Right`] and every error variant.
//! `Created(x).flat_map(pure)` is `Right(x)`: binding yields the variant of
//! the step it ran, and `pure` has no semantic kind.
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Maybe;
//! use outcomes::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     match s.parse::<i32>() {
//!         Ok(n) if n > 0 => Maybe::just(n),
//!         _ => Maybe::nothing(),
//!     }
//! }
//!
//! let result = Monad::flat_map(Maybe::just("42"), parse_positive);
//! assert_eq!(result, Maybe::just(42));
//! assert_eq!(Monad::flat_map(Maybe::just("-1"), parse_positive), Maybe::nothing());
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe};

/// Applicatives whose next step can depend on the previous value.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, named after `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    /// use outcomes::typeclass::Monad;
    ///
    /// let done: Either<String, ()> = Either::Deleted(());
    /// assert_eq!(done.then(Either::Right("next")), Either::Right("next"));
    ///
    /// let denied: Either<String, ()> = Either::Unauthorized("no".to_string());
    /// assert_eq!(denied.then(Either::Right("next")), Either::Unauthorized("no".to_string()));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}
