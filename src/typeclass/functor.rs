//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::{Either, Maybe};
//! use outcomes::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(functor: F) -> F::WithType<String> {
//!     functor.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::just(5)), Maybe::just("#5".to_string()));
//! assert_eq!(
//!     describe(Either::<(), i32>::Created(5)),
//!     Either::Created("#5".to_string())
//! );
//! ```
//!
//! `Outcome` has no `Functor` instance: regenerating a success placeholder
//! needs `B: Default`, which the trait cannot demand. Use
//! [`Outcome::map`](crate::outcome::Outcome::map) directly.

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe};

/// Types whose contents can be transformed without changing their shape.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Maybe;
    /// use outcomes::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }
}
