//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ## Homomorphism Law
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::{Either, Maybe};
//! use outcomes::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! let width: Either<String, u32> = Either::Right(3);
//! let height: Either<String, u32> = Either::Right(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Either::Right(12));
//! ```

use super::functor::Functor;
use crate::control::{Either, Maybe};

/// Functors that can lift plain values and combine two contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    /// use outcomes::typeclass::Applicative;
    ///
    /// let value: Either<String, i32> = <Either<String, ()>>::pure(1);
    /// assert_eq!(value, Either::Right(1));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    ///
    /// Fails if either side fails; when both fail, `self` wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the value of `self` when both contexts succeed.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the value of `other` when both contexts succeed.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.flat_map(|a| other.map(|b| function(a, b)))
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

/// `pure` produces a plain [`Either::Right`]. When both sides succeed the
/// result carries the variant of `other`.
impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.flat_map(|a| other.map_right(|b| function(a, b)))
    }
}
