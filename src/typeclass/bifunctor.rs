//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Either;
//! use outcomes::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::NotFound(42);
//! assert_eq!(left.first(|x| x * 2), Either::NotFound(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.second(|s| s.len()), Either::Right(5));
//! ```

use crate::control::Either;

/// Types with two type parameters that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The same constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Applies two functions to both type parameters.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to borrowed parameters without consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Either;
    /// use outcomes::typeclass::Bifunctor;
    ///
    /// let either: Either<String, i32> = Either::Unauthorized("nope".to_string());
    /// let result = either.bimap_ref(|s| s.len(), |n| n * 2);
    /// assert!(either.is_left());
    /// assert_eq!(result, Either::Unauthorized(4));
    /// ```
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
