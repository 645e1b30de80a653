//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] records the type a value is
//! applied to and how to re-apply the same constructor to another type,
//! which is enough to state `Functor` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use outcomes::control::Maybe;
//! use outcomes::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = reset(Maybe::just(42));
//! assert!(emptied.is_nothing());
//! ```

use crate::control::{Either, Maybe};
use crate::outcome::Outcome;

/// A type constructor applied to [`TypeConstructor::Inner`].
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

/// Right-biased: the error side is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

/// Biased towards the error payload, the only channel an `Outcome` maps.
impl<E> TypeConstructor for Outcome<E> {
    type Inner = E;
    type WithType<B> = Outcome<B>;
}
