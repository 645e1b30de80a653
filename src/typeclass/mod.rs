//! Type class traits shared by the result types.
//!
//! - [`Functor`]: mapping over the success value
//! - [`Bifunctor`]: mapping over both sides of an [`Either`](crate::control::Either)
//! - [`Applicative`]: lifting values and combining independent results
//! - [`Monad`]: sequencing results where each step depends on the last
//! - [`Verdict`]: asking any result whether it succeeded
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to name "the same
//! container over another type", which is all `Functor` and `Monad` need.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::{Either, Maybe};
//! use outcomes::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::just(4)), Maybe::just(8));
//! assert_eq!(double_all(Either::<(), i32>::Deleted(4)), Either::Deleted(8));
//! assert_eq!(<Maybe<()>>::pure(1), Maybe::just(1));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod verdict;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use verdict::Verdict;
