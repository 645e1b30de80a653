//! Comprehension syntax.
//!
//! [`select!`](crate::select) chains binds over [`Either`](crate::control::Either),
//! [`Maybe`](crate::control::Maybe) and [`Outcome`](crate::outcome::Outcome)
//! without nesting closures by hand.
//!
//! # Examples
//!
//! ```
//! use outcomes::control::Maybe;
//! use outcomes::select;
//!
//! let area = select! {
//!     width <= Maybe::just(3);
//!     height <= Maybe::just(4);
//!     yield width * height
//! };
//! assert_eq!(area, Maybe::just(12));
//! ```

mod select_macro;
