//! `select!` - comprehension syntax over the result types.
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the success value of `expression`
//! - `let pattern = expression;` is a plain binding
//! - `yield expression` ends the block, wrapping the value in the last bound context
//! - `expression` ends the block with a value that is already a context
//!
//! `<-` is not a valid token sequence in macro patterns, so `<=` stands in
//! for it.
//!
//! # Desugaring
//!
//! ```rust,ignore
//! select! { a <= first; b <= second; yield a + b }
//! // becomes
//! first.flat_map(move |a| second.map(move |b| a + b))
//! ```
//!
//! Method calls resolve to the inherent `flat_map` and `map` of
//! [`Either`](crate::control::Either), [`Maybe`](crate::control::Maybe) and
//! [`Outcome`](crate::outcome::Outcome), so no trait import is needed.

/// Chains binds over `Either`, `Maybe` or `Outcome` values.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::{Attempt, Either};
/// use outcomes::select;
///
/// fn parse(input: &str) -> Attempt<i32> {
///     input.parse::<i32>().map_or_else(
///         |_| Attempt::failure_message(format!("{input} is not a number")),
///         Either::Right,
///     )
/// }
///
/// let sum = select! {
///     a <= parse("4");
///     b <= parse("5");
///     let total = a + b;
///     yield total * 2
/// };
/// assert_eq!(sum, Either::Right(18));
///
/// let broken = select! {
///     a <= parse("4");
///     b <= parse("five");
///     yield a + b
/// };
/// assert_eq!(broken.join_errors(", "), "five is not a number");
/// ```
#[macro_export]
macro_rules! select {
    // =========================================================================
    // Final bind followed by yield: map
    // =========================================================================

    ($pattern:ident <= $monad:expr ; yield $result:expr) => {
        $monad.map(move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $monad:expr ; yield $result:expr) => {
        $monad.map(move |($($pattern)*)| $result)
    };

    (_ <= $monad:expr ; yield $result:expr) => {
        $monad.map(move |_| $result)
    };

    // =========================================================================
    // Bind: flat_map
    // =========================================================================

    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::select!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| {
            $crate::select!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::select!($($rest)+)
        })
    };

    // =========================================================================
    // Let binding
    // =========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::select!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::select!($($rest)+)
        }
    };

    // =========================================================================
    // Terminal expression
    // =========================================================================

    ($result:expr) => {
        $result
    };
}
