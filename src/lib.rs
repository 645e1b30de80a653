//! # outcomes
//!
//! Algebraic result types for service and domain code.
//!
//! ## Overview
//!
//! - **Either**: a success or an error, with semantic variants for
//!   "not found", "unauthorized", "created" and "deleted"
//! - **Maybe**: an optional value with fold-first operations
//! - **Outcome / `ServiceResult`**: success or failure carrying only an error
//!   payload, the latter tagged with what the operation meant
//! - **Type Classes**: Functor, Bifunctor, Applicative, Monad over the above
//! - **Comprehensions**: the `select!` macro
//!
//! Errors across all three families share one shape, [`ErrorList`]: an
//! ordered list of key/message pairs.
//!
//! ## Feature Flags
//!
//! - `control`: `Either`, `Attempt` and `Maybe`
//! - `outcome`: `Outcome` and `ServiceResult`
//! - `typeclass`: type class traits implemented by the result types
//! - `compose`: the `select!` macro
//! - `async`: `Maybe::fold_async`
//! - `tracing`: warn-level events when a result is misused (off by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn find_user(id: u32) -> Attempt<&'static str> {
//!     match id {
//!         1 => Either::Right("ada"),
//!         _ => Attempt::not_found_message(format!("user {id} does not exist")),
//!     }
//! }
//!
//! let greeting = find_user(1).map(|name| format!("hello, {name}"));
//! assert_eq!(greeting.value_or(String::new()), "hello, ada");
//!
//! let missing = find_user(7);
//! assert_eq!(missing.left_kind(), Some(LeftKind::NotFound));
//! assert_eq!(
//!     ServiceResult::from(missing).join_errors(", "),
//!     "user 7 does not exist"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{EmptyErrorsError, InvalidStateError, OutcomeError};
    pub use crate::error_list::{ErrorEntry, ErrorList};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;

    #[cfg(feature = "compose")]
    pub use crate::select;
}

pub mod error;
pub mod error_list;

pub use error_list::{ErrorEntry, ErrorList};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(all(feature = "control", feature = "outcome"))]
mod thread_safety {
    use crate::control::{Either, Maybe};
    use crate::error::OutcomeError;
    use crate::error_list::ErrorList;
    use crate::outcome::{Outcome, ServiceResult};
    use static_assertions::assert_impl_all;

    assert_impl_all!(ErrorList: Send, Sync, Clone);
    assert_impl_all!(Either<ErrorList, String>: Send, Sync, Clone);
    assert_impl_all!(Maybe<String>: Send, Sync, Clone);
    assert_impl_all!(Outcome<ErrorList>: Send, Sync, Clone);
    assert_impl_all!(ServiceResult: Send, Sync, Clone);
    assert_impl_all!(OutcomeError: Send, Sync, std::error::Error);
}
