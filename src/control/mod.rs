//! Sum types for computations that can fail or come up empty.
//!
//! - [`Either`]: an error-side or success-side value, with semantic
//!   variants (`NotFound`, `Unauthorized`, `Created`, `Deleted`)
//! - [`Attempt`]: an [`Either`] whose error side is an
//!   [`ErrorList`](crate::error_list::ErrorList)
//! - [`Maybe`]: an optional value eliminated through a single fold
//!
//! # Examples
//!
//! ## Threading an Either through layers
//!
//! ```rust
//! use outcomes::control::{Attempt, Either};
//!
//! fn find_user(id: u32) -> Attempt<String> {
//!     if id == 1 {
//!         Either::from_right("ada".to_string())
//!     } else {
//!         Attempt::not_found_message(format!("user {id} not found"))
//!     }
//! }
//!
//! let greeting = find_user(1).map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, Either::Right("hello, ada".to_string()));
//!
//! let missing = find_user(2).map(|name| format!("hello, {name}"));
//! assert!(missing.is_left());
//! assert_eq!(missing.join_errors(""), "user 2 not found");
//! ```
//!
//! ## Maybe
//!
//! ```rust
//! use outcomes::control::Maybe;
//!
//! let nested = Maybe::just(Maybe::just(5));
//! assert_eq!(nested.flatten(), Maybe::just(5));
//! ```

mod either;
mod maybe;

pub use either::{Attempt, Either, LeftKind, RightKind, Side};
pub use maybe::Maybe;
