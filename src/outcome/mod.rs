//! No-value operation outcomes.
//!
//! - [`Outcome<E>`]: success, or failure carrying an error payload `E`.
//!   A functor over the error channel only.
//! - [`ServiceResult`]: an `Outcome` over the canonical
//!   [`ErrorList`](crate::error_list::ErrorList), tagged with a
//!   [`ServiceKind`] such as `Created` or `NotFound`.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::outcome::{Outcome, ServiceKind, ServiceResult};
//!
//! let saved = ServiceResult::created();
//! assert!(saved.is_success());
//! assert_eq!(saved.kind(), ServiceKind::Created);
//!
//! let missing = ServiceResult::not_found(("id", "unknown"))?;
//! assert_eq!(missing.join_errors(""), "id: unknown");
//!
//! let outcome: Outcome<_> = missing.into_outcome();
//! assert!(outcome.is_failure());
//! # Ok::<(), outcomes::error::EmptyErrorsError>(())
//! ```

mod result;
mod service;

pub use result::Outcome;
pub use service::{ServiceKind, ServiceResult};
