//! Verdict - a common view of success and failure.
//!
//! [`Either`], [`Outcome`] and [`ServiceResult`] each decide success
//! differently. `Verdict` lets callers inspect any of them generically.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Either;
//! use outcomes::outcome::ServiceResult;
//! use outcomes::typeclass::Verdict;
//!
//! fn count_failures<V: Verdict>(results: &[V]) -> usize {
//!     results.iter().filter(|result| result.is_failure()).count()
//! }
//!
//! let eithers: [Either<&str, i32>; 3] =
//!     [Either::Right(1), Either::NotFound("x"), Either::Created(2)];
//! assert_eq!(count_failures(&eithers), 1);
//!
//! let denied = ServiceResult::unauthorized("denied")?;
//! let services = [ServiceResult::deleted(), denied];
//! assert_eq!(count_failures(&services), 1);
//! # Ok::<(), outcomes::error::EmptyErrorsError>(())
//! ```

use crate::control::Either;
use crate::outcome::{Outcome, ServiceResult};

/// Types that are either a success or a failure.
pub trait Verdict {
    /// Returns `true` on success.
    fn is_success(&self) -> bool;

    /// Returns `true` on failure.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl<L, R> Verdict for Either<L, R> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_right()
    }
}

impl<E> Verdict for Outcome<E> {
    #[inline]
    fn is_success(&self) -> bool {
        Self::is_success(self)
    }
}

impl Verdict for ServiceResult {
    #[inline]
    fn is_success(&self) -> bool {
        Self::is_success(self)
    }
}
