//! Outcome type - success, or failure carrying an error payload.

/// The outcome of an operation that returns no value.
///
/// An `Outcome<E>` is a flag plus an error payload. A failure carries the
/// payload that explains it. A success carries `E::default()` as a
/// placeholder which has no meaning and is never passed to mapping
/// functions.
///
/// It is not a tagged union: it has the same shape in both
/// states, and only the flag tells them apart.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::Outcome;
///
/// let failed: Outcome<i32> = Outcome::failure(17);
/// assert_eq!(failed.map(|code| code.to_string()), Outcome::failure("17".to_string()));
///
/// let done: Outcome<i32> = Outcome::success();
/// assert!(done.map(|code| code.to_string()).is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<E> {
    is_success: bool,
    error: E,
}

impl<E: Default> Outcome<E> {
    /// A successful outcome.
    #[inline]
    pub fn success() -> Self {
        Self {
            is_success: true,
            error: E::default(),
        }
    }
}

impl<E> Outcome<E> {
    /// A failed outcome carrying `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self {
            is_success: false,
            error,
        }
    }

    /// Returns `true` on success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// The error payload. Meaningless on success.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// The error payload if this is a failure.
    #[inline]
    pub const fn failure_error(&self) -> Option<&E> {
        if self.is_success {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Consumes the outcome and returns the error payload.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Maps the error payload of a failure.
    ///
    /// A success stays a success with a fresh `B::default()` placeholder;
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use outcomes::outcome::Outcome;
    ///
    /// let calls = Cell::new(0);
    /// let mapped = Outcome::<i32>::success().map(|code| {
    ///     calls.set(calls.get() + 1);
    ///     code.to_string()
    /// });
    /// assert!(mapped.is_success());
    /// assert_eq!(calls.get(), 0);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        B: Default,
        F: FnOnce(E) -> B,
    {
        if self.is_success {
            Outcome::success()
        } else {
            Outcome::failure(function(self.error))
        }
    }

    /// Chains a computation on the error payload.
    ///
    /// Equivalent to `self.map(function).flatten()`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        B: Default,
        F: FnOnce(E) -> Outcome<B>,
    {
        self.map(function).flatten()
    }

    /// Chains a computation and combines its payload with the original one.
    pub fn flat_map_combine<U, B, K, C>(self, key: K, combine: C) -> Outcome<B>
    where
        B: Default,
        K: FnOnce(&E) -> Outcome<U>,
        C: FnOnce(E, U) -> B,
    {
        self.flat_map(|error| {
            let next = key(&error);
            next.map(|intermediate| combine(error, intermediate))
        })
    }
}

impl<E> Outcome<Outcome<E>> {
    /// Returns the inner outcome, discarding the outer flag.
    ///
    /// An outer success holds `Outcome::default()`, itself a success, so
    /// success survives flattening. The inner value is returned as is in
    /// every case, so whatever state it is in wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let nested = Outcome::failure(Outcome::failure(17));
    /// assert_eq!(nested.flatten(), Outcome::failure(17));
    ///
    /// let nested: Outcome<Outcome<i32>> = Outcome::failure(Outcome::success());
    /// assert!(nested.flatten().is_success());
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<E> {
        self.error
    }
}

impl<E: Default> Default for Outcome<E> {
    /// A success.
    #[inline]
    fn default() -> Self {
        Self::success()
    }
}

impl<E: Default> From<Result<(), E>> for Outcome<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        result.map_or_else(Self::failure, |()| Self::success())
    }
}

impl<E> From<Outcome<E>> for Result<(), E> {
    #[inline]
    fn from(outcome: Outcome<E>) -> Self {
        if outcome.is_success {
            Ok(())
        } else {
            Err(outcome.error)
        }
    }
}
