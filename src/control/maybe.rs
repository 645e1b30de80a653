//! Maybe type - an optional value exposed through a single fold.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. The only primitive
//! eliminator is [`Maybe::fold`] (plus [`Maybe::fold_ref`], its borrowed
//! form); every query and transformation here is written in terms of them
//! rather than by inspecting the variant.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Maybe;
//!
//! let five = Maybe::just(5);
//! assert_eq!(five.map(|x| x.to_string()), Maybe::just("5".to_string()));
//!
//! let none: Maybe<i32> = Maybe::nothing();
//! assert_eq!(none.map(|x| x.to_string()), Maybe::nothing());
//!
//! assert_eq!(five.fold("empty".to_string(), |x| format!("got {x}")), "got 5");
//! ```

/// An optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// Exactly one value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Wraps a value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The empty value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `nothing` for `Nothing`, or `just(value)` for `Just(value)`.
    ///
    /// The `nothing` branch is an already computed value, not a thunk, so
    /// anything expensive or effectful placed there runs even for `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).fold(0, |x| x * 2), 6);
    /// assert_eq!(Maybe::<i32>::nothing().fold(0, |x| x * 2), 0);
    /// ```
    #[inline]
    pub fn fold<B, F>(self, nothing: B, just: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Nothing => nothing,
            Self::Just(value) => just(value),
        }
    }

    /// [`Maybe::fold`] over a borrowed payload.
    #[inline]
    pub fn fold_ref<'a, B, F>(&'a self, nothing: B, just: F) -> B
    where
        F: FnOnce(&'a T) -> B,
    {
        match self {
            Self::Nothing => nothing,
            Self::Just(value) => just(value),
        }
    }

    /// Asynchronous fold.
    ///
    /// On `Just`, `just` is called once and its future is awaited. On
    /// `Nothing` the returned future is already complete and resolves to
    /// `nothing` without suspending. No scheduling, cancellation or timeout
    /// is added; those belong in the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Maybe;
    ///
    /// # futures::executor::block_on(async {
    /// let length = Maybe::just("hello").fold_async(0, |s| async move { s.len() }).await;
    /// assert_eq!(length, 5);
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub fn fold_async<B, F, Fut>(self, nothing: B, just: F) -> impl Future<Output = B>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = B>,
    {
        use futures::future::{self, Either as Branch};

        self.fold(Branch::Left(future::ready(nothing)), |value| {
            Branch::Right(just(value))
        })
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub fn is_just(&self) -> bool {
        self.fold_ref(false, |_| true)
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.fold_ref(true, |_| false)
    }

    /// Alias of [`Maybe::is_just`].
    #[inline]
    pub fn has_value(&self) -> bool {
        self.is_just()
    }

    /// Borrows the payload.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        self.fold_ref(Maybe::Nothing, Maybe::Just)
    }

    /// Applies `function` to the payload, if any.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.fold(Maybe::Nothing, |value| Maybe::Just(function(value)))
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Maybe;
    ///
    /// let parse = |s: &str| -> Maybe<i32> { s.parse::<i32>().ok().into() };
    /// assert_eq!(Maybe::just("12").flat_map(parse), Maybe::just(12));
    /// assert_eq!(Maybe::just("x").flat_map(parse), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.map(function).flatten()
    }

    /// Chains a computation and combines its value with the original payload.
    pub fn flat_map_combine<U, B, K, C>(self, key: K, combine: C) -> Maybe<B>
    where
        K: FnOnce(&T) -> Maybe<U>,
        C: FnOnce(T, U) -> B,
    {
        self.flat_map(|value| {
            let next = key(&value);
            next.map(|intermediate| combine(value, intermediate))
        })
    }

    /// Returns the payload, or `fallback` for `Nothing`.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        self.fold(fallback, |value| value)
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(None, Some)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting: `Just(Just(v))` becomes `Just(v)`,
    /// anything else becomes `Nothing`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.fold(Maybe::Nothing, |inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
