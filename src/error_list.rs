//! The canonical error shape shared by every failure in this crate.
//!
//! An [`ErrorList`] is an ordered sequence of `(key, message)` pairs. Keys
//! are allowed to be empty, in which case the entry renders as its bare
//! message. Insertion order is preserved and duplicate keys are allowed.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error_list::ErrorList;
//!
//! let mut errors = ErrorList::new();
//! errors.push(("name", "required"));
//! errors.push("something went wrong");
//!
//! assert_eq!(errors.join(", "), "name: required, something went wrong");
//! assert_eq!(errors.len(), 2);
//! ```

use std::fmt;

/// A single `(key, message)` error.
///
/// # Examples
///
/// ```rust
/// use outcomes::error_list::ErrorEntry;
///
/// assert_eq!(ErrorEntry::new("field", "required").to_string(), "field: required");
/// assert_eq!(ErrorEntry::message_only("missing").to_string(), "missing");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorEntry {
    key: String,
    message: String,
}

impl ErrorEntry {
    /// Creates an entry with the given key and message.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates an entry with an empty key.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }

    /// The key, possibly empty.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the key has visible content.
    ///
    /// Whitespace-only keys count as empty.
    pub fn has_key(&self) -> bool {
        !self.key.trim().is_empty()
    }

    /// Splits the entry into its key and message.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.message)
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_key() {
            write!(formatter, "{}: {}", self.key, self.message)
        } else {
            formatter.write_str(&self.message)
        }
    }
}

impl<K: Into<String>, M: Into<String>> From<(K, M)> for ErrorEntry {
    fn from((key, message): (K, M)) -> Self {
        Self::new(key, message)
    }
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        Self::message_only(message)
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        Self::message_only(message)
    }
}

/// Ordered `(key, message)` errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorList {
    entries: Vec<ErrorEntry>,
}

impl ErrorList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: impl Into<ErrorEntry>) {
        self.entries.push(entry.into());
    }

    /// Returns the list with `entry` appended.
    #[must_use]
    pub fn with(mut self, entry: impl Into<ErrorEntry>) -> Self {
        self.push(entry);
        self
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    /// The entries as a slice.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Iterates over the messages recorded under `key`.
    pub fn messages_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.key == key)
            .map(ErrorEntry::message)
    }

    /// Renders every entry with its [`Display`](fmt::Display) form and joins
    /// them with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error_list::{ErrorEntry, ErrorList};
    ///
    /// let errors = ErrorList::from(vec![
    ///     ErrorEntry::message_only("missing"),
    ///     ErrorEntry::new("id", "bad"),
    /// ]);
    /// assert_eq!(errors.join(""), "missingid: bad");
    /// assert_eq!(errors.join("; "), "missing; id: bad");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        self.join_with(ToString::to_string, separator)
    }

    /// Renders every entry with `render` and joins the results with `separator`.
    pub fn join_with<F>(&self, render: F, separator: &str) -> String
    where
        F: FnMut(&ErrorEntry) -> String,
    {
        self.entries
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Consumes the list and returns the entries.
    pub fn into_vec(self) -> Vec<ErrorEntry> {
        self.entries
    }
}

impl From<Vec<ErrorEntry>> for ErrorList {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        Self { entries }
    }
}

impl<E: Into<ErrorEntry>, const N: usize> From<[E; N]> for ErrorList {
    fn from(entries: [E; N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ErrorEntry> for ErrorList {
    fn from(entry: ErrorEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }
}

impl<K: Into<String>, M: Into<String>> From<(K, M)> for ErrorList {
    fn from(pair: (K, M)) -> Self {
        Self::from(ErrorEntry::from(pair))
    }
}

impl From<&str> for ErrorList {
    fn from(message: &str) -> Self {
        Self::from(ErrorEntry::message_only(message))
    }
}

impl From<String> for ErrorList {
    fn from(message: String) -> Self {
        Self::from(ErrorEntry::message_only(message))
    }
}

impl<E: Into<ErrorEntry>> FromIterator<E> for ErrorList {
    fn from_iter<I: IntoIterator<Item = E>>(iterator: I) -> Self {
        Self {
            entries: iterator.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<ErrorEntry>> Extend<E> for ErrorList {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterator: I) {
        self.entries.extend(iterator.into_iter().map(Into::into));
    }
}

impl IntoIterator for ErrorList {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
