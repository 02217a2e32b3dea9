//! Shared single-value cell with explicit invalidation.
//!
//! [`ResettableGetter<R>`] holds either nothing or exactly one `R`. Unlike
//! [`CachedLazyGetter`](super::CachedLazyGetter) there is no producer: the
//! value only appears when someone calls [`set`](Setter::set), and reading an
//! empty cell is an error.
//!
//! Cloning a `ResettableGetter` does not copy the value: every clone shares
//! the same slot, guarded by a read-write lock. Concurrent `set` and `reset`
//! calls are ordered by that lock, so the last writer wins. Callers needing
//! read-modify-write atomicity across separate `get` and `set` calls must
//! coordinate externally; [`take`](ResettableGetter::take) and
//! [`replace`](ResettableGetter::replace) are each atomic on their own.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::getter::{Getter, Setter};

/// Error returned when reading a [`ResettableGetter`] that holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAbsentError;

impl fmt::Display for ValueAbsentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResettableGetter: no value has been set")
    }
}

impl std::error::Error for ValueAbsentError {}

/// A shared, settable and resettable value slot.
///
/// # Examples
///
/// ```rust
/// use actionkit::action::{Getter, ResettableGetter, Setter, ValueAbsentError};
///
/// let slot = ResettableGetter::new();
/// assert_eq!(slot.get(), Err(ValueAbsentError));
///
/// slot.set("ready");
/// assert_eq!(slot.get(), Ok("ready"));
///
/// slot.reset();
/// assert_eq!(slot.get(), Err(ValueAbsentError));
/// ```
pub struct ResettableGetter<R> {
    slot: Arc<RwLock<Option<R>>>,
}

static_assertions::assert_impl_all!(ResettableGetter<String>: Send, Sync, Clone);

impl<R> ResettableGetter<R> {
    /// Creates an empty slot.
    #[inline]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a slot holding `value`.
    #[inline]
    pub fn with_value(value: R) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(value))),
        }
    }

    /// Empties the slot, dropping any stored value.
    pub fn reset(&self) {
        let previous = self.slot.write().take();
        if previous.is_some() {
            tracing::trace!("resettable getter cleared");
        }
    }

    /// Returns whether the slot currently holds a value.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Removes and returns the stored value, leaving the slot empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::ResettableGetter;
    ///
    /// let slot = ResettableGetter::with_value(3);
    /// assert_eq!(slot.take(), Some(3));
    /// assert_eq!(slot.take(), None);
    /// ```
    pub fn take(&self) -> Option<R> {
        self.slot.write().take()
    }

    /// Stores `value` and returns the value it replaced, if any.
    pub fn replace(&self, value: R) -> Option<R> {
        self.slot.write().replace(value)
    }

    /// Applies `function` to the stored value without cloning it.
    ///
    /// The read lock is held while `function` runs; calling `set` or `reset`
    /// on the same slot from inside `function` deadlocks.
    ///
    /// # Errors
    ///
    /// Returns [`ValueAbsentError`] if the slot is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::ResettableGetter;
    ///
    /// let slot = ResettableGetter::with_value(vec![1, 2, 3]);
    /// assert_eq!(slot.with_value_ref(|values| values.len()), Ok(3));
    /// ```
    pub fn with_value_ref<U>(
        &self,
        function: impl FnOnce(&R) -> U,
    ) -> Result<U, ValueAbsentError> {
        self.slot.read().as_ref().map(function).ok_or(ValueAbsentError)
    }
}

impl<R: Clone> Getter<R> for ResettableGetter<R> {
    type Error = ValueAbsentError;

    fn get(&self) -> Result<R, ValueAbsentError> {
        self.slot.read().clone().ok_or(ValueAbsentError)
    }
}

impl<R> Setter<R> for ResettableGetter<R> {
    fn set(&self, value: R) {
        *self.slot.write() = Some(value);
    }
}

impl<R> Clone for ResettableGetter<R> {
    /// Returns a handle to the same slot.
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<R> Default for ResettableGetter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for ResettableGetter<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.slot.read() {
            Some(value) => formatter
                .debug_tuple("ResettableGetter")
                .field(value)
                .finish(),
            None => formatter.write_str("ResettableGetter(<empty>)"),
        }
    }
}
