//! Thread-safe lazy getter with memoization.
//!
//! This module provides the [`CachedLazyGetter<R, F>`] type: a getter that
//! defers an expensive computation until the value is first requested, then
//! serves the cached result to every later and concurrent caller.
//!
//! # Initialization Protocol
//!
//! The cached value lives in a single-assignment slot ([`OnceLock`]):
//!
//! - Fast path: if the slot is filled, the value is returned after a single
//!   acquire load. No lock is taken.
//! - Slow path: the caller takes the initialization mutex, checks the slot
//!   again (another caller may have just filled it) and, if it is still empty,
//!   runs the producer and stores the result before releasing the mutex.
//!
//! The producer therefore runs at most once while it keeps succeeding, no
//! matter how many threads race on the first access.
//!
//! # Failures Are Retryable
//!
//! Unlike [`std::sync::LazyLock`], a failing producer does not poison the
//! getter. When the producer returns `Err`, the error is handed to the caller
//! and the slot stays empty, so the next call runs the producer again. The
//! same holds for a producer that panics: the mutex is released during
//! unwinding and does not poison.
//!
//! # Examples
//!
//! ```rust
//! use actionkit::action::CachedLazyGetter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let getter = Arc::new(CachedLazyGetter::new(|| {
//!     println!("Computing...");
//!     Ok::<_, std::io::Error>(42)
//! }));
//!
//! let handles: Vec<_> = (0..10).map(|_| {
//!     let getter = Arc::clone(&getter);
//!     thread::spawn(move || *getter.force().unwrap())
//! }).collect();
//!
//! // All threads get the same value, and the producer ran only once
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 42);
//! }
//! ```

use std::convert::Infallible;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

use super::getter::Getter;

/// A thread-safe getter that computes its value at most once, on first access.
///
/// The producer `F` is bound at construction and never changes. It returns
/// `Result<R, E>`; infallible producers are adapted by the builders in
/// [`action`](crate::action) with `E = Infallible`.
///
/// # Type Parameters
///
/// * `R` - The type of the computed value
/// * `F` - The type of the producer function
///
/// # Thread Safety
///
/// `CachedLazyGetter` is `Send + Sync` whenever `R: Send + Sync` and
/// `F: Send + Sync`. Reading an already computed value is lock-free.
///
/// # Examples
///
/// ```rust
/// use actionkit::action::CachedLazyGetter;
///
/// let getter = CachedLazyGetter::new(|| "42".parse::<i32>());
///
/// assert!(!getter.is_computed());
/// assert_eq!(getter.force(), Ok(&42));
/// assert!(getter.is_computed());
/// ```
pub struct CachedLazyGetter<R, F> {
    slot: OnceLock<R>,
    init_lock: Mutex<()>,
    producer: F,
}

static_assertions::assert_impl_all!(
    CachedLazyGetter<String, fn() -> Result<String, Infallible>>: Send, Sync
);

impl<R, F> CachedLazyGetter<R, F> {
    /// Returns the cached value if it has been computed.
    ///
    /// Unlike [`force`](Self::force), this never runs the producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::CachedLazyGetter;
    ///
    /// let getter = CachedLazyGetter::new(|| Ok::<_, String>(42));
    /// assert!(getter.cached().is_none());
    ///
    /// let _ = getter.force();
    /// assert_eq!(getter.cached(), Some(&42));
    /// ```
    #[inline]
    pub fn cached(&self) -> Option<&R> {
        self.slot.get()
    }

    /// Returns whether the value has been computed and cached.
    #[inline]
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Discards the cached value, returning the getter to its uncomputed state.
    ///
    /// The next call to [`force`](Self::force) runs the producer again.
    /// Requires exclusive access, so no reference handed out by `force` can
    /// outlive the value it points to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::CachedLazyGetter;
    ///
    /// let mut getter = CachedLazyGetter::new(|| Ok::<_, String>(42));
    /// let _ = getter.force();
    ///
    /// getter.reset();
    /// assert!(!getter.is_computed());
    /// ```
    pub fn reset(&mut self) {
        if self.slot.take().is_some() {
            tracing::trace!("cached lazy getter reset");
        }
    }
}

impl<R, E, F> CachedLazyGetter<R, F>
where
    F: Fn() -> Result<R, E>,
{
    /// Creates a new getter bound to `producer`.
    ///
    /// The producer is not called until [`force`](Self::force) (or
    /// [`Getter::get`]) is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::CachedLazyGetter;
    ///
    /// let getter = CachedLazyGetter::new(|| {
    ///     println!("Initializing...");
    ///     Ok::<_, String>(42)
    /// });
    /// // Nothing printed yet
    /// # let _ = getter;
    /// ```
    #[inline]
    pub fn new(producer: F) -> Self {
        Self {
            slot: OnceLock::new(),
            init_lock: Mutex::new(()),
            producer,
        }
    }

    /// Returns a reference to the value, computing it on first access.
    ///
    /// If several threads call `force` before the value exists, exactly one
    /// of them runs the producer while the others wait on the initialization
    /// mutex; all of them then observe the same value.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged. The slot stays empty, so a
    /// later call retries the producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::CachedLazyGetter;
    /// use std::cell::Cell;
    ///
    /// let attempts = Cell::new(0);
    /// let getter = CachedLazyGetter::new(|| {
    ///     attempts.set(attempts.get() + 1);
    ///     if attempts.get() < 2 { Err("not yet") } else { Ok(42) }
    /// });
    ///
    /// assert_eq!(getter.force(), Err("not yet"));
    /// assert_eq!(getter.force(), Ok(&42));
    /// assert_eq!(getter.force(), Ok(&42));
    /// assert_eq!(attempts.get(), 2);
    /// ```
    #[inline]
    pub fn force(&self) -> Result<&R, E> {
        match self.slot.get() {
            Some(value) => Ok(value),
            None => self.force_slow(),
        }
    }

    #[cold]
    fn force_slow(&self) -> Result<&R, E> {
        let _guard = self.init_lock.lock();

        // Another caller may have filled the slot while we waited.
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }

        tracing::trace!("running cached lazy getter producer");
        match (self.producer)() {
            Ok(value) => {
                tracing::trace!("cached lazy getter value stored");
                Ok(self.slot.get_or_init(|| value))
            }
            Err(error) => {
                tracing::debug!("cached lazy getter producer failed, slot left empty");
                Err(error)
            }
        }
    }

    /// Consumes the getter and returns the value, computing it if necessary.
    ///
    /// # Errors
    ///
    /// Returns the producer's error if the value was not cached and the
    /// producer fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::action::CachedLazyGetter;
    ///
    /// let getter = CachedLazyGetter::new(|| Ok::<_, String>(42));
    /// assert_eq!(getter.into_inner(), Ok(42));
    /// ```
    pub fn into_inner(self) -> Result<R, E> {
        match self.slot.into_inner() {
            Some(value) => Ok(value),
            None => (self.producer)(),
        }
    }
}

impl<R, E, F> Getter<R> for CachedLazyGetter<R, F>
where
    R: Clone,
    F: Fn() -> Result<R, E>,
{
    type Error = E;

    /// Returns a clone of the cached value, computing it on first access.
    fn get(&self) -> Result<R, E> {
        self.force().cloned()
    }
}

fn default_producer<R: Default>() -> Result<R, Infallible> {
    Ok(R::default())
}

impl<R: Default> Default for CachedLazyGetter<R, fn() -> Result<R, Infallible>> {
    /// Creates a getter that lazily computes the default value of `R`.
    fn default() -> Self {
        Self::new(default_producer::<R>)
    }
}

impl<R: fmt::Debug, F> fmt::Debug for CachedLazyGetter<R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter
                .debug_tuple("CachedLazyGetter")
                .field(value)
                .finish(),
            None => formatter.write_str("CachedLazyGetter(<uncomputed>)"),
        }
    }
}

impl<R: fmt::Display, F> fmt::Display for CachedLazyGetter<R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => fmt::Display::fmt(value, formatter),
            None => formatter.write_str("<uncomputed>"),
        }
    }
}
