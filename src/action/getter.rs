//! Getter and setter capabilities.
//!
//! These traits describe what a holder of an action may do with it, without
//! committing to how the value is produced or stored:
//!
//! - [`Getter`]: read the current value, possibly failing
//! - [`Setter`]: store a new value
//! - [`SettableGetter`]: both of the above over the same slot
//!
//! # Examples
//!
//! ```rust
//! use actionkit::action::{Getter, SettableGetter, resettable_getter};
//!
//! fn bump<S: SettableGetter<i32>>(slot: &S) {
//!     let current = slot.get().ok().unwrap_or(0);
//!     slot.set(current + 1);
//! }
//!
//! let counter = resettable_getter();
//! bump(&counter);
//! bump(&counter);
//! assert_eq!(counter.get(), Ok(2));
//! ```

/// A capability that yields a value of type `R`.
///
/// Obtaining the value may fail; the failure type is chosen by the
/// implementation. Getters that can never fail use
/// [`Infallible`](std::convert::Infallible).
pub trait Getter<R> {
    /// The error returned when no value can be produced.
    type Error;

    /// Returns the value of this getter.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the value cannot be obtained.
    fn get(&self) -> Result<R, Self::Error>;
}

/// A capability that stores a value of type `R`.
pub trait Setter<R> {
    /// Stores `value`, replacing whatever was stored before.
    fn set(&self, value: R);
}

/// A [`Getter`] and a [`Setter`] over the same value slot.
///
/// Implemented automatically for every type that provides both capabilities.
pub trait SettableGetter<R>: Getter<R> + Setter<R> {}

impl<R, T: Getter<R> + Setter<R>> SettableGetter<R> for T {}
