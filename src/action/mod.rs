//! Actions: getter capabilities and their implementations.
//!
//! This module provides:
//!
//! - [`Getter`], [`Setter`], [`SettableGetter`]: capability traits
//! - [`CachedLazyGetter`]: thread-safe lazy evaluation with memoization
//! - [`ResettableGetter`]: a shared cell that can be set and cleared
//! - Builder functions that bind producers and their arguments
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use actionkit::action::{Getter, cached_lazy_getter};
//!
//! let getter = cached_lazy_getter(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! assert_eq!(getter.get(), Ok(42));
//! // Now it has been printed, exactly once
//! assert_eq!(getter.get(), Ok(42));
//! ```
//!
//! ## Resettable Slot
//!
//! ```rust
//! use actionkit::action::{Getter, Setter, resettable_getter_with};
//!
//! let slot = resettable_getter_with(1);
//! let shared = slot.clone();
//!
//! shared.set(2);
//! assert_eq!(slot.get(), Ok(2));
//!
//! shared.reset();
//! assert!(slot.get().is_err());
//! ```

mod builders;
mod cached_lazy_getter;
mod getter;
mod resettable_getter;

pub use builders::{
    cached_lazy_getter, cached_lazy_getter1, cached_lazy_getter2, cached_lazy_getter3,
    cached_lazy_getter4, resettable_getter, resettable_getter_with, try_cached_lazy_getter,
};
pub use cached_lazy_getter::CachedLazyGetter;
pub use getter::{Getter, SettableGetter, Setter};
pub use resettable_getter::{ResettableGetter, ValueAbsentError};
