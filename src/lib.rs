//! # actionkit
//!
//! Small building blocks for deferred values and typed error passthrough.
//!
//! ## Overview
//!
//! This library provides two independent primitives:
//!
//! - **Actions**: getter and setter capabilities, a thread-safe lazy getter
//!   that computes its value at most once, and a shared resettable cell
//! - **Exceptions**: covering a typed error so it can cross an API that only
//!   speaks `Box<dyn Error>`, and uncovering it again at a chosen boundary
//!
//! ## Feature Flags
//!
//! - `action`: Getter capabilities, `CachedLazyGetter`, `ResettableGetter`
//! - `exception`: `CoveredError` and `run_and_uncover_if_covered`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use actionkit::prelude::*;
//!
//! let answer = cached_lazy_getter2(|a: &i32, b: &i32| a * b, 6, 7);
//! assert_eq!(answer.get(), Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and builders.
///
/// # Usage
///
/// ```rust
/// use actionkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "action")]
    pub use crate::action::*;

    #[cfg(feature = "exception")]
    pub use crate::exception::*;
}

#[cfg(feature = "action")]
pub mod action;

#[cfg(feature = "exception")]
pub mod exception;
