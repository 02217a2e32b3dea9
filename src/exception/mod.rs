//! Typed error passthrough.
//!
//! Some interfaces erase the error type of the code they call: a callback
//! registry, a plugin hook, a trait object returning [`BoxError`]. This module
//! lets a caller push a specific error through such an interface and get it
//! back, typed, on the other side:
//!
//! - [`CoveredError`]: the carrier, created with [`CoveredError::cover`] or
//!   [`CoverExt::cover_err`]
//! - [`run_and_uncover_if_covered`]: runs the erased action and narrows a
//!   covered error back to the expected type
//!
//! # Examples
//!
//! ```rust
//! use actionkit::exception::{BoxError, CoverExt, Uncovered, run_and_uncover_if_covered};
//! use std::num::ParseIntError;
//!
//! fn for_each_line(
//!     text: &str,
//!     mut visit: impl FnMut(&str) -> Result<(), BoxError>,
//! ) -> Result<(), BoxError> {
//!     text.lines().try_for_each(|line| visit(line))
//! }
//!
//! let mut total = 0;
//! let result = run_and_uncover_if_covered::<ParseIntError, _, _>(|| {
//!     for_each_line("1\n2\nthree", |line| {
//!         total += line.parse::<i32>().cover_err()?;
//!         Ok(())
//!     })
//! });
//!
//! assert!(matches!(result, Err(Uncovered::Cause(_))));
//! assert_eq!(total, 3);
//! ```

mod covered;
mod uncover;

pub use covered::{BoxError, CoverExt, CoveredError};
pub use uncover::{Uncovered, run_and_uncover_if_covered, uncover};
