//! The cover carrier.
//!
//! [`CoveredError`] wraps an arbitrary error so that it can travel through an
//! interface whose error type is erased to [`BoxError`]. The cover has no
//! meaning of its own; it is only ever unwrapped again, usually by
//! [`run_and_uncover_if_covered`](super::run_and_uncover_if_covered).

use std::error::Error;
use std::fmt;

/// A type-erased, thread-safe error.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An opaque carrier for an underlying error.
///
/// # Examples
///
/// ```rust
/// use actionkit::exception::CoveredError;
/// use std::error::Error;
///
/// let covered = CoveredError::new(std::io::Error::other("disk full"));
/// assert!(covered.covered().is::<std::io::Error>());
/// assert_eq!(covered.source().map(|source| source.to_string()), Some("disk full".into()));
/// ```
#[derive(Debug)]
pub struct CoveredError {
    cause: BoxError,
}

impl CoveredError {
    /// Covers `cause`.
    pub fn new(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Covers `cause` and erases the cover into a [`BoxError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::exception::{BoxError, CoveredError};
    ///
    /// fn callback() -> Result<(), BoxError> {
    ///     let port: u16 = "http".parse().map_err(CoveredError::cover)?;
    ///     println!("{port}");
    ///     Ok(())
    /// }
    ///
    /// assert!(callback().unwrap_err().is::<CoveredError>());
    /// ```
    pub fn cover(cause: impl Into<BoxError>) -> BoxError {
        Box::new(Self::new(cause))
    }

    /// Returns the covered error.
    pub fn covered(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Removes the cover, returning the covered error.
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl fmt::Display for CoveredError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "covered error: {}", self.cause)
    }
}

impl Error for CoveredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Extension trait for covering the error of a `Result`.
pub trait CoverExt<T> {
    /// Covers the error, if any, and erases it into a [`BoxError`].
    ///
    /// # Errors
    ///
    /// Returns the covered error when `self` is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use actionkit::exception::{CoverExt, CoveredError};
    ///
    /// let result = "x".parse::<i32>().cover_err();
    /// assert!(result.unwrap_err().is::<CoveredError>());
    /// ```
    fn cover_err(self) -> Result<T, BoxError>;
}

impl<T, E> CoverExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn cover_err(self) -> Result<T, BoxError> {
        self.map_err(CoveredError::cover)
    }
}
