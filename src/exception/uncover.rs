//! Recovering a typed error from a cover.
//!
//! [`run_and_uncover_if_covered`] runs an action whose error type is erased
//! and narrows a covered error back to a caller-chosen type `E`:
//!
//! | action fails with                     | result                                  |
//! |---------------------------------------|-----------------------------------------|
//! | a [`CoveredError`] whose cause is `E` | [`Uncovered::Cause`] with the cause     |
//! | a [`CoveredError`] with another cause | [`Uncovered::Passthrough`] with the cover |
//! | any other error                       | [`Uncovered::Passthrough`] with the error |
//!
//! Exactly one type check is made, against the direct cause of the cover.
//! Causes of the cause are never inspected, and the cover itself never counts
//! as a match, even when `E` is [`CoveredError`].

use std::any::type_name;
use std::error::Error;
use std::fmt;

use super::covered::{BoxError, CoveredError};

/// The error of [`run_and_uncover_if_covered`].
///
/// # Type Parameters
///
/// * `E` - The error type the caller asked to recover
#[derive(Debug)]
pub enum Uncovered<E> {
    /// The action failed with a cover whose cause is an `E`.
    Cause(E),
    /// The action failed with something else, returned untouched.
    ///
    /// This is either a cover whose cause is not an `E`, or an error that was
    /// never covered.
    Passthrough(BoxError),
}

impl<E> Uncovered<E> {
    /// Returns `true` if the expected error was recovered.
    #[inline]
    pub const fn is_cause(&self) -> bool {
        matches!(self, Self::Cause(_))
    }

    /// Returns the recovered error, if any.
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::Cause(cause) => Some(cause),
            Self::Passthrough(_) => None,
        }
    }

    /// Returns the untouched error, if the expected one was not recovered.
    pub fn into_passthrough(self) -> Option<BoxError> {
        match self {
            Self::Cause(_) => None,
            Self::Passthrough(error) => Some(error),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Uncovered<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cause(cause) => fmt::Display::fmt(cause, formatter),
            Self::Passthrough(error) => fmt::Display::fmt(error, formatter),
        }
    }
}

impl<E: Error> Error for Uncovered<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cause(cause) => cause.source(),
            Self::Passthrough(error) => error.source(),
        }
    }
}

/// Narrows a type-erased error to `E` if it is a cover of an `E`.
///
/// This is the decision [`run_and_uncover_if_covered`] applies to a failed
/// action, usable on its own when the error is already at hand.
///
/// # Examples
///
/// ```rust
/// use actionkit::exception::{CoveredError, Uncovered, uncover};
/// use std::num::ParseIntError;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let uncovered = uncover::<ParseIntError>(CoveredError::cover(parse_error.clone()));
/// assert_eq!(uncovered.into_cause(), Some(parse_error));
/// ```
pub fn uncover<E: Error + 'static>(error: BoxError) -> Uncovered<E> {
    let covered = match error.downcast::<CoveredError>() {
        Ok(covered) => covered,
        Err(error) => return Uncovered::Passthrough(error),
    };

    if !covered.covered().is::<E>() {
        tracing::trace!(
            target_type = type_name::<E>(),
            "covered cause does not match, passing cover through"
        );
        return Uncovered::Passthrough(covered);
    }

    match covered.into_cause().downcast::<E>() {
        Ok(cause) => {
            tracing::trace!(target_type = type_name::<E>(), "uncovered matching cause");
            Uncovered::Cause(*cause)
        }
        // Unreachable after the type check above; the cause is kept covered.
        Err(cause) => Uncovered::Passthrough(CoveredError::cover(cause)),
    }
}

/// Runs `action` and uncovers its error if it is a cover of an `E`.
///
/// # Errors
///
/// - [`Uncovered::Cause`] if `action` failed with a [`CoveredError`] whose
///   cause is an `E`
/// - [`Uncovered::Passthrough`] with the original error otherwise
///
/// # Examples
///
/// ```rust
/// use actionkit::exception::{BoxError, CoverExt, Uncovered, run_and_uncover_if_covered};
/// use std::io;
///
/// // A callback API that only knows about erased errors
/// fn with_retries(callback: impl FnOnce() -> Result<(), BoxError>) -> Result<(), BoxError> {
///     callback()
/// }
///
/// let result = run_and_uncover_if_covered::<io::Error, _, _>(|| {
///     with_retries(|| Err::<(), _>(io::Error::other("unreachable host")).cover_err())
/// });
///
/// match result {
///     Err(Uncovered::Cause(error)) => assert_eq!(error.to_string(), "unreachable host"),
///     _ => panic!("expected the io::Error back"),
/// }
/// ```
pub fn run_and_uncover_if_covered<E, T, F>(action: F) -> Result<T, Uncovered<E>>
where
    E: Error + 'static,
    F: FnOnce() -> Result<T, BoxError>,
{
    action().map_err(uncover::<E>)
}
