//! Builder functions for actions.
//!
//! The `cached_lazy_getter*` family binds an infallible function and up to
//! four arguments into a [`CachedLazyGetter`]. The arguments are moved into
//! the getter when the builder is called and lent to the function each time
//! it runs, so later changes to the caller's copies are never observed.
//!
//! # Examples
//!
//! ```rust
//! use actionkit::action::{Getter, cached_lazy_getter1};
//!
//! let path = String::from("/etc/hosts");
//! let length = cached_lazy_getter1(|path: &String| path.len(), path);
//! assert_eq!(length.get(), Ok(10));
//! ```

use std::convert::Infallible;

use super::cached_lazy_getter::CachedLazyGetter;
use super::resettable_getter::ResettableGetter;

/// Builds an empty [`ResettableGetter`].
#[inline]
pub fn resettable_getter<R>() -> ResettableGetter<R> {
    ResettableGetter::new()
}

/// Builds a [`ResettableGetter`] holding `init_value`.
#[inline]
pub fn resettable_getter_with<R>(init_value: R) -> ResettableGetter<R> {
    ResettableGetter::with_value(init_value)
}

/// Builds a lazy getter from a supplier.
///
/// # Examples
///
/// ```rust
/// use actionkit::action::cached_lazy_getter;
///
/// let getter = cached_lazy_getter(|| vec![1, 2, 3]);
/// assert_eq!(getter.force().map(Vec::len), Ok(3));
/// ```
pub fn cached_lazy_getter<R>(
    supplier: impl Fn() -> R,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, Infallible>> {
    CachedLazyGetter::new(move || Ok(supplier()))
}

/// Builds a lazy getter from a fallible producer.
///
/// Equivalent to [`CachedLazyGetter::new`].
pub fn try_cached_lazy_getter<R, E>(
    producer: impl Fn() -> Result<R, E>,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, E>> {
    CachedLazyGetter::new(producer)
}

/// Builds a lazy getter from a one-argument function and its argument.
pub fn cached_lazy_getter1<R, T>(
    function: impl Fn(&T) -> R,
    arg: T,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, Infallible>> {
    CachedLazyGetter::new(move || Ok(function(&arg)))
}

/// Builds a lazy getter from a two-argument function and its arguments.
pub fn cached_lazy_getter2<R, T1, T2>(
    function: impl Fn(&T1, &T2) -> R,
    arg1: T1,
    arg2: T2,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, Infallible>> {
    CachedLazyGetter::new(move || Ok(function(&arg1, &arg2)))
}

/// Builds a lazy getter from a three-argument function and its arguments.
pub fn cached_lazy_getter3<R, T1, T2, T3>(
    function: impl Fn(&T1, &T2, &T3) -> R,
    arg1: T1,
    arg2: T2,
    arg3: T3,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, Infallible>> {
    CachedLazyGetter::new(move || Ok(function(&arg1, &arg2, &arg3)))
}

/// Builds a lazy getter from a four-argument function and its arguments.
///
/// # Examples
///
/// ```rust
/// use actionkit::action::{Getter, cached_lazy_getter4};
///
/// let sum = cached_lazy_getter4(|a: &u8, b: &u8, c: &u8, d: &u8| a + b + c + d, 1, 2, 3, 4);
/// assert_eq!(sum.get(), Ok(10));
/// ```
pub fn cached_lazy_getter4<R, T1, T2, T3, T4>(
    function: impl Fn(&T1, &T2, &T3, &T4) -> R,
    arg1: T1,
    arg2: T2,
    arg3: T3,
    arg4: T4,
) -> CachedLazyGetter<R, impl Fn() -> Result<R, Infallible>> {
    CachedLazyGetter::new(move || Ok(function(&arg1, &arg2, &arg3, &arg4)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Getter, Setter, ValueAbsentError};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_cached_lazy_getter_calls_supplier_once() {
        let calls = Cell::new(0);
        let getter = cached_lazy_getter(|| {
            calls.set(calls.get() + 1);
            "value"
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(getter.get(), Ok("value"));
        assert_eq!(getter.get(), Ok("value"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_try_cached_lazy_getter_propagates_error() {
        let getter = try_cached_lazy_getter(|| "x".parse::<i32>());
        assert!(getter.get().is_err());
        assert!(!getter.is_computed());
    }

    #[rstest]
    fn test_arguments_are_captured_at_build_time() {
        let mut base = 10;
        let getter = cached_lazy_getter1(|value: &i32| value * 2, base);
        base += 1;

        assert_eq!(getter.get(), Ok(20));
        assert_eq!(base, 11);
    }

    #[rstest]
    #[case(1, 2, 3)]
    #[case(-1, 0, -1)]
    fn test_cached_lazy_getter2(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        let getter = cached_lazy_getter2(|a: &i32, b: &i32| a + b, left, right);
        assert_eq!(getter.get(), Ok(expected));
    }

    #[rstest]
    fn test_cached_lazy_getter3() {
        let getter = cached_lazy_getter3(
            |prefix: &String, body: &String, count: &usize| {
                format!("{prefix}{}", body.repeat(*count))
            },
            "> ".to_string(),
            "ab".to_string(),
            3,
        );
        assert_eq!(getter.get(), Ok("> ababab".to_string()));
    }

    #[rstest]
    fn test_cached_lazy_getter4() {
        let getter = cached_lazy_getter4(
            |a: &u32, b: &u32, c: &u32, d: &u32| a * b * c * d,
            1,
            2,
            3,
            4,
        );
        assert_eq!(getter.get(), Ok(24));
    }

    #[rstest]
    fn test_resettable_getter_builders() {
        let empty = resettable_getter::<i32>();
        assert_eq!(empty.get(), Err(ValueAbsentError));
        empty.set(1);
        assert_eq!(empty.get(), Ok(1));

        let initial = resettable_getter_with("init");
        assert_eq!(initial.get(), Ok("init"));
    }
}
