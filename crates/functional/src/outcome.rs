//! Outcome type and operations
//!
//! An `Outcome<T, E>` is either a success carrying a value of type `T`
//! (`Ok`) or a failure carrying a payload of type `E` (`Err`). The failure
//! payload is opaque to this crate; the only capability it is expected to
//! have is describing itself through [`Display`](std::fmt::Display).
//!
//! # Short-circuiting
//!
//! `map`, `bind`, `fold_to_outcome`, `combine_by` and `flatten` hand the
//! first failure they meet through untouched: the payload is moved into the
//! result, never cloned or rewrapped, and the supplied function is never
//! invoked.
//!
//! `combine_by` inspects the receiver before its argument, so when both are
//! failures the receiver's payload wins.

use crate::error::{fatal, AccessError};
use crate::unit::Unit;
use std::fmt;

/// The default failure payload: any error that can describe itself.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A success value of type `T`, or a failure payload of type `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E = BoxError> {
    /// Contains the success value
    Ok(T),
    /// Contains the failure payload
    Err(E),
}

/// Creates a successful `Outcome`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates a failed `Outcome`.
#[inline]
pub const fn error<T, E>(err: E) -> Outcome<T, E> {
    Outcome::Err(err)
}

impl<T, E> Outcome<T, E> {
    /// Builds an `Outcome` from a `(value, error)` pair.
    ///
    /// A present `error` wins and `value` is dropped.
    #[inline]
    pub fn from_pair(value: T, error: Option<E>) -> Self {
        match error {
            Some(err) => Self::Err(err),
            None => Self::Ok(value),
        }
    }

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns the success value, consuming `self`.
    ///
    /// Prefer [`match_with`](Self::match_with) or the `default_*` family.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::FailedAccess`], carrying the failure's
    /// description, if the value is an `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => fatal(AccessError::FailedAccess {
                description: err.to_string(),
            }),
        }
    }

    /// Returns the success value, or [`AccessError::FailedAccess`].
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AccessError>
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(err) => Err(AccessError::FailedAccess {
                description: err.to_string(),
            }),
        }
    }

    /// Returns the failure payload, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::InvalidErrorAccess`] if the value is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => fatal(AccessError::InvalidErrorAccess),
            Self::Err(err) => err,
        }
    }

    /// Returns the failure payload, or [`AccessError::InvalidErrorAccess`].
    #[inline]
    pub fn try_unwrap_error(self) -> Result<E, AccessError> {
        match self {
            Self::Ok(_) => Err(AccessError::InvalidErrorAccess),
            Self::Err(err) => Ok(err),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying `f` to a
    /// success value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Monadic bind: chains a computation that may itself fail.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Exhaustive case analysis. Exactly one of the branches is invoked.
    #[inline]
    pub fn match_with<R, O, X>(self, on_ok: O, on_err: X) -> R
    where
        O: FnOnce(T) -> R,
        X: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(err) => on_err(err),
        }
    }

    /// Folds the success value into `seed`. Returns `seed` unchanged on
    /// `Err`.
    #[inline]
    pub fn fold<S, F>(self, seed: S, f: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Ok(value) => f(seed, value),
            Self::Err(_) => seed,
        }
    }

    /// Like [`fold`](Self::fold), but the folded result stays wrapped and a
    /// failure is passed through.
    #[inline]
    pub fn fold_to_outcome<S, U, F>(self, seed: S, f: F) -> Outcome<U, E>
    where
        F: FnOnce(S, T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(seed, value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Combines two success values with `f`, which receives `other`'s value
    /// first.
    ///
    /// If `self` failed its payload is returned and `other` is dropped;
    /// otherwise a failed `other` is returned.
    #[inline]
    pub fn combine_by<W, R, F>(self, other: Outcome<W, E>, f: F) -> Outcome<R, E>
    where
        F: FnOnce(W, T) -> R,
    {
        match (self, other) {
            (Self::Err(err), _) | (Self::Ok(_), Outcome::Err(err)) => Outcome::Err(err),
            (Self::Ok(value), Outcome::Ok(w)) => Outcome::Ok(f(w, value)),
        }
    }

    /// Keeps a success only if `predicate` holds for it; otherwise the value
    /// is handed to `reject` to build the failure.
    #[inline]
    pub fn filter<P, X>(self, predicate: P, reject: X) -> Self
    where
        P: FnOnce(&T) -> bool,
        X: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(reject(value))
                }
            }
            Self::Err(err) => Self::Err(err),
        }
    }

    /// Returns `true` if this is `Ok` and `predicate` holds for the value.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Ok` and the value equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn default_value(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes a fallback from the failure.
    ///
    /// `f` is only invoked on `Err`.
    #[inline]
    pub fn default_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => f(err),
        }
    }

    /// Runs `f` on the success value, if any.
    #[inline]
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = self {
            f(value);
        }
    }

    /// Replaces the success value with [`Unit`], keeping only the failure.
    #[inline]
    pub fn void(self) -> Outcome<Unit, E> {
        self.map(Unit::discard)
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Self::Ok(ref value) => Outcome::Ok(value),
            Self::Err(ref err) => Outcome::Err(err),
        }
    }

    /// Returns an iterator over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Ok(value) => Some(value).into_iter(),
            Self::Err(_) => None.into_iter(),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting. An outer failure wins over an inner one.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.bind(|inner| inner)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => fmt::Display::fmt(value, f),
            Self::Err(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Result::<T, E>::from(self).ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
