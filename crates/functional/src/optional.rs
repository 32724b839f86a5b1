//! Optional type and operations
//!
//! An `Optional<T>` either holds a value of type `T` (`Some`) or nothing
//! (`None`). The variant is fixed at construction; every combinator returns a
//! new `Optional` instead of modifying the receiver.
//!
//! Transformations passed to `map`, `bind`, `fold` and friends are never
//! invoked on a `None` value.

use crate::error::{fatal, AccessError};
use crate::unit::Unit;
use std::fmt;

/// A value of type `T`, or nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "combinators return a new `Optional` and leave the receiver untouched"]
pub enum Optional<T> {
    /// No value
    #[default]
    None,
    /// Contains a value
    Some(T),
}

/// Creates an `Optional` holding `value`.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Creates an empty `Optional`.
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the contained value, consuming `self`.
    ///
    /// This is a last resort; prefer [`match_with`](Self::match_with),
    /// [`default_value`](Self::default_value) or
    /// [`default_with`](Self::default_with).
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::EmptyAccess`] if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fatal(AccessError::EmptyAccess),
        }
    }

    /// Returns the contained value, or [`AccessError::EmptyAccess`].
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AccessError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AccessError::EmptyAccess),
        }
    }

    /// Maps an `Optional<T>` to `Optional<U>` by applying `f` to a contained
    /// value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::None => Optional::None,
            Self::Some(value) => Optional::Some(f(value)),
        }
    }

    /// Monadic bind: chains a computation that may itself produce nothing.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::None => Optional::None,
            Self::Some(value) => f(value),
        }
    }

    /// Exhaustive case analysis. Exactly one of the branches is invoked.
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Folds the contained value into `seed`. Returns `seed` unchanged on
    /// `None`.
    #[inline]
    pub fn fold<S, F>(self, seed: S, f: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Some(value) => f(seed, value),
            Self::None => seed,
        }
    }

    /// Like [`fold`](Self::fold), but the folded result may have a different
    /// type and stays wrapped: `None` folds to `None`.
    #[inline]
    pub fn fold_to_optional<S, U, F>(self, seed: S, f: F) -> Optional<U>
    where
        F: FnOnce(S, T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(f(seed, value)),
            Self::None => Optional::None,
        }
    }

    /// Combines two values with `f`, which receives `other`'s value first.
    ///
    /// Yields `None` if either side is `None`.
    #[inline]
    pub fn combine_by<W, R, F>(self, other: Optional<W>, f: F) -> Optional<R>
    where
        F: FnOnce(W, T) -> R,
    {
        match (self, other) {
            (Self::Some(value), Optional::Some(w)) => Optional::Some(f(w, value)),
            _ => Optional::None,
        }
    }

    /// Keeps a `Some` value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `true` if this is `Some` and `predicate` holds for the value.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `Some` and the value equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn default_value(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes a fallback.
    ///
    /// `f` is only invoked on `None`.
    #[inline]
    pub fn default_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Runs `f` on the contained value, if any.
    #[inline]
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            f(value);
        }
    }

    /// Replaces the contained value with [`Unit`], keeping only presence.
    #[inline]
    pub fn void(self) -> Optional<Unit> {
        self.map(Unit::discard)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Self::None => Optional::None,
            Self::Some(ref value) => Optional::Some(value),
        }
    }

    /// Returns an iterator over the contained value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Some(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
