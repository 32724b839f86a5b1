//! Conversions between the containers and their `std` counterparts
//!
//! `Outcome -> Optional` discards the failure payload. `Optional -> Outcome`
//! needs the caller to supply one. The `std` bridges let both containers
//! interoperate with `?` and the rest of the ecosystem.

use crate::optional::Optional;
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Converts to an `Optional`, discarding the failure payload.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(_) => Optional::None,
        }
    }
}

impl<T> Optional<T> {
    /// Converts to an `Outcome`, using `err` when there is no value.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(err),
        }
    }

    /// Converts to an `Outcome`, computing the failure only when there is no
    /// value.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(f()),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Optional<T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_optional()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Optional::None,
            Some(value) => Optional::Some(value),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::None => None,
            Optional::Some(value) => Some(value),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}
