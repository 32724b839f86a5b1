//! The Unit type
//!
//! `Unit` is the value that carries no information. It is the payload of
//! containers that only signal presence or success, and the result of
//! [`Optional::void`](crate::Optional::void) and
//! [`Outcome::void`](crate::Outcome::void).

use std::fmt;

/// The value that carries no information.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// Drops `value` and returns `Unit`.
    ///
    /// Useful for adapting a side-effecting function with a meaningful
    /// return value into one that returns nothing.
    #[inline]
    pub fn discard<T>(value: T) -> Self {
        drop(value);
        Self
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
