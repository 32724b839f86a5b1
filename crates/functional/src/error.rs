//! Fatal access errors
//!
//! Reading the payload out of a container in the wrong variant is the only
//! way any operation in this crate can fail. The panicking accessors report
//! one of these errors as their panic message; the `try_*` accessors return
//! it.

use thiserror::Error;

/// An attempt to read a payload the container does not hold.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// `unwrap` on an empty `Optional`.
    #[error("called `Optional::unwrap()` on a `None` value")]
    EmptyAccess,

    /// `unwrap_error` on a successful `Outcome`.
    #[error("called `Outcome::unwrap_error()` on an `Ok` value")]
    InvalidErrorAccess,

    /// `unwrap` on a failed `Outcome`.
    #[error("called `Outcome::unwrap()` on an `Err` value: {description}")]
    FailedAccess {
        /// The failure payload's own description.
        description: String,
    },
}

impl AccessError {
    /// A stable, machine-readable name for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyAccess => "empty_access",
            Self::InvalidErrorAccess => "invalid_error_access",
            Self::FailedAccess { .. } => "failed_access",
        }
    }
}

/// Reports `err` and panics with its message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fatal(err: AccessError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(target: "functional::access", kind = err.kind(), "{err}");
    panic!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AccessError::EmptyAccess.to_string(),
            "called `Optional::unwrap()` on a `None` value"
        );
        assert_eq!(
            AccessError::FailedAccess {
                description: "disk full".into()
            }
            .to_string(),
            "called `Outcome::unwrap()` on an `Err` value: disk full"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(AccessError::EmptyAccess.kind(), "empty_access");
        assert_eq!(AccessError::InvalidErrorAccess.kind(), "invalid_error_access");
    }

    #[test]
    #[should_panic(expected = "on a `None` value")]
    fn test_fatal_panics() {
        fatal(AccessError::EmptyAccess);
    }
}
