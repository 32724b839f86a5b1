//! Optional and Outcome containers
//!
//! This crate provides two algebraic container types and a shared algebra of
//! combinators for composing computations without explicit null checks or
//! panicking control flow.
//!
//! # Overview
//!
//! - [`Optional<T>`]: a value of type `T`, or nothing (`Some` / `None`)
//! - [`Outcome<T, E>`]: a success value of type `T`, or a failure payload `E`
//!   (`Ok` / `Err`)
//! - [`Unit`]: the value that carries no information
//!
//! Both containers expose the same surface: mapping, binding, matching,
//! folding, filtering, existence checks, defaulting, combining, flattening
//! and iteration. An `Outcome` can be narrowed to an `Optional` with
//! [`Outcome::to_optional`], which discards the failure payload.
//!
//! ```
//! use functional::{Optional, Outcome};
//!
//! let port: Optional<u16> = Optional::Some(8080);
//! let rendered = port.map(|p| p.to_string());
//! assert_eq!(rendered, Optional::Some("8080".to_string()));
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(42);
//! let doubled = parsed.bind(|v| Outcome::Ok(v * 2));
//! assert_eq!(doubled.to_optional(), Optional::Some(84));
//! ```
//!
//! # Fatal access
//!
//! [`Optional::unwrap`], [`Outcome::unwrap`] and [`Outcome::unwrap_error`]
//! panic when the container is in the wrong variant. Prefer `match_with`,
//! `fold` or the `default_*` family; the `try_*` variants return an
//! [`AccessError`] instead of panicking.
//!
//! # Features
//!
//! - `tracing` (default): fatal accesses emit a `tracing` error event before
//!   panicking
//! - `serde`: `Serialize` / `Deserialize` for all public types

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod unit;

pub use error::AccessError;
pub use optional::Optional;
pub use outcome::{BoxError, Outcome};
pub use unit::Unit;
