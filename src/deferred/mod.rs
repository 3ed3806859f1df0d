//! Deferred values: the state of something produced asynchronously.
//!
//! [`Deferred`] is a tagged union with one variant per state
//! (`NotStarted`, `InProgress`, `Resolved`). [`DeferredResult`] is the
//! fallible specialisation, resolving to a `Result`.
//!
//! Matchers hold one [`Arm`] per state. An arm is either a constant or a
//! computation, and every arm is evaluated through [`Arm::resolve`].
//!
//! Equality questions about resolved values ("is this resolved with X?")
//! take an [`EqualityComparer`](crate::comparer::EqualityComparer), with a
//! `_default` variant using [`PartialEq`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::deferred::{Arm, Deferred, PartialDeferredMatcher};
//!
//! let label = Deferred::resolved(42).match_or_else(
//!     PartialDeferredMatcher::new().resolved(Arm::compute(|n: i32| n.to_string())),
//!     Arm::lazy(|| String::from("pending")),
//! );
//! assert_eq!(label, "42");
//! ```

mod arm;
mod result;
mod state;

pub use arm::Arm;
pub use result::{DeferredResult, DeferredResultMatcher};
pub use state::{Deferred, DeferredMatcher, PartialDeferredMatcher};
