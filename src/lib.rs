//! # fpkit
//!
//! Small, composable functional-programming primitives for Rust, meant to be
//! combined in function pipelines.
//!
//! ## Overview
//!
//! - **Comparers**: [`EqualityComparer`](comparer::EqualityComparer) and
//!   [`OrderingComparer`](comparer::OrderingComparer), equality and ordering
//!   relations as values, with combinators for reversal, projection,
//!   "and then by" composition, range tests and order-induced equality
//! - **Deferred**: a tagged union for asynchronous state with value-or-thunk
//!   matchers
//! - **Non-empty collections**: [`NonEmptyVec`](non_empty::NonEmptyVec)
//! - **Nullable and sequence helpers**: curried functions over `Option` and
//!   `Vec` that take comparers as their only ordering/equality oracle
//! - **Function composition**: [`pipe!`] and [`compose!`]
//! - **Type classes**: `Semigroup` and `Monoid`, implemented by both comparers
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` / `Monoid`
//! - `compose`: `pipe!`, `compose!` and basic combinators
//! - `deferred`: `Deferred` and `DeferredResult`
//! - `non_empty`: `NonEmptyVec`
//! - `nullable`: curried `Option` helpers
//! - `sequence`: curried slice/`Vec` helpers
//! - `serde`: serialization for `Deferred` and `NonEmptyVec`
//! - `chrono`: chronological comparers for `chrono` dates
//! - `full`: enable all features
//!
//! The comparer algebra is always available.
//!
//! ## Example
//!
//! ```rust
//! use fpkit::comparer::OrderingComparer;
//!
//! struct Cat { name: &'static str, age: u32, lives_remaining: u32 }
//!
//! let comparer = OrderingComparer::composite([
//!     OrderingComparer::<str>::natural().derive_from_ref(|cat: &Cat| cat.name),
//!     OrderingComparer::<u32>::natural().derive_from(|cat: &Cat| cat.age),
//!     OrderingComparer::<u32>::natural()
//!         .derive_from(|cat: &Cat| cat.lives_remaining)
//!         .reverse(),
//! ]);
//!
//! let mut cats = vec![
//!     Cat { name: "Gerald", age: 5, lives_remaining: 7 },
//!     Cat { name: "Arnold", age: 1, lives_remaining: 9 },
//!     Cat { name: "Gerald", age: 5, lives_remaining: 9 },
//! ];
//! comparer.sort(&mut cats);
//!
//! let order: Vec<_> = cats.iter().map(|cat| (cat.name, cat.lives_remaining)).collect();
//! assert_eq!(order, vec![("Arnold", 9), ("Gerald", 9), ("Gerald", 7)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fpkit::prelude::*;
///
/// let comparer = OrderingComparer::<i32>::natural();
/// assert!(comparer.lt(&1, &2));
/// ```
pub mod prelude {
    pub use crate::comparer::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "deferred")]
    pub use crate::deferred::*;

    #[cfg(feature = "non_empty")]
    pub use crate::non_empty::*;
}

pub mod comparer;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "deferred")]
pub mod deferred;

#[cfg(feature = "non_empty")]
pub mod non_empty;

#[cfg(feature = "nullable")]
pub mod nullable;

#[cfg(feature = "sequence")]
pub mod sequence;
