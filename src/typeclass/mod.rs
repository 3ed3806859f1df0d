//! Algebraic type classes for combining values.
//!
//! - [`Semigroup`]: types with an associative `combine`
//! - [`Monoid`]: semigroups with an identity element `empty`
//!
//! Both comparer types are monoids. [`OrderingComparer`] combines as
//! "and then by" with the always-tied comparer as identity, and
//! [`EqualityComparer`] combines as conjunction with the always-equal
//! comparer as identity.
//!
//! [`OrderingComparer`]: crate::comparer::OrderingComparer
//! [`EqualityComparer`]: crate::comparer::EqualityComparer
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::OrderingComparer;
//! use fpkit::typeclass::{Monoid, Semigroup};
//! use std::cmp::Ordering;
//!
//! let by_first = OrderingComparer::<i32>::natural().derive_from(|pair: &(i32, i32)| pair.0);
//! let by_second = OrderingComparer::<i32>::natural().derive_from(|pair: &(i32, i32)| pair.1);
//!
//! let comparer = OrderingComparer::<(i32, i32)>::empty().combine(by_first).combine(by_second);
//! assert_eq!(comparer.compare(&(1, 9), &(1, 2)), Ordering::Greater);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
