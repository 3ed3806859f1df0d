//! The comparer algebra: equality and ordering relations as values.
//!
//! This module provides two capability types that every other part of the
//! library consumes whenever it needs to compare values:
//!
//! - [`EqualityComparer`]: "are these two values equivalent?"
//! - [`OrderingComparer`]: "how do these two values order?"
//!
//! Each holds exactly one closure. New relations are derived from existing
//! ones by building a new comparer that closes over the old ones:
//!
//! | Combinator | Result |
//! |------------|--------|
//! | [`OrderingComparer::reverse`] | the opposite order |
//! | [`OrderingComparer::derive_from`] | order by a projected key |
//! | [`OrderingComparer::composite`] / [`OrderingComparer::then`] | "and then by" |
//! | [`OrderingComparer::to_equality_comparer`] | equality induced by the order |
//! | [`EqualityComparer::derive_from`] | equality of a projected key |
//! | [`EqualityComparer::sequence`] | element-wise equality of sequences |
//! | [`EqualityComparer::nullable`] | equality of optional values |
//!
//! Comparers are immutable, `Send + Sync` and cheap to clone, so they can be
//! built once and shared between threads.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::{EqualityComparer, OrderingComparer};
//!
//! let ascending = OrderingComparer::<i32>::natural();
//! let mut numbers = vec![-11, -13, 2, 0, 45, 1, 8, 2, 100, -1];
//! ascending.sort(&mut numbers);
//! assert_eq!(numbers, vec![-13, -11, -1, 0, 1, 2, 2, 8, 45, 100]);
//!
//! let same_sequence = EqualityComparer::<i32>::default().sequence::<Vec<i32>>();
//! assert!(same_sequence.equals(&numbers, &numbers.clone()));
//! ```

mod equality;
mod instances;
mod ordering;

pub use equality::EqualityComparer;
pub use ordering::OrderingComparer;

static_assertions::assert_impl_all!(EqualityComparer<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(EqualityComparer<str>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderingComparer<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderingComparer<[u8]>: Send, Sync, Clone);
