//! Collections that are guaranteed to hold at least one element.
//!
//! [`NonEmptyVec`] makes `head`, `last`, `min` and `max` total. Ordering and
//! deduplication take an explicit comparer, so the same vector can be sorted
//! by any key without wrapper types.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::OrderingComparer;
//! use fpkit::non_empty::NonEmptyVec;
//!
//! struct Score { player: &'static str, points: u32 }
//!
//! let scores = NonEmptyVec::new(
//!     Score { player: "ada", points: 7 },
//!     vec![Score { player: "bob", points: 9 }, Score { player: "cy", points: 3 }],
//! );
//! let by_points = OrderingComparer::<u32>::natural().derive_from(|score: &Score| score.points);
//!
//! assert_eq!(scores.max(&by_points).player, "bob");
//! assert_eq!(scores.min(&by_points).player, "cy");
//! ```

mod error;
mod vec;

pub use error::EmptyError;
pub use vec::NonEmptyVec;
