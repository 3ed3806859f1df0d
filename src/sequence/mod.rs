//! Curried slice and `Vec` operations driven by comparers.
//!
//! Every function takes the comparer (and any other configuration) first and
//! returns a closure over the collection, so the operations compose with
//! [`pipe!`](crate::pipe). The comparer is the only ordering or equality
//! oracle used; nothing falls back to `Ord` or `PartialEq`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::{EqualityComparer, OrderingComparer};
//! use fpkit::{pipe, sequence};
//!
//! let ascending = OrderingComparer::<i32>::natural();
//! let same_magnitude = EqualityComparer::<i32>::default().derive_from(|n: &i32| n.abs());
//!
//! let result = pipe!(
//!     vec![3, -1, 2, 1, -3],
//!     sequence::uniq(&same_magnitude),
//!     sequence::sort(&ascending.reverse())
//! );
//! assert_eq!(result, vec![3, 2, -1]);
//! ```

use crate::comparer::{EqualityComparer, OrderingComparer};

/// Sorts a vector with `comparer`. The sort is stable.
pub fn sort<A: 'static>(comparer: &OrderingComparer<A>) -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    let comparer = comparer.clone();
    move |mut values| {
        comparer.sort(&mut values);
        values
    }
}

/// Sorts a vector by a projected key ordered with `comparer`.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::sequence;
///
/// let by_length = sequence::sort_by(|word: &String| word.len(), &OrderingComparer::natural());
/// let sorted = by_length(vec!["ccc".to_string(), "a".to_string(), "bb".to_string()]);
/// assert_eq!(sorted, ["a", "bb", "ccc"]);
/// ```
pub fn sort_by<A, K, F>(key: F, comparer: &OrderingComparer<K>) -> impl Fn(Vec<A>) -> Vec<A> + use<A, K, F>
where
    A: 'static,
    K: 'static,
    F: Fn(&A) -> K + Send + Sync + 'static,
{
    sort(&comparer.derive_from(key))
}

/// Removes every element equal (under `comparer`) to an earlier one,
/// keeping the first of each group in its original position.
pub fn uniq<A: 'static>(comparer: &EqualityComparer<A>) -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    let comparer = comparer.clone();
    move |values| {
        let mut unique: Vec<A> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.iter().any(|kept| comparer.equals(kept, &value)) {
                unique.push(value);
            }
        }
        unique
    }
}

/// Tests whether a slice holds a value equal (under `comparer`) to `value`.
pub fn contains<A: 'static>(value: A, comparer: &EqualityComparer<A>) -> impl Fn(&[A]) -> bool + use<A> {
    let is_expected = comparer.to_predicate(value);
    move |values| values.iter().any(&is_expected)
}

/// The smallest element under `comparer`, the earliest one on ties, or
/// `None` for an empty slice.
pub fn min<A: 'static>(comparer: &OrderingComparer<A>) -> impl for<'a> Fn(&'a [A]) -> Option<&'a A> + use<A> {
    let comparer = comparer.clone();
    move |values| {
        values
            .iter()
            .reduce(|smallest, value| comparer.min(smallest, value))
    }
}

/// The largest element under `comparer`, the earliest one on ties, or
/// `None` for an empty slice.
pub fn max<A: 'static>(comparer: &OrderingComparer<A>) -> impl for<'a> Fn(&'a [A]) -> Option<&'a A> + use<A> {
    let comparer = comparer.clone();
    move |values| {
        values
            .iter()
            .reduce(|largest, value| comparer.max(largest, value))
    }
}

/// Element-wise equality of two slices: equal lengths and every pair equal
/// under `comparer`.
pub fn equals<A: 'static>(comparer: &EqualityComparer<A>) -> EqualityComparer<[A]> {
    comparer.sequence()
}

// =============================================================================
// Default-comparer variants
// =============================================================================

/// [`sort`] with [`OrderingComparer::natural`].
///
/// # Examples
///
/// ```rust
/// use fpkit::{pipe, sequence};
///
/// assert_eq!(pipe!(vec![3, 1, 2], sequence::sort_default()), vec![1, 2, 3]);
/// ```
pub fn sort_default<A: Ord + 'static>() -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    sort(&OrderingComparer::natural())
}

/// [`uniq`] with [`EqualityComparer::default`].
pub fn uniq_default<A: PartialEq + 'static>() -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    uniq(&EqualityComparer::default())
}

/// [`contains`] with [`EqualityComparer::default`].
pub fn contains_default<A: PartialEq + 'static>(value: A) -> impl Fn(&[A]) -> bool + use<A> {
    contains(value, &EqualityComparer::default())
}

/// [`min`] with [`OrderingComparer::natural`].
pub fn min_default<A: Ord + 'static>() -> impl for<'a> Fn(&'a [A]) -> Option<&'a A> + use<A> {
    min(&OrderingComparer::natural())
}

/// [`max`] with [`OrderingComparer::natural`].
pub fn max_default<A: Ord + 'static>() -> impl for<'a> Fn(&'a [A]) -> Option<&'a A> + use<A> {
    max(&OrderingComparer::natural())
}

/// [`equals`] with [`EqualityComparer::default`].
pub fn equals_default<A: PartialEq + 'static>() -> EqualityComparer<[A]> {
    equals(&EqualityComparer::default())
}
