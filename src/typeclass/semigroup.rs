//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! For comparers "equal" means "agrees on every input": two ordering
//! comparers are the same when they return the same [`Ordering`] for every
//! pair of values.
//!
//! [`Ordering`]: std::cmp::Ordering

use crate::comparer::{EqualityComparer, OrderingComparer};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::typeclass::Semigroup;
/// use std::cmp::Ordering;
///
/// let by_length = OrderingComparer::<usize>::natural().derive_from(|text: &String| text.len());
/// let alphabetical = OrderingComparer::<String>::natural();
/// let comparer = by_length.combine(alphabetical);
///
/// assert_eq!(comparer.compare(&"bb".into(), &"a".into()), Ordering::Greater);
/// assert_eq!(comparer.compare(&"ab".into(), &"ba".into()), Ordering::Less);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that returns the
    /// identity element instead, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Comparer Implementations
// =============================================================================

/// "And then by": `self` decides, `other` breaks its ties.
impl<A: ?Sized + 'static> Semigroup for OrderingComparer<A> {
    fn combine(self, other: Self) -> Self {
        self.then(&other)
    }
}

/// Conjunction: values are equal when both comparers say so.
impl<A: ?Sized + 'static> Semigroup for EqualityComparer<A> {
    fn combine(self, other: Self) -> Self {
        self.and(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    fn ordering_combine_is_then() {
        let by_tens = OrderingComparer::<i32>::natural().derive_from(|n: &i32| n / 10);
        let by_units = OrderingComparer::<i32>::natural().derive_from(|n: &i32| n % 10);
        let combined = by_tens.combine(by_units.reverse());

        assert_eq!(combined.compare(&12, &21), Ordering::Less);
        assert_eq!(combined.compare(&12, &13), Ordering::Greater);
        assert_eq!(combined.compare(&12, &12), Ordering::Equal);
    }

    #[rstest]
    fn equality_combine_is_and() {
        let by_tens = EqualityComparer::<i32>::default().derive_from(|n: &i32| n / 10);
        let by_parity = EqualityComparer::<i32>::default().derive_from(|n: &i32| n % 2);
        let combined = by_tens.combine(by_parity);

        assert!(combined.equals(&12, &14));
        assert!(!combined.equals(&12, &13));
        assert!(!combined.equals(&12, &22));
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        assert!(OrderingComparer::<i32>::reduce_all(Vec::new()).is_none());
    }

    #[rstest]
    fn reduce_all_chains_in_order() {
        let comparers = vec![
            OrderingComparer::<i32>::natural().derive_from(|pair: &(i32, i32)| pair.0),
            OrderingComparer::<i32>::natural()
                .derive_from(|pair: &(i32, i32)| pair.1)
                .reverse(),
        ];
        let combined = OrderingComparer::reduce_all(comparers);
        assert_eq!(
            combined.map(|comparer| comparer.compare(&(1, 1), &(1, 2))),
            Some(Ordering::Greater)
        );
    }
}
