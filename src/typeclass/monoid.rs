//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! [`OrderingComparer::tied`] is the identity of "and then by" and
//! [`EqualityComparer::always`] is the identity of conjunction, so a tie-break
//! chain of any length (including zero) folds into a single comparer.

use crate::comparer::{EqualityComparer, OrderingComparer};

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::typeclass::Monoid;
/// use std::cmp::Ordering;
///
/// let chain: Vec<OrderingComparer<(u8, u8)>> = vec![
///     OrderingComparer::<u8>::natural().derive_from(|pair: &(u8, u8)| pair.1),
///     OrderingComparer::<u8>::natural().derive_from(|pair: &(u8, u8)| pair.0),
/// ];
/// let comparer = OrderingComparer::combine_all(chain);
/// assert_eq!(comparer.compare(&(9, 1), &(0, 2)), Ordering::Less);
///
/// let nothing = OrderingComparer::<(u8, u8)>::combine_all(Vec::new());
/// assert_eq!(nothing.compare(&(9, 1), &(0, 2)), Ordering::Equal);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl<A: ?Sized + 'static> Monoid for OrderingComparer<A> {
    fn empty() -> Self {
        Self::tied()
    }
}

impl<A: ?Sized + 'static> Monoid for EqualityComparer<A> {
    fn empty() -> Self {
        Self::always()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    #[case(1, 2)]
    #[case(2, 2)]
    #[case(3, 2)]
    fn tied_is_left_and_right_identity(#[case] first: i32, #[case] second: i32) {
        let natural = OrderingComparer::<i32>::natural();
        let left = OrderingComparer::<i32>::empty().combine(natural.clone());
        let right = natural.clone().combine(OrderingComparer::<i32>::empty());

        assert_eq!(left.compare(&first, &second), natural.compare(&first, &second));
        assert_eq!(right.compare(&first, &second), natural.compare(&first, &second));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 2)]
    fn always_is_identity_of_and(#[case] first: i32, #[case] second: i32) {
        let natural = EqualityComparer::<i32>::default();
        let left = EqualityComparer::<i32>::empty().combine(natural.clone());
        let right = natural.clone().combine(EqualityComparer::<i32>::empty());

        assert_eq!(left.equals(&first, &second), natural.equals(&first, &second));
        assert_eq!(right.equals(&first, &second), natural.equals(&first, &second));
    }

    #[rstest]
    fn combine_all_matches_composite() {
        let by_tens = OrderingComparer::<i32>::natural().derive_from(|n: &i32| n / 10);
        let by_units = OrderingComparer::<i32>::natural()
            .derive_from(|n: &i32| n % 10)
            .reverse();
        let folded = OrderingComparer::combine_all(vec![by_tens.clone(), by_units.clone()]);
        let composite = OrderingComparer::composite([by_tens, by_units]);

        for (first, second) in [(12, 21), (12, 13), (13, 12), (40, 40)] {
            assert_eq!(folded.compare(&first, &second), composite.compare(&first, &second));
        }
        assert_eq!(folded.compare(&17, &13), Ordering::Less);
    }
}
