//! A vector with at least one element.

use std::fmt;
use std::num::NonZeroUsize;

use crate::comparer::{EqualityComparer, OrderingComparer};

use super::EmptyError;

/// A `Vec` that always holds at least one element.
///
/// Operations that are partial on ordinary vectors (`first`, `last`, `min`,
/// `max`) are total here.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::non_empty::NonEmptyVec;
///
/// let values = NonEmptyVec::new(3, vec![1, 4, 1, 5]);
///
/// assert_eq!(*values.head(), 3);
/// assert_eq!(*values.last(), 5);
/// assert_eq!(*values.min(&OrderingComparer::natural()), 1);
/// assert_eq!(values.len().get(), 5);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    values: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Creates a vector from its first element and the rest.
    pub fn new(head: A, tail: Vec<A>) -> Self {
        let mut values = Vec::with_capacity(tail.len() + 1);
        values.push(head);
        values.extend(tail);
        Self { values }
    }

    /// Creates a vector holding exactly one element.
    pub fn of(value: A) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Wraps `values`, failing when it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if `values` has no elements.
    pub fn try_from_vec(values: Vec<A>) -> Result<Self, EmptyError> {
        if values.is_empty() {
            tracing::trace!("rejected empty vector for NonEmptyVec");
            return Err(EmptyError);
        }
        Ok(Self { values })
    }

    /// Builds a vector of `length` elements, computing each from its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::non_empty::NonEmptyVec;
    /// use std::num::NonZeroUsize;
    ///
    /// let squares = NonEmptyVec::make(NonZeroUsize::MIN.saturating_add(3), |index| index * index);
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn make<F>(length: NonZeroUsize, generator: F) -> Self
    where
        F: FnMut(usize) -> A,
    {
        Self {
            values: (0..length.get()).map(generator).collect(),
        }
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> &A {
        &self.values[0]
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> &A {
        &self.values[self.values.len() - 1]
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.values[1..]
    }

    /// Splits into the first element and the rest.
    #[inline]
    pub fn destruct(&self) -> (&A, &[A]) {
        (self.head(), self.tail())
    }

    /// The number of elements, which is never zero.
    #[inline]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.values.len() - 1)
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.values
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.values.iter()
    }

    /// Unwraps into an ordinary `Vec`.
    pub fn into_vec(self) -> Vec<A> {
        self.values
    }

    /// Appends an element.
    pub fn push(&mut self, value: A) {
        self.values.push(value);
    }

    /// Applies `function` to every element.
    pub fn map<B, F>(self, function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        NonEmptyVec {
            values: self.values.into_iter().map(function).collect(),
        }
    }
}

impl<A: 'static> NonEmptyVec<A> {
    /// The smallest element under `comparer`; the earliest one on ties.
    pub fn min(&self, comparer: &OrderingComparer<A>) -> &A {
        self.tail()
            .iter()
            .fold(self.head(), |smallest, value| comparer.min(smallest, value))
    }

    /// The largest element under `comparer`; the earliest one on ties.
    pub fn max(&self, comparer: &OrderingComparer<A>) -> &A {
        self.tail()
            .iter()
            .fold(self.head(), |largest, value| comparer.max(largest, value))
    }

    /// Sorts the elements with `comparer`. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    /// use fpkit::non_empty::NonEmptyVec;
    ///
    /// let sorted = NonEmptyVec::new(3, vec![1, 2]).sort(&OrderingComparer::natural().reverse());
    /// assert_eq!(sorted.as_slice(), &[3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sort(mut self, comparer: &OrderingComparer<A>) -> Self {
        comparer.sort(&mut self.values);
        self
    }

    /// Removes every element equal (under `comparer`) to an earlier one.
    ///
    /// The first element always survives, so the result is never empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    /// use fpkit::non_empty::NonEmptyVec;
    ///
    /// let words = NonEmptyVec::new("Apple", vec!["apple", "pear", "APPLE", "Pear"]);
    /// let ignore_case = EqualityComparer::<&str>::of_equals(|a, b| a.eq_ignore_ascii_case(b));
    ///
    /// assert_eq!(words.uniq(&ignore_case).as_slice(), &["Apple", "pear"]);
    /// ```
    #[must_use]
    pub fn uniq(self, comparer: &EqualityComparer<A>) -> Self {
        let mut unique: Vec<A> = Vec::with_capacity(self.values.len());
        for value in self.values {
            if !unique.iter().any(|kept| comparer.equals(kept, &value)) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    /// Element-wise equality of non-empty vectors using `inner` on elements.
    pub fn equality_comparer(inner: &EqualityComparer<A>) -> EqualityComparer<Self> {
        inner.sequence()
    }
}

impl<A: Ord + 'static> NonEmptyVec<A> {
    /// [`NonEmptyVec::min`] under [`OrderingComparer::natural`].
    pub fn min_default(&self) -> &A {
        self.min(&OrderingComparer::natural())
    }

    /// [`NonEmptyVec::max`] under [`OrderingComparer::natural`].
    pub fn max_default(&self) -> &A {
        self.max(&OrderingComparer::natural())
    }

    /// [`NonEmptyVec::sort`] under [`OrderingComparer::natural`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::non_empty::NonEmptyVec;
    ///
    /// let sorted = NonEmptyVec::new(3, vec![1, 2]).sort_default();
    /// assert_eq!(sorted.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn sort_default(self) -> Self {
        self.sort(&OrderingComparer::natural())
    }
}

impl<A: PartialEq + 'static> NonEmptyVec<A> {
    /// [`NonEmptyVec::uniq`] under [`EqualityComparer::default`].
    #[must_use]
    pub fn uniq_default(self) -> Self {
        self.uniq(&EqualityComparer::default())
    }
}

impl NonEmptyVec<i64> {
    /// Every integer from `start` to `end`, both inclusive.
    ///
    /// The range counts down when `start > end`.
    ///
    /// # Panics
    ///
    /// Every element is allocated up front, so a span too large for memory
    /// (such as `range(i64::MIN, i64::MAX)`) panics with a capacity overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::non_empty::NonEmptyVec;
    ///
    /// assert_eq!(NonEmptyVec::range(1, 4).as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(NonEmptyVec::range(2, -1).as_slice(), &[2, 1, 0, -1]);
    /// assert_eq!(NonEmptyVec::range(7, 7).as_slice(), &[7]);
    /// ```
    pub fn range(start: i64, end: i64) -> Self {
        let values = if start <= end {
            (start..=end).collect()
        } else {
            (end..=start).rev().collect()
        };
        Self { values }
    }
}

impl<A> AsRef<[A]> for NonEmptyVec<A> {
    fn as_ref(&self) -> &[A] {
        &self.values
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyVec<A> {
    type Error = EmptyError;

    fn try_from(values: Vec<A>) -> Result<Self, Self::Error> {
        Self::try_from_vec(values)
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        values.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyVec<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.values).finish()
    }
}

impl<A: fmt::Display> fmt::Display for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "typeclass")]
impl<A> crate::typeclass::Semigroup for NonEmptyVec<A> {
    fn combine(mut self, other: Self) -> Self {
        self.values.extend(other.values);
        self
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for NonEmptyVec<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.values.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for NonEmptyVec<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<A>::deserialize(deserializer)?;
        Self::try_from_vec(values).map_err(serde::de::Error::custom)
    }
}
