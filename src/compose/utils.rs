//! Small combinators for building pipelines.

/// Returns its argument unchanged.
///
/// # Examples
///
/// ```
/// use fpkit::compose::identity;
/// use fpkit::pipe;
///
/// assert_eq!(pipe!(7, identity), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the two arguments of a binary function.
///
/// Flipping a relation gives its converse: flipping "less than" gives
/// "greater than".
///
/// # Examples
///
/// ```
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::compose::flip;
///
/// let comparer = OrderingComparer::<i32>::natural();
/// let less = |first: &i32, second: &i32| comparer.lt(first, second);
/// let greater = flip(less);
///
/// assert!(greater(&3, &1));
/// assert!(!greater(&1, &3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
