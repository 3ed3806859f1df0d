//! Ordering comparers - total orders as first-class values.
//!
//! An [`OrderingComparer`] wraps a single three-way comparison and derives
//! everything else from it: relational predicates, range tests, `min`/`max`,
//! sorting and an [`EqualityComparer`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c` in the domain of the comparer:
//!
//! ## Reflexivity
//!
//! ```text
//! comparer.compare(a, a) == Ordering::Equal
//! ```
//!
//! ## Antisymmetry
//!
//! ```text
//! comparer.compare(a, b) == comparer.compare(b, a).reverse()
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! compare(a, b) != Greater && compare(b, c) != Greater  =>  compare(a, c) != Greater
//! ```
//!
//! The laws are a precondition of [`OrderingComparer::of_compare`] and are
//! never checked. Every combinator in this module preserves them when its
//! inputs satisfy them.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::OrderingComparer;
//!
//! #[derive(Debug, PartialEq)]
//! struct Cat { name: &'static str, age: u32 }
//!
//! let by_name = OrderingComparer::<str>::natural().derive_from_ref(|cat: &Cat| cat.name);
//! let by_age_descending = OrderingComparer::<u32>::natural()
//!     .derive_from(|cat: &Cat| cat.age)
//!     .reverse();
//! let comparer = by_name.then(&by_age_descending);
//!
//! let mut cats = vec![
//!     Cat { name: "Rufus", age: 3 },
//!     Cat { name: "Gerald", age: 5 },
//!     Cat { name: "Gerald", age: 7 },
//! ];
//! comparer.sort(&mut cats);
//!
//! assert_eq!(cats[0], Cat { name: "Gerald", age: 7 });
//! assert_eq!(cats[2], Cat { name: "Rufus", age: 3 });
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::EqualityComparer;

type CompareFunction<A> = dyn Fn(&A, &A) -> Ordering + Send + Sync;

/// A total order over `A`, stored as a single shared closure.
///
/// [`Ordering`] is the normalised `-1 | 0 | 1` result; use
/// [`OrderingComparer::compare_sign`] when a numeric sign is needed.
pub struct OrderingComparer<A: ?Sized> {
    compare: Arc<CompareFunction<A>>,
}

impl<A: ?Sized> Clone for OrderingComparer<A> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<A: ?Sized> fmt::Debug for OrderingComparer<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderingComparer")
            .finish_non_exhaustive()
    }
}

impl<A: ?Sized + 'static> OrderingComparer<A> {
    /// Wraps a three-way comparison function.
    ///
    /// The function must describe a total order over every value it will be
    /// called with. This is not validated; a function that is not
    /// transitive yields unspecified (but memory safe) sort results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = OrderingComparer::of_compare(|first: &String, second: &String| {
    ///     first.len().cmp(&second.len())
    /// });
    /// assert_eq!(by_length.compare(&"ab".into(), &"abc".into()), Ordering::Less);
    /// ```
    pub fn of_compare<F>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// Wraps a comparison that reports its result only through the sign of a
    /// number: negative for less, zero for equal, positive for greater.
    ///
    /// The magnitude is ignored and the result normalised to [`Ordering`].
    /// A result that cannot be compared with zero (such as `NaN`) counts as
    /// equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    /// use std::cmp::Ordering;
    ///
    /// let comparer = OrderingComparer::of_sign(|first: &i64, second: &i64| first - second);
    /// assert_eq!(comparer.compare(&3, &10), Ordering::Less);
    /// assert_eq!(comparer.compare_sign(&10, &3), 1);
    /// ```
    pub fn of_sign<F, N>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> N + Send + Sync + 'static,
        N: PartialOrd + Default,
    {
        Self::of_compare(move |first, second| {
            compare(first, second)
                .partial_cmp(&N::default())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// A comparer under which every pair of values is tied.
    ///
    /// This is the identity element of [`OrderingComparer::then`].
    pub fn tied() -> Self {
        Self::of_compare(|_, _| Ordering::Equal)
    }

    /// Compares two values.
    #[inline]
    pub fn compare(&self, first: &A, second: &A) -> Ordering {
        (self.compare)(first, second)
    }

    /// Compares two values and returns `-1`, `0` or `1`.
    #[inline]
    pub fn compare_sign(&self, first: &A, second: &A) -> i8 {
        self.compare(first, second) as i8
    }

    /// Returns the opposite order.
    ///
    /// `Equal` stays `Equal`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    /// use std::cmp::Ordering;
    ///
    /// let descending = OrderingComparer::<i32>::natural().reverse();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let inner = self.clone();
        Self::of_compare(move |first, second| inner.compare(first, second).reverse())
    }

    /// Builds a comparer over `B` by projecting each value to a key and
    /// ordering the keys with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let by_length = OrderingComparer::<usize>::natural().derive_from(|text: &String| text.len());
    /// let mut words = vec![String::from("three"), String::from("a"), String::from("to")];
    /// by_length.sort(&mut words);
    /// assert_eq!(words, ["a", "to", "three"]);
    /// ```
    pub fn derive_from<B, F>(&self, key: F) -> OrderingComparer<B>
    where
        A: Sized,
        B: ?Sized + 'static,
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        let inner = self.clone();
        OrderingComparer::of_compare(move |first: &B, second: &B| {
            inner.compare(&key(first), &key(second))
        })
    }

    /// Like [`OrderingComparer::derive_from`], but the key is borrowed from
    /// the value instead of computed.
    pub fn derive_from_ref<B, F>(&self, key: F) -> OrderingComparer<B>
    where
        B: ?Sized + 'static,
        F: for<'a> Fn(&'a B) -> &'a A + Send + Sync + 'static,
    {
        let inner = self.clone();
        OrderingComparer::of_compare(move |first: &B, second: &B| {
            inner.compare(key(first), key(second))
        })
    }

    /// Lexicographic composition: order by `self`, and then by `next` when
    /// `self` reports a tie.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let primary = self.clone();
        let secondary = next.clone();
        Self::of_compare(move |first, second| {
            primary
                .compare(first, second)
                .then_with(|| secondary.compare(first, second))
        })
    }

    /// Combines a tie-break chain into a single comparer.
    ///
    /// Comparers are consulted in the order given; the first result that is
    /// not `Equal` wins. When every comparer reports a tie the composite
    /// reports `Equal`, and an empty chain behaves like
    /// [`OrderingComparer::tied`]. The composite is a total order when each
    /// component is; a chain that does not fully discriminate leaves ties as
    /// ties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let by_tens = OrderingComparer::<i32>::natural().derive_from(|n: &i32| n / 10);
    /// let by_units_descending = OrderingComparer::<i32>::natural()
    ///     .derive_from(|n: &i32| n % 10)
    ///     .reverse();
    /// let comparer = OrderingComparer::composite([by_tens, by_units_descending]);
    ///
    /// let mut numbers = vec![21, 13, 29, 17];
    /// comparer.sort(&mut numbers);
    /// assert_eq!(numbers, vec![17, 13, 29, 21]);
    /// ```
    pub fn composite<I>(comparers: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let chain: Vec<Self> = comparers.into_iter().collect();
        tracing::trace!(components = chain.len(), "building composite ordering comparer");
        Self::of_compare(move |first, second| {
            chain
                .iter()
                .map(|comparer| comparer.compare(first, second))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    // =========================================================================
    // Relational predicates
    // =========================================================================

    /// `first > second`
    #[inline]
    pub fn gt(&self, first: &A, second: &A) -> bool {
        self.compare(first, second).is_gt()
    }

    /// `first >= second`
    #[inline]
    pub fn geq(&self, first: &A, second: &A) -> bool {
        self.compare(first, second).is_ge()
    }

    /// `first < second`
    #[inline]
    pub fn lt(&self, first: &A, second: &A) -> bool {
        self.compare(first, second).is_lt()
    }

    /// `first <= second`
    #[inline]
    pub fn leq(&self, first: &A, second: &A) -> bool {
        self.compare(first, second).is_le()
    }

    /// `first` and `second` are tied under this order.
    #[inline]
    pub fn eq(&self, first: &A, second: &A) -> bool {
        self.compare(first, second).is_eq()
    }

    /// Inclusive range test: `lower <= test && test <= upper`.
    ///
    /// Both bounds are checked with this comparer, so the test works for any
    /// ordered type. An inverted range (`lower > upper`) contains nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let comparer = OrderingComparer::<str>::natural();
    /// assert!(comparer.is_between("b", "d", "c"));
    /// assert!(!comparer.is_between("b", "d", "e"));
    /// ```
    pub fn is_between(&self, lower: &A, upper: &A, test: &A) -> bool {
        self.leq(lower, test) && self.leq(test, upper)
    }

    /// Curried form of [`OrderingComparer::is_between`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let one_to_five = OrderingComparer::<i32>::natural().between(1, 5);
    /// assert!(one_to_five(&3));
    /// assert!(!one_to_five(&6));
    /// ```
    pub fn between(&self, lower: A, upper: A) -> impl Fn(&A) -> bool + use<A>
    where
        A: Sized,
    {
        let comparer = self.clone();
        move |test| comparer.is_between(&lower, &upper, test)
    }

    /// Returns the smaller value, or `first` when the two are tied.
    pub fn min<'a>(&self, first: &'a A, second: &'a A) -> &'a A {
        if self.gt(first, second) { second } else { first }
    }

    /// Returns the larger value, or `first` when the two are tied.
    pub fn max<'a>(&self, first: &'a A, second: &'a A) -> &'a A {
        if self.lt(first, second) { second } else { first }
    }

    /// Restricts `value` to the inclusive range `lower..=upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let comparer = OrderingComparer::<i32>::natural();
    /// assert_eq!(*comparer.clamp(&0, &10, &-4), 0);
    /// assert_eq!(*comparer.clamp(&0, &10, &4), 4);
    /// assert_eq!(*comparer.clamp(&0, &10, &14), 10);
    /// ```
    pub fn clamp<'a>(&self, lower: &'a A, upper: &'a A, value: &'a A) -> &'a A {
        if self.lt(value, lower) {
            lower
        } else if self.gt(value, upper) {
            upper
        } else {
            value
        }
    }

    /// Derives the equivalence relation induced by this order: two values are
    /// equal exactly when they compare `Equal`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let equality = OrderingComparer::<i32>::natural().to_equality_comparer();
    /// assert!(equality.equals(&1, &1));
    /// assert!(!equality.equals(&1, &2));
    /// ```
    pub fn to_equality_comparer(&self) -> EqualityComparer<A> {
        let inner = self.clone();
        EqualityComparer::of_equals(move |first, second| inner.eq(first, second))
    }

    /// Sorts the slice in place with this comparer. The sort is stable.
    pub fn sort(&self, values: &mut [A])
    where
        A: Sized,
    {
        values.sort_by(|first, second| self.compare(first, second));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Cat {
        name: &'static str,
        age: u32,
        lives_remaining: u32,
    }

    const fn cat(name: &'static str, age: u32, lives_remaining: u32) -> Cat {
        Cat {
            name,
            age,
            lives_remaining,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn of_compare_wraps_function(#[case] first: i32, #[case] second: i32, #[case] expected: Ordering) {
        let comparer = OrderingComparer::of_compare(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(comparer.compare(&first, &second), expected);
    }

    #[rstest]
    #[case(-100, Ordering::Less, -1)]
    #[case(0, Ordering::Equal, 0)]
    #[case(42, Ordering::Greater, 1)]
    fn of_sign_normalises_magnitude(#[case] raw: i32, #[case] expected: Ordering, #[case] sign: i8) {
        let comparer = OrderingComparer::of_sign(move |_: &(), _: &()| raw);
        assert_eq!(comparer.compare(&(), &()), expected);
        assert_eq!(comparer.compare_sign(&(), &()), sign);
    }

    #[rstest]
    fn of_sign_treats_nan_as_tie() {
        let comparer = OrderingComparer::of_sign(|_: &(), _: &()| f64::NAN);
        assert_eq!(comparer.compare(&(), &()), Ordering::Equal);
    }

    #[rstest]
    fn tied_never_discriminates() {
        let comparer = OrderingComparer::<i32>::tied();
        assert_eq!(comparer.compare(&1, &1000), Ordering::Equal);
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    #[rstest]
    #[case(1, 2)]
    #[case(2, 1)]
    #[case(5, 5)]
    fn reverse_negates_result(#[case] first: i32, #[case] second: i32) {
        let comparer = OrderingComparer::<i32>::natural();
        assert_eq!(
            comparer.reverse().compare(&first, &second),
            comparer.compare(&first, &second).reverse()
        );
        assert_eq!(
            comparer.reverse().compare_sign(&first, &second),
            -comparer.compare_sign(&first, &second)
        );
    }

    #[rstest]
    fn reverse_twice_is_original() {
        let comparer = OrderingComparer::<i32>::natural();
        let twice = comparer.reverse().reverse();
        assert_eq!(twice.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn derive_from_orders_by_key() {
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        assert_eq!(by_age.compare(&cat("Rufus", 10, 3), &cat("Arnold", 1, 9)), Ordering::Greater);
        assert_eq!(by_age.compare(&cat("Rufus", 5, 3), &cat("Arnold", 5, 9)), Ordering::Equal);
    }

    #[rstest]
    fn derive_from_ref_orders_by_borrowed_key() {
        let by_name = OrderingComparer::<str>::natural().derive_from_ref(|value: &Cat| value.name);
        assert_eq!(by_name.compare(&cat("Arnold", 1, 9), &cat("Gerald", 5, 9)), Ordering::Less);
    }

    #[rstest]
    fn then_breaks_ties_only() {
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        let by_lives = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.lives_remaining);
        let comparer = by_age.then(&by_lives);

        assert_eq!(comparer.compare(&cat("a", 1, 9), &cat("b", 2, 1)), Ordering::Less);
        assert_eq!(comparer.compare(&cat("a", 2, 9), &cat("b", 2, 1)), Ordering::Greater);
        assert_eq!(comparer.compare(&cat("a", 2, 1), &cat("b", 2, 1)), Ordering::Equal);
    }

    #[rstest]
    fn composite_sorts_cats_by_name_age_then_lives_descending() {
        let by_name = OrderingComparer::<str>::natural().derive_from_ref(|value: &Cat| value.name);
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        let by_lives_descending = OrderingComparer::<u32>::natural()
            .derive_from(|value: &Cat| value.lives_remaining)
            .reverse();
        let comparer = OrderingComparer::composite([by_name, by_age, by_lives_descending]);

        let mut cats = vec![
            cat("Gerald", 5, 9),
            cat("Rufus", 10, 3),
            cat("Gerald", 5, 7),
            cat("Arnold", 1, 9),
            cat("Rufus", 10, 1),
            cat("Gerald", 7, 8),
        ];
        comparer.sort(&mut cats);

        assert_eq!(
            cats,
            vec![
                cat("Arnold", 1, 9),
                cat("Gerald", 5, 9),
                cat("Gerald", 5, 7),
                cat("Gerald", 7, 8),
                cat("Rufus", 10, 3),
                cat("Rufus", 10, 1),
            ]
        );
    }

    #[rstest]
    fn composite_of_nothing_is_tied() {
        let comparer = OrderingComparer::<i32>::composite([]);
        assert_eq!(comparer.compare(&1, &2), Ordering::Equal);
    }

    #[rstest]
    fn composite_leaves_incomplete_chain_tied() {
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        let comparer = OrderingComparer::composite([by_age]);
        assert_eq!(comparer.compare(&cat("a", 2, 1), &cat("b", 2, 9)), Ordering::Equal);
    }

    #[rstest]
    fn composite_stops_at_first_decision() {
        let exploding = OrderingComparer::<i32>::of_compare(|_, _| panic!("should not be consulted"));
        let comparer = OrderingComparer::composite([OrderingComparer::natural(), exploding]);
        assert_eq!(comparer.compare(&1, &2), Ordering::Less);
    }

    // =========================================================================
    // Relational predicates
    // =========================================================================

    #[rstest]
    #[case(1, 2, false, false, true, true)]
    #[case(2, 2, false, true, false, true)]
    #[case(3, 2, true, true, false, false)]
    fn relational_predicates_follow_sign(
        #[case] first: i32,
        #[case] second: i32,
        #[case] gt: bool,
        #[case] geq: bool,
        #[case] lt: bool,
        #[case] leq: bool,
    ) {
        let comparer = OrderingComparer::<i32>::natural();
        assert_eq!(comparer.gt(&first, &second), gt);
        assert_eq!(comparer.geq(&first, &second), geq);
        assert_eq!(comparer.lt(&first, &second), lt);
        assert_eq!(comparer.leq(&first, &second), leq);
        assert_eq!(comparer.eq(&first, &second), first == second);
    }

    #[rstest]
    #[case(1, true)]
    #[case(3, true)]
    #[case(5, true)]
    #[case(0, false)]
    #[case(6, false)]
    fn is_between_is_inclusive(#[case] test: i32, #[case] expected: bool) {
        let comparer = OrderingComparer::<i32>::natural();
        assert_eq!(comparer.is_between(&1, &5, &test), expected);
        assert_eq!(comparer.between(1, 5)(&test), expected);
    }

    #[rstest]
    fn is_between_with_inverted_bounds_is_empty() {
        let comparer = OrderingComparer::<i32>::natural();
        assert!(!comparer.is_between(&5, &1, &3));
    }

    #[rstest]
    fn min_and_max_prefer_first_on_tie() {
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        let first = cat("Gerald", 5, 9);
        let second = cat("Rufus", 5, 3);
        assert_eq!(by_age.min(&first, &second).name, "Gerald");
        assert_eq!(by_age.max(&first, &second).name, "Gerald");

        let older = cat("Rufus", 10, 3);
        assert_eq!(by_age.min(&first, &older).name, "Gerald");
        assert_eq!(by_age.max(&first, &older).name, "Rufus");
    }

    #[rstest]
    fn to_equality_comparer_matches_ties() {
        let equality = OrderingComparer::<u32>::natural()
            .derive_from(|value: &Cat| value.age)
            .to_equality_comparer();
        assert!(equality.equals(&cat("a", 5, 1), &cat("b", 5, 2)));
        assert!(!equality.equals(&cat("a", 5, 1), &cat("a", 6, 1)));
    }

    #[rstest]
    fn sort_ascending_and_reversed() {
        let comparer = OrderingComparer::<i32>::natural();
        let original = vec![-11, -13, 2, 0, 45, 1, 8, 2, 100, -1];

        let mut ascending = original.clone();
        comparer.sort(&mut ascending);
        assert_eq!(ascending, vec![-13, -11, -1, 0, 1, 2, 2, 8, 45, 100]);

        let mut descending = original;
        comparer.reverse().sort(&mut descending);
        assert_eq!(descending, vec![100, 45, 8, 2, 2, 1, 0, -1, -11, -13]);
    }

    #[rstest]
    fn sort_is_stable() {
        let by_age = OrderingComparer::<u32>::natural().derive_from(|value: &Cat| value.age);
        let mut cats = vec![cat("b", 2, 0), cat("a", 1, 0), cat("c", 2, 0)];
        by_age.sort(&mut cats);
        let names: Vec<_> = cats.iter().map(|value| value.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
