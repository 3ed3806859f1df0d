//! Equality comparers - equivalence relations as first-class values.
//!
//! An [`EqualityComparer`] wraps a single binary predicate answering the
//! question "are these two values equivalent?". Comparers are immutable and
//! cheap to clone; derived comparers share their parents through an [`Arc`].
//!
//! # Laws
//!
//! For all `a`, `b` in the domain of the comparer:
//!
//! ## Reflexivity
//!
//! ```text
//! comparer.equals(a, a) == true
//! ```
//!
//! ## Symmetry
//!
//! ```text
//! comparer.equals(a, b) == comparer.equals(b, a)
//! ```
//!
//! Transitivity is an obligation of the caller. None of these laws are checked
//! at runtime: a predicate that breaks them silently produces inconsistent
//! answers.
//!
//! # Default equality policy
//!
//! [`EqualityComparer::default`] delegates to [`PartialEq`]. For numbers,
//! `bool`, `char`, `str` and `String` that is value equality. Composite types
//! get whatever `PartialEq` they declare, which is not necessarily deep
//! structural equality. This is not an identity default: two separately
//! built records with a derived `PartialEq` and equal fields compare equal.
//! Reference identity is available through [`EqualityComparer::by_address`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::comparer::EqualityComparer;
//!
//! let case_insensitive =
//!     EqualityComparer::<str>::of_equals(|first, second| first.eq_ignore_ascii_case(second));
//!
//! assert!(case_insensitive.equals("Hello", "hELLO"));
//! assert!(!case_insensitive.equals("Hello", "World"));
//! ```

use std::fmt;
use std::sync::Arc;

type EqualsFunction<A> = dyn Fn(&A, &A) -> bool + Send + Sync;

/// An equivalence relation over `A`, stored as a single shared closure.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::EqualityComparer;
///
/// let comparer = EqualityComparer::<i32>::default();
/// assert!(comparer.equals(&1, &1));
/// assert!(comparer.not_equals(&1, &2));
/// ```
pub struct EqualityComparer<A: ?Sized> {
    equals: Arc<EqualsFunction<A>>,
}

impl<A: ?Sized> Clone for EqualityComparer<A> {
    fn clone(&self) -> Self {
        Self {
            equals: Arc::clone(&self.equals),
        }
    }
}

impl<A: ?Sized> fmt::Debug for EqualityComparer<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EqualityComparer")
            .finish_non_exhaustive()
    }
}

impl<A: ?Sized + 'static> EqualityComparer<A> {
    /// Wraps an arbitrary binary predicate as an equality comparer.
    ///
    /// The predicate is expected to be reflexive and symmetric. This is not
    /// validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let same_parity = EqualityComparer::of_equals(|first: &i32, second: &i32| {
    ///     first % 2 == second % 2
    /// });
    /// assert!(same_parity.equals(&2, &8));
    /// assert!(!same_parity.equals(&2, &7));
    /// ```
    pub fn of_equals<F>(equals: F) -> Self
    where
        F: Fn(&A, &A) -> bool + Send + Sync + 'static,
    {
        Self {
            equals: Arc::new(equals),
        }
    }

    /// Identity equality: two references are equal only when they point at
    /// the same value in memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let comparer = EqualityComparer::<String>::by_address();
    /// let first = String::from("same");
    /// let second = String::from("same");
    ///
    /// assert!(comparer.equals(&first, &first));
    /// assert!(!comparer.equals(&first, &second));
    /// ```
    pub fn by_address() -> Self {
        Self::of_equals(|first, second| std::ptr::eq(first, second))
    }

    /// A comparer under which every pair of values is equal.
    ///
    /// This is the identity element of [`EqualityComparer::and`].
    pub fn always() -> Self {
        Self::of_equals(|_, _| true)
    }

    /// Tests whether the two values are equivalent.
    #[inline]
    pub fn equals(&self, first: &A, second: &A) -> bool {
        (self.equals)(first, second)
    }

    /// Negation of [`EqualityComparer::equals`].
    #[inline]
    pub fn not_equals(&self, first: &A, second: &A) -> bool {
        !self.equals(first, second)
    }

    /// Builds a comparer over `B` by projecting each value to an owned key and
    /// comparing the keys with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let by_length = EqualityComparer::<usize>::default().derive_from(|text: &String| text.len());
    /// assert!(by_length.equals(&"abc".to_string(), &"xyz".to_string()));
    /// assert!(!by_length.equals(&"abc".to_string(), &"xy".to_string()));
    /// ```
    pub fn derive_from<B, F>(&self, key: F) -> EqualityComparer<B>
    where
        A: Sized,
        B: ?Sized + 'static,
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        let inner = self.clone();
        EqualityComparer::of_equals(move |first: &B, second: &B| {
            inner.equals(&key(first), &key(second))
        })
    }

    /// Like [`EqualityComparer::derive_from`], but the key is borrowed from
    /// the value instead of computed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// struct User { name: String, visits: u32 }
    ///
    /// let by_name = EqualityComparer::<String>::default()
    ///     .derive_from_ref(|user: &User| &user.name);
    ///
    /// let first = User { name: "ada".into(), visits: 1 };
    /// let second = User { name: "ada".into(), visits: 7 };
    /// assert!(by_name.equals(&first, &second));
    /// ```
    pub fn derive_from_ref<B, F>(&self, key: F) -> EqualityComparer<B>
    where
        B: ?Sized + 'static,
        F: for<'a> Fn(&'a B) -> &'a A + Send + Sync + 'static,
    {
        let inner = self.clone();
        EqualityComparer::of_equals(move |first: &B, second: &B| {
            inner.equals(key(first), key(second))
        })
    }

    /// Conjunction: values are equal only when both comparers agree.
    ///
    /// Chaining `derive_from_ref` comparers with `and` gives field-by-field
    /// equality of a record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let positive = EqualityComparer::of_equals(|a: &i32, b: &i32| (*a > 0) == (*b > 0));
    /// let even = EqualityComparer::of_equals(|a: &i32, b: &i32| a % 2 == b % 2);
    /// let both = positive.and(&even);
    ///
    /// assert!(both.equals(&2, &4));
    /// assert!(!both.equals(&2, &3));
    /// assert!(!both.equals(&2, &-2));
    /// ```
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let first_comparer = self.clone();
        let second_comparer = other.clone();
        Self::of_equals(move |first, second| {
            first_comparer.equals(first, second) && second_comparer.equals(first, second)
        })
    }

    /// Lifts this comparer to sequences of `A`.
    ///
    /// Two sequences are equal when they have the same length and every pair
    /// of elements at the same index is equal. Lengths are compared first and
    /// the element scan stops at the first mismatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let comparer = EqualityComparer::<i32>::default().sequence::<Vec<i32>>();
    ///
    /// assert!(!comparer.equals(&vec![1, 2, 3], &vec![1, 2]));
    /// assert!(!comparer.equals(&vec![1, 2, 3], &vec![1, 3, 2]));
    /// assert!(comparer.equals(&vec![1, 2, 3], &vec![1, 2, 3]));
    /// ```
    pub fn sequence<S>(&self) -> EqualityComparer<S>
    where
        A: Sized,
        S: AsRef<[A]> + ?Sized + 'static,
    {
        let inner = self.clone();
        EqualityComparer::of_equals(move |first: &S, second: &S| {
            let (first, second) = (first.as_ref(), second.as_ref());
            first.len() == second.len()
                && first
                    .iter()
                    .zip(second)
                    .all(|(left, right)| inner.equals(left, right))
        })
    }

    /// Lifts this comparer to optional values.
    ///
    /// Two `None`s are equal, `None` never equals `Some`, and two `Some`s are
    /// compared with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let comparer = EqualityComparer::<i32>::default().nullable();
    ///
    /// assert!(comparer.equals(&None, &None));
    /// assert!(!comparer.equals(&None, &Some(1)));
    /// assert!(comparer.equals(&Some(1), &Some(1)));
    /// ```
    pub fn nullable(&self) -> EqualityComparer<Option<A>>
    where
        A: Sized,
    {
        let inner = self.clone();
        EqualityComparer::of_equals(move |first: &Option<A>, second: &Option<A>| {
            match (first, second) {
                (None, None) => true,
                (Some(left), Some(right)) => inner.equals(left, right),
                _ => false,
            }
        })
    }

    /// Returns a predicate testing equality against a fixed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    ///
    /// let is_three = EqualityComparer::<i32>::default().to_predicate(3);
    /// assert_eq!(vec![1, 3, 5, 3].into_iter().filter(|n| is_three(n)).count(), 2);
    /// ```
    pub fn to_predicate(&self, expected: A) -> impl Fn(&A) -> bool + use<A>
    where
        A: Sized,
    {
        let inner = self.clone();
        move |candidate| inner.equals(&expected, candidate)
    }
}

impl<A: PartialEq + ?Sized + 'static> Default for EqualityComparer<A> {
    /// The canonical comparer, delegating to [`PartialEq`].
    fn default() -> Self {
        Self::of_equals(|first, second| first == second)
    }
}

impl EqualityComparer<f64> {
    /// Reflexive float equality based on [`f64::total_cmp`].
    ///
    /// Unlike the [`PartialEq`] default, `NaN` equals itself. `-0.0` and
    /// `0.0` are distinct.
    pub fn float() -> Self {
        Self::of_equals(|first, second| first.total_cmp(second).is_eq())
    }
}

impl EqualityComparer<f32> {
    /// Reflexive float equality based on [`f32::total_cmp`].
    pub fn float() -> Self {
        Self::of_equals(|first, second| first.total_cmp(second).is_eq())
    }
}
