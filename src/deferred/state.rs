//! The `Deferred` tagged union.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::comparer::EqualityComparer;

use super::Arm;

/// The state of a value that is produced asynchronously and cannot fail.
///
/// # Examples
///
/// ```rust
/// use fpkit::deferred::{Arm, Deferred, DeferredMatcher};
///
/// let render = |state: Deferred<u32>| {
///     state.match_with(DeferredMatcher {
///         not_started: Arm::value(String::from("idle")),
///         in_progress: Arm::value(String::from("loading...")),
///         resolved: Arm::compute(|count: u32| format!("{count} items")),
///     })
/// };
///
/// assert_eq!(render(Deferred::not_started()), "idle");
/// assert_eq!(render(Deferred::in_progress()), "loading...");
/// assert_eq!(render(Deferred::resolved(3)), "3 items");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "value", rename_all = "snake_case")
)]
pub enum Deferred<A> {
    /// Nothing has been requested yet.
    #[default]
    NotStarted,
    /// The value has been requested and is not available yet.
    InProgress,
    /// The value is available.
    Resolved(A),
}

/// One arm per [`Deferred`] state, consumed by [`Deferred::match_with`].
pub struct DeferredMatcher<'a, A, R> {
    /// Result for [`Deferred::NotStarted`].
    pub not_started: Arm<'a, (), R>,
    /// Result for [`Deferred::InProgress`].
    pub in_progress: Arm<'a, (), R>,
    /// Result for [`Deferred::Resolved`], given the resolved value.
    pub resolved: Arm<'a, A, R>,
}

/// A matcher where any arm may be omitted; see [`Deferred::match_or_else`].
///
/// # Examples
///
/// ```rust
/// use fpkit::deferred::{Arm, Deferred, PartialDeferredMatcher};
///
/// let is_busy = |state: Deferred<()>| {
///     state.match_or_else(
///         PartialDeferredMatcher::new().in_progress(Arm::value(true)),
///         Arm::value(false),
///     )
/// };
///
/// assert!(is_busy(Deferred::in_progress()));
/// assert!(!is_busy(Deferred::resolved(())));
/// ```
pub struct PartialDeferredMatcher<'a, A, R> {
    not_started: Option<Arm<'a, (), R>>,
    in_progress: Option<Arm<'a, (), R>>,
    resolved: Option<Arm<'a, A, R>>,
}

impl<A, R> Default for PartialDeferredMatcher<'_, A, R> {
    fn default() -> Self {
        Self {
            not_started: None,
            in_progress: None,
            resolved: None,
        }
    }
}

impl<'a, A, R> PartialDeferredMatcher<'a, A, R> {
    /// A matcher with no arms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arm for [`Deferred::NotStarted`].
    #[must_use]
    pub fn not_started(mut self, arm: Arm<'a, (), R>) -> Self {
        self.not_started = Some(arm);
        self
    }

    /// Sets the arm for [`Deferred::InProgress`].
    #[must_use]
    pub fn in_progress(mut self, arm: Arm<'a, (), R>) -> Self {
        self.in_progress = Some(arm);
        self
    }

    /// Sets the arm for [`Deferred::Resolved`].
    #[must_use]
    pub fn resolved(mut self, arm: Arm<'a, A, R>) -> Self {
        self.resolved = Some(arm);
        self
    }
}

impl<A> Deferred<A> {
    /// Creates a [`Deferred::NotStarted`].
    #[inline]
    pub const fn not_started() -> Self {
        Self::NotStarted
    }

    /// Creates a [`Deferred::InProgress`].
    #[inline]
    pub const fn in_progress() -> Self {
        Self::InProgress
    }

    /// Creates a [`Deferred::Resolved`] holding `value`.
    #[inline]
    pub const fn resolved(value: A) -> Self {
        Self::Resolved(value)
    }

    /// Returns `true` for [`Deferred::NotStarted`].
    #[inline]
    pub const fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Returns `true` for [`Deferred::InProgress`].
    #[inline]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns `true` for [`Deferred::Resolved`].
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns `true` unless the state is [`Deferred::Resolved`].
    #[inline]
    pub const fn is_unresolved(&self) -> bool {
        !self.is_resolved()
    }

    /// Returns `true` when resolved with a value equal to `expected` under
    /// `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::EqualityComparer;
    /// use fpkit::deferred::Deferred;
    ///
    /// let ignore_case = EqualityComparer::<String>::of_equals(|a, b| a.eq_ignore_ascii_case(b));
    /// let state = Deferred::resolved(String::from("DONE"));
    ///
    /// assert!(state.is_resolved_with(&String::from("done"), &ignore_case));
    /// assert!(!Deferred::in_progress().is_resolved_with(&String::from("done"), &ignore_case));
    /// ```
    pub fn is_resolved_with(&self, expected: &A, comparer: &EqualityComparer<A>) -> bool
    where
        A: 'static,
    {
        match self {
            Self::Resolved(value) => comparer.equals(value, expected),
            Self::NotStarted | Self::InProgress => false,
        }
    }

    /// [`Deferred::is_resolved_with`] using [`EqualityComparer::default`].
    pub fn is_resolved_with_default(&self, expected: &A) -> bool
    where
        A: PartialEq + 'static,
    {
        self.is_resolved_with(expected, &EqualityComparer::default())
    }

    /// Applies `function` to a resolved value, leaving other states as they
    /// are.
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::NotStarted => Deferred::NotStarted,
            Self::InProgress => Deferred::InProgress,
            Self::Resolved(value) => Deferred::Resolved(function(value)),
        }
    }

    /// Converts `&Deferred<A>` to `Deferred<&A>`.
    pub const fn as_ref(&self) -> Deferred<&A> {
        match self {
            Self::NotStarted => Deferred::NotStarted,
            Self::InProgress => Deferred::InProgress,
            Self::Resolved(value) => Deferred::Resolved(value),
        }
    }

    /// Returns the resolved value, if any.
    pub fn resolved_value(self) -> Option<A> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::NotStarted | Self::InProgress => None,
        }
    }

    /// Selects and resolves the arm for the current state.
    pub fn match_with<R>(self, matcher: DeferredMatcher<'_, A, R>) -> R {
        match self {
            Self::NotStarted => matcher.not_started.resolve(()),
            Self::InProgress => matcher.in_progress.resolve(()),
            Self::Resolved(value) => matcher.resolved.resolve(value),
        }
    }

    /// Like [`Deferred::match_with`], but states without an arm fall back to
    /// `or_else`.
    pub fn match_or_else<'a, R>(
        self,
        matcher: PartialDeferredMatcher<'a, A, R>,
        or_else: Arm<'a, (), R>,
    ) -> R {
        match (self, matcher) {
            (
                Self::NotStarted,
                PartialDeferredMatcher {
                    not_started: Some(arm),
                    ..
                },
            )
            | (
                Self::InProgress,
                PartialDeferredMatcher {
                    in_progress: Some(arm),
                    ..
                },
            ) => arm.resolve(()),
            (
                Self::Resolved(value),
                PartialDeferredMatcher {
                    resolved: Some(arm),
                    ..
                },
            ) => arm.resolve(value),
            _ => or_else.resolve(()),
        }
    }
}

impl<A: 'static> Deferred<A> {
    /// Lifts an equality comparer on values to one on deferred states.
    ///
    /// Unresolved states are equal when they are the same state; resolved
    /// states compare their values with `inner`.
    pub fn equality_comparer(inner: &EqualityComparer<A>) -> EqualityComparer<Self> {
        let inner = inner.clone();
        EqualityComparer::of_equals(move |first: &Self, second: &Self| match (first, second) {
            (Self::NotStarted, Self::NotStarted) | (Self::InProgress, Self::InProgress) => true,
            (Self::Resolved(left), Self::Resolved(right)) => inner.equals(left, right),
            _ => false,
        })
    }
}

impl<A> From<Option<A>> for Deferred<A> {
    /// `Some` becomes [`Deferred::Resolved`], `None` becomes
    /// [`Deferred::NotStarted`].
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::NotStarted, Self::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn describe(state: Deferred<i32>) -> String {
        state.match_with(DeferredMatcher {
            not_started: Arm::value("not started".to_string()),
            in_progress: Arm::lazy(|| "in progress".to_string()),
            resolved: Arm::compute(|value: i32| format!("resolved {value}")),
        })
    }

    #[rstest]
    #[case(Deferred::not_started(), "not started")]
    #[case(Deferred::in_progress(), "in progress")]
    #[case(Deferred::resolved(5), "resolved 5")]
    fn match_with_selects_arm(#[case] state: Deferred<i32>, #[case] expected: &str) {
        assert_eq!(describe(state), expected);
    }

    #[rstest]
    #[case(Deferred::not_started(), true, false, false)]
    #[case(Deferred::in_progress(), false, true, false)]
    #[case(Deferred::resolved(1), false, false, true)]
    fn state_queries(
        #[case] state: Deferred<i32>,
        #[case] not_started: bool,
        #[case] in_progress: bool,
        #[case] resolved: bool,
    ) {
        assert_eq!(state.is_not_started(), not_started);
        assert_eq!(state.is_in_progress(), in_progress);
        assert_eq!(state.is_resolved(), resolved);
        assert_eq!(state.is_unresolved(), !resolved);
    }

    #[rstest]
    fn default_is_not_started() {
        assert_eq!(Deferred::<String>::default(), Deferred::NotStarted);
    }

    #[rstest]
    fn is_resolved_with_uses_comparer() {
        let by_parity = EqualityComparer::of_equals(|a: &i32, b: &i32| a % 2 == b % 2);
        assert!(Deferred::resolved(4).is_resolved_with(&10, &by_parity));
        assert!(!Deferred::resolved(4).is_resolved_with(&11, &by_parity));
        assert!(!Deferred::not_started().is_resolved_with(&10, &by_parity));
    }

    #[rstest]
    fn is_resolved_with_default_uses_partial_eq() {
        assert!(Deferred::resolved("done").is_resolved_with_default(&"done"));
        assert!(!Deferred::resolved("done").is_resolved_with_default(&"todo"));
        assert!(!Deferred::<&str>::in_progress().is_resolved_with_default(&"done"));
    }

    #[rstest]
    fn map_touches_only_resolved() {
        assert_eq!(Deferred::resolved(2).map(|n| n * 10), Deferred::resolved(20));
        assert_eq!(Deferred::<i32>::in_progress().map(|n| n * 10), Deferred::InProgress);
        assert_eq!(Deferred::<i32>::not_started().map(|n| n * 10), Deferred::NotStarted);
    }

    #[rstest]
    fn as_ref_and_resolved_value() {
        let state = Deferred::resolved(String::from("x"));
        assert_eq!(state.as_ref().map(String::len), Deferred::resolved(1));
        assert_eq!(state.resolved_value(), Some(String::from("x")));
        assert_eq!(Deferred::<i32>::in_progress().resolved_value(), None);
    }

    #[rstest]
    #[case(Deferred::not_started(), "fallback")]
    #[case(Deferred::in_progress(), "busy")]
    #[case(Deferred::resolved(3), "fallback")]
    fn match_or_else_falls_back(#[case] state: Deferred<i32>, #[case] expected: &str) {
        let result = state.match_or_else(
            PartialDeferredMatcher::new().in_progress(Arm::value("busy")),
            Arm::value("fallback"),
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn match_or_else_passes_resolved_value() {
        let result = Deferred::resolved(3).match_or_else(
            PartialDeferredMatcher::new().resolved(Arm::compute(|n: i32| n + 1)),
            Arm::value(0),
        );
        assert_eq!(result, 4);
    }

    #[rstest]
    fn match_or_else_does_not_run_unused_fallback() {
        let result = Deferred::<i32>::not_started().match_or_else(
            PartialDeferredMatcher::new().not_started(Arm::value(1)),
            Arm::lazy(|| panic!("fallback should not run")),
        );
        assert_eq!(result, 1);
    }

    #[rstest]
    fn from_option() {
        assert_eq!(Deferred::from(Some(1)), Deferred::Resolved(1));
        assert_eq!(Deferred::<i32>::from(None), Deferred::NotStarted);
    }

    #[rstest]
    #[case(Deferred::not_started(), Deferred::not_started(), true)]
    #[case(Deferred::in_progress(), Deferred::in_progress(), true)]
    #[case(Deferred::not_started(), Deferred::in_progress(), false)]
    #[case(Deferred::resolved(1), Deferred::resolved(1), true)]
    #[case(Deferred::resolved(1), Deferred::resolved(2), false)]
    #[case(Deferred::resolved(1), Deferred::in_progress(), false)]
    fn equality_comparer_lifts_inner(
        #[case] first: Deferred<i32>,
        #[case] second: Deferred<i32>,
        #[case] expected: bool,
    ) {
        let comparer = Deferred::equality_comparer(&EqualityComparer::default());
        assert_eq!(comparer.equals(&first, &second), expected);
    }
}
