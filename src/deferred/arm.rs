//! Match arms that are either a constant or a deferred computation.

use std::fmt;

/// One arm of a matcher: either a ready value or a producer that computes
/// the value from the matched case's payload.
///
/// Every arm is evaluated through [`Arm::resolve`], so matchers never need to
/// inspect what kind of handler they were given.
///
/// # Examples
///
/// ```rust
/// use fpkit::deferred::Arm;
///
/// let constant: Arm<'_, i32, String> = Arm::value(String::from("fixed"));
/// let computed: Arm<'_, i32, String> = Arm::compute(|n: i32| n.to_string());
///
/// assert_eq!(constant.resolve(7), "fixed");
/// assert_eq!(computed.resolve(7), "7");
/// ```
pub enum Arm<'a, I, R> {
    /// A constant result.
    Value(R),
    /// A computation run only when this arm is selected.
    Compute(Box<dyn FnOnce(I) -> R + 'a>),
}

impl<'a, I, R> Arm<'a, I, R> {
    /// Creates an arm that always yields `value`.
    #[inline]
    pub const fn value(value: R) -> Self {
        Self::Value(value)
    }

    /// Creates an arm that runs `function` on the matched payload.
    #[inline]
    pub fn compute<F>(function: F) -> Self
    where
        F: FnOnce(I) -> R + 'a,
    {
        Self::Compute(Box::new(function))
    }

    /// Produces the arm's result for `input`.
    ///
    /// A `Value` arm ignores its input; a `Compute` arm is run exactly once.
    pub fn resolve(self, input: I) -> R {
        match self {
            Self::Value(value) => value,
            Self::Compute(function) => function(input),
        }
    }
}

impl<'a, R> Arm<'a, (), R> {
    /// Creates an arm from a zero-argument producer, for cases without a
    /// payload.
    #[inline]
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        Self::compute(move |()| producer())
    }
}

impl<I, R: fmt::Debug> fmt::Debug for Arm<'_, I, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Compute(_) => formatter.write_str("Compute(<function>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn value_ignores_input() {
        let arm: Arm<'_, i32, &str> = Arm::value("constant");
        assert_eq!(arm.resolve(99), "constant");
    }

    #[rstest]
    fn compute_receives_input() {
        let arm = Arm::compute(|n: i32| n * 2);
        assert_eq!(arm.resolve(21), 42);
    }

    #[rstest]
    fn lazy_runs_only_when_resolved() {
        let calls = Cell::new(0);
        let arm = Arm::lazy(|| {
            calls.set(calls.get() + 1);
            "computed"
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(arm.resolve(()), "computed");
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn debug_hides_function() {
        let value: Arm<'_, (), i32> = Arm::value(1);
        let compute: Arm<'_, (), i32> = Arm::lazy(|| 1);
        assert_eq!(format!("{value:?}"), "Value(1)");
        assert_eq!(format!("{compute:?}"), "Compute(<function>)");
    }
}
