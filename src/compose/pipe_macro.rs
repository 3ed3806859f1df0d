//! The `pipe!` macro: left-to-right function application.

/// Feeds a value through a series of functions, left to right.
///
/// `pipe!(x, f, g, h)` evaluates to `h(g(f(x)))`. Each function is called
/// once, so `FnOnce` closures (such as the helpers in
/// [`nullable`](crate::nullable)) are accepted.
///
/// # Examples
///
/// ```
/// use fpkit::comparer::{EqualityComparer, OrderingComparer};
/// use fpkit::{pipe, sequence};
///
/// let by_length = OrderingComparer::<usize>::natural().derive_from(|word: &String| word.len());
/// let ignore_case = EqualityComparer::<String>::of_equals(|a, b| a.eq_ignore_ascii_case(b));
///
/// let words = pipe!(
///     vec!["Pear".to_string(), "fig".to_string(), "pear".to_string(), "banana".to_string()],
///     sequence::uniq(&ignore_case),
///     sequence::sort(&by_length)
/// );
/// assert_eq!(words, ["fig", "Pear", "banana"]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::comparer::OrderingComparer;
    use rstest::rstest;

    #[rstest]
    fn pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn pipe_applies_left_to_right() {
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        assert_eq!(pipe!(5, double, add_one), 11);
        assert_eq!(pipe!(5, add_one, double), 12);
    }

    #[rstest]
    fn pipe_accepts_trailing_comma() {
        let negate = |x: i32| -x;
        assert_eq!(pipe!(5, negate,), -5);
    }

    #[rstest]
    fn pipe_through_comparer_range_test() {
        let between = OrderingComparer::<i32>::natural().between(1, 5);
        let clamp_high = |x: i32| x.min(5);
        assert!(pipe!(9, clamp_high, |x: i32| between(&x)));
    }
}
