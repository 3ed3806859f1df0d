//! The `compose!` macro: right-to-left function composition.

/// Composes functions right to left into a new function.
///
/// `compose!(f, g, h)(x)` evaluates to `f(g(h(x)))`, matching mathematical
/// notation. The result is a `move` closure; every composed function is
/// called once per invocation.
///
/// # Examples
///
/// ```
/// use fpkit::comparer::OrderingComparer;
/// use fpkit::{compose, sequence};
///
/// let top_three = |mut values: Vec<i32>| {
///     values.truncate(3);
///     values
/// };
/// let podium = compose!(top_three, sequence::sort(&OrderingComparer::<i32>::natural().reverse()));
///
/// assert_eq!(podium(vec![4, 9, 1, 7, 3]), vec![9, 7, 4]);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
