//! Curried helpers for optional values, shaped for use in pipelines.
//!
//! Each helper takes its configuration first and returns a closure over the
//! `Option`, so it slots directly into [`pipe!`](crate::pipe).
//!
//! # Examples
//!
//! ```rust
//! use fpkit::{nullable, pipe};
//!
//! let port = pipe!(
//!     Some(String::from("8080")),
//!     nullable::bind(|text: String| text.parse::<u16>().ok()),
//!     nullable::filter(|port: &u16| *port >= 1024),
//!     nullable::default_value(3000)
//! );
//! assert_eq!(port, 8080);
//! ```

use crate::comparer::EqualityComparer;

/// Equality for optional values: two `None`s are equal, `None` never equals
/// `Some`, and two `Some`s are compared with `inner`.
///
/// # Examples
///
/// ```rust
/// use fpkit::comparer::EqualityComparer;
/// use fpkit::nullable;
///
/// let comparer = nullable::equality_comparer(&EqualityComparer::<i32>::default());
/// assert!(comparer.equals(&None, &None));
/// assert!(!comparer.equals(&Some(1), &None));
/// ```
pub fn equality_comparer<A: 'static>(inner: &EqualityComparer<A>) -> EqualityComparer<Option<A>> {
    inner.nullable()
}

/// Maps a present value.
pub fn map<A, B, F>(function: F) -> impl FnOnce(Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    move |value| value.map(function)
}

/// Chains a computation that may itself produce no value.
pub fn bind<A, B, F>(function: F) -> impl FnOnce(Option<A>) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    move |value| value.and_then(function)
}

/// Keeps a present value only when `predicate` holds.
pub fn filter<A, P>(predicate: P) -> impl FnOnce(Option<A>) -> Option<A>
where
    P: FnOnce(&A) -> bool,
{
    move |value| value.filter(predicate)
}

/// Unwraps a present value or falls back to `default`.
pub fn default_value<A>(default: A) -> impl FnOnce(Option<A>) -> A {
    move |value| value.unwrap_or(default)
}

/// Unwraps a present value or computes a fallback. The fallback runs only
/// when the value is absent.
pub fn default_with<A, F>(fallback: F) -> impl FnOnce(Option<A>) -> A
where
    F: FnOnce() -> A,
{
    move |value| value.unwrap_or_else(fallback)
}
