//! Errors for non-empty collections.

/// Returned when a non-empty collection is requested from an empty one.
///
/// # Examples
///
/// ```rust
/// use fpkit::non_empty::{EmptyError, NonEmptyVec};
///
/// let error = NonEmptyVec::<i32>::try_from_vec(Vec::new()).unwrap_err();
/// assert_eq!(error, EmptyError);
/// assert_eq!(
///     error.to_string(),
///     "cannot build a non-empty vector from an empty collection"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot build a non-empty vector from an empty collection")]
pub struct EmptyError;
