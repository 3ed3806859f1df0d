//! `Deferred` values whose computation can fail.

use super::{Arm, Deferred};

/// The state of an asynchronous computation that resolves to either a value
/// or an error.
pub type DeferredResult<A, E> = Deferred<Result<A, E>>;

/// One arm per [`DeferredResult`] outcome, consumed by
/// [`Deferred::match_result`].
///
/// # Examples
///
/// ```rust
/// use fpkit::deferred::{Arm, Deferred, DeferredResult, DeferredResultMatcher};
///
/// let status = |state: DeferredResult<u8, String>| {
///     state.match_result(DeferredResultMatcher {
///         not_started: Arm::value(String::from("-")),
///         in_progress: Arm::value(String::from("...")),
///         ok: Arm::compute(|value: u8| format!("ok: {value}")),
///         err: Arm::compute(|error: String| format!("failed: {error}")),
///     })
/// };
///
/// assert_eq!(status(Deferred::resolved(Ok(1))), "ok: 1");
/// assert_eq!(status(Deferred::resolved(Err("timeout".into()))), "failed: timeout");
/// assert_eq!(status(Deferred::in_progress()), "...");
/// ```
pub struct DeferredResultMatcher<'a, A, E, R> {
    /// Result for [`Deferred::NotStarted`].
    pub not_started: Arm<'a, (), R>,
    /// Result for [`Deferred::InProgress`].
    pub in_progress: Arm<'a, (), R>,
    /// Result for a successful resolution.
    pub ok: Arm<'a, A, R>,
    /// Result for a failed resolution.
    pub err: Arm<'a, E, R>,
}

impl<A, E> Deferred<Result<A, E>> {
    /// Creates a state resolved with a success.
    #[inline]
    pub const fn ok(value: A) -> Self {
        Self::Resolved(Ok(value))
    }

    /// Creates a state resolved with a failure.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Resolved(Err(error))
    }

    /// Returns `true` when resolved with `Ok`.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Resolved(Ok(_)))
    }

    /// Returns `true` when resolved with `Err`.
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Resolved(Err(_)))
    }

    /// Maps a successful value, leaving errors and unresolved states alone.
    pub fn map_ok<B, F>(self, function: F) -> DeferredResult<B, E>
    where
        F: FnOnce(A) -> B,
    {
        self.map(|result| result.map(function))
    }

    /// Maps an error, leaving successes and unresolved states alone.
    pub fn map_err<G, F>(self, function: F) -> DeferredResult<A, G>
    where
        F: FnOnce(E) -> G,
    {
        self.map(|result| result.map_err(function))
    }

    /// Selects and resolves the arm for the current outcome.
    pub fn match_result<R>(self, matcher: DeferredResultMatcher<'_, A, E, R>) -> R {
        match self {
            Self::NotStarted => matcher.not_started.resolve(()),
            Self::InProgress => matcher.in_progress.resolve(()),
            Self::Resolved(Ok(value)) => matcher.ok.resolve(value),
            Self::Resolved(Err(error)) => matcher.err.resolve(error),
        }
    }
}
