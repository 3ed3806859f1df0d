//! Function composition utilities.
//!
//! - [`pipe!`](crate::pipe): apply functions left to right to a value
//! - [`compose!`](crate::compose): build a function composed right to left
//! - [`identity`], [`flip`]: basic combinators
//!
//! The curried helpers in [`sequence`](crate::sequence) and
//! [`nullable`](crate::nullable) return closures, so they plug into both
//! macros directly.

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{flip, identity};
