//! Validator combinators
//!
//! Decorators that wrap any [`Validate`](crate::foundation::Validate)
//! implementation and adjust how it treats its input.

pub mod optional;

pub use optional::{Optional, optional};
