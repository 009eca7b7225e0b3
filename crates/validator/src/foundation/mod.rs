//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Input model**: [`Value`], [`Record`], the [`Scalar`] extraction trait
//!   and the [`Fields`] enumeration trait
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Rules**: [`Check`], [`Rule`], [`RuleChain`], [`Predicate`]
//! - **Errors**: [`ErrorSet`], [`SchemaError`]
//!
//! # Architecture
//!
//! ## 1. A closed input type
//!
//! Untyped input is represented as a [`Value`]. Validators are declared over
//! one exact scalar kind and extract it with a pattern match:
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! assert!(int32().check(5_i32).is_ok());
//! assert!(int32().check(5_i64).is_err()); // no widening
//! ```
//!
//! ## 2. Rule chains
//!
//! Scalar validators carry a chain of rules. Every rule runs, and every
//! failure is reported in attachment order:
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let errors = int64().gt(10).non_zero().positive().check(0_i64).unwrap_err();
//! assert_eq!(errors.len(), 3);
//! ```
//!
//! ## 3. Stateless schemas
//!
//! The value and tag travel through `validate` as arguments. A schema is
//! built once and can be shared between threads.

pub mod error;
pub mod fields;
pub mod rule;
pub mod scalar;
pub mod traits;
pub mod value;

pub use error::{ErrorSet, JOIN_DELIMITER, SchemaError};
pub use fields::Fields;
pub use rule::{Check, Predicate, Rule, RuleChain};
pub use scalar::{Number, Scalar};
pub use traits::{Validate, ValidateExt};
pub use value::{Record, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value against several validators and merges their errors.
///
/// Every validator runs; messages are concatenated in validator order.
///
/// ```
/// use schemata_validator::foundation::{Validate, Value, validate_with_all};
/// use schemata_validator::prelude::*;
///
/// let lower = string().min(3);
/// let upper = string().max(5);
/// let validators: [&dyn Validate; 2] = [&lower, &upper];
/// assert!(validate_with_all(&Value::from("abcd"), None, &validators).is_ok());
/// assert_eq!(
///     validate_with_all(&Value::from("ab"), None, &validators).unwrap_err().len(),
///     1
/// );
/// ```
pub fn validate_with_all(
    value: &Value,
    tag: Option<&str>,
    validators: &[&dyn Validate],
) -> Result<(), ErrorSet> {
    let mut messages = Vec::new();

    for validator in validators {
        if let Err(errors) = validator.validate(value, tag) {
            messages.extend(errors);
        }
    }

    ErrorSet::into_result(messages)
}

/// A validation result.
pub type ValidationResult = Result<(), ErrorSet>;

// ============================================================================
// TESTS
// ============================================================================
