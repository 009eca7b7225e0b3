//! Core traits for the validation system
//!
//! This module defines the contract every validator implements.

use std::sync::Arc;

use crate::foundation::{ErrorSet, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract shared by every scalar and struct validator.
///
/// A validator is an immutable schema object: the value under test and its
/// tag are passed in, never stored, so one schema can be shared across
/// threads and reused for any number of calls.
///
/// # Arguments
///
/// * `value` - The value to validate
/// * `tag` - Label for the value's role, used only to decorate messages.
///   Overrides any label configured on the validator.
///
/// # Returns
///
/// * `Ok(())` if validation succeeds
/// * `Err(ErrorSet)` holding every failure message otherwise
///
/// # Examples
///
/// ```
/// use schemata_validator::foundation::{ErrorSet, Validate, Value};
///
/// struct NotNil;
///
/// impl Validate for NotNil {
///     fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
///         match value.resolve() {
///             Some(_) => Ok(()),
///             None => Err(ErrorSet::single(format!("{} is nil", tag.unwrap_or("value")))),
///         }
///     }
/// }
///
/// assert!(NotNil.validate(&Value::I32(1), None).is_ok());
/// assert_eq!(NotNil.validate(&Value::Nil, Some("id")).unwrap_err().first(), "id is nil");
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`, optionally under `tag`.
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet>;
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        (**self).validate(value, tag)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        (**self).validate(value, tag)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        (**self).validate(value, tag)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Convenience entry points for anything convertible into a [`Value`].
///
/// Automatically implemented for every [`Validate`] implementation.
///
/// ```
/// use schemata_validator::prelude::*;
///
/// let age = int32().gte(0).lte(150);
/// assert!(age.check(42_i32).is_ok());
/// assert_eq!(
///     age.check_tagged(-1_i32, "age").unwrap_err().first(),
///     "<age> failed <i32> validation for <Gte(0)>"
/// );
/// ```
pub trait ValidateExt: Validate {
    /// Validates `value` without a tag.
    fn check(&self, value: impl Into<Value>) -> Result<(), ErrorSet> {
        self.validate(&value.into(), None)
    }

    /// Validates `value` under `tag`.
    fn check_tagged(&self, value: impl Into<Value>, tag: &str) -> Result<(), ErrorSet> {
        self.validate(&value.into(), Some(tag))
    }

    /// Erases the validator type so it can sit in a heterogeneous schema.
    fn shared(self) -> Arc<dyn Validate>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate + ?Sized> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
