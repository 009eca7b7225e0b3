//! Prelude module for convenient imports.
//!
//! Provides a single `use schemata_validator::prelude::*;` import that brings
//! in the traits, input types, validator factories and combinators.
//!
//! # Examples
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let username = string().min(3).max(20);
//! let age = uint8().range(18, 100);
//! assert!(username.check("alice").is_ok());
//! assert!(age.check(17_u8).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, input model, errors
// ============================================================================

pub use crate::foundation::{
    Check, ErrorSet, Fields, Number, Predicate, Record, Scalar, SchemaError, Validate,
    ValidateExt, Value,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{Optional, optional};

// ============================================================================
// DERIVE-GATED: field enumeration
// ============================================================================

#[cfg(feature = "derive")]
pub use schemata_validator_macros::Fields;
