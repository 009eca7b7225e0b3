//! Built-in validators
//!
//! One validator per scalar kind plus the struct validator. Every scalar
//! validator is a [`ScalarValidator`] instantiated with a check vocabulary,
//! so the optional flag, default tag, message resolution and rule-chain
//! evaluation behave identically across kinds.
//!
//! # Examples
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! // Numeric validation
//! let age = uint8().range(18, 100);
//!
//! // String validation
//! let email = string().email().with_message("please enter a valid email");
//!
//! // Composition
//! let signup = structure()
//!     .field("age", age)
//!     .field("email", email)
//!     .field("terms", boolean().is_true());
//!
//! let input = Record::new("Signup")
//!     .with_field("age", 30_u8)
//!     .with_field("email", "ada@example.com")
//!     .with_field("terms", true);
//! assert!(signup.check(input).is_ok());
//! ```

pub mod boolean;
pub mod numeric;
pub mod scalar;
pub mod string;
pub mod structure;

pub use scalar::ScalarValidator;

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use numeric::{
    FloatValidator, IntValidator, NumberValidator, NumericCheck, UintValidator, float32, float64,
    int, int8, int16, int32, int64, uint, uint8, uint16, uint32, uint64,
};

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use string::{LengthMode, StringCheck, StringValidator, is_email, string};

// ============================================================================
// RE-EXPORTS: Logical validators
// ============================================================================

pub use boolean::{BoolCheck, BoolValidator, boolean};

// ============================================================================
// RE-EXPORTS: Struct validators
// ============================================================================

pub use structure::{MissingTagPolicy, StructValidator, structure};
