//! # schemata-validator
//!
//! Schema-based validation of untyped runtime values: decoded payloads,
//! hand-built records and `#[derive(Fields)]` structs.
//!
//! ## Quick Start
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let schema = structure()
//!     .field("age", int64().gte(0).lte(150))
//!     .field("email", string().email());
//!
//! let input = Record::new("User")
//!     .with_field("age", -1_i64)
//!     .with_field("email", "not-an-email");
//!
//! let errors = schema.check(input).unwrap_err();
//! assert_eq!(
//!     errors.joined(),
//!     "<age> failed <i64> validation for <Gte(0)> | <email> failed <String> validation for <Email>"
//! );
//! ```
//!
//! ## Deriving field enumeration
//!
//! ```
//! # #[cfg(feature = "derive")] {
//! use schemata_validator::prelude::*;
//!
//! #[derive(Clone, Fields)]
//! struct User {
//!     #[schema(tag = "age")]
//!     age: i64,
//!     #[schema(tag = "email")]
//!     email: String,
//!     password_hash: String,
//! }
//!
//! let schema = structure()
//!     .field("age", int64().gte(0))
//!     .field("email", string().email());
//!
//! let user = User { age: 36, email: "ada@example.com".into(), password_hash: String::new() };
//! assert!(schema.check(&user).is_ok());
//! # }
//! ```
//!
//! ## Semantics
//!
//! - Type checks are exact: an `i64` validator rejects an `i32` and never
//!   parses strings.
//! - Every failing rule is reported, in attachment order.
//! - Struct fields are validated in sorted tag order and nested failures
//!   carry dotted paths.
//! - Validators hold no per-call state and can be shared across threads.
//!
//! ## Built-in Validators
//!
//! - **Numeric**: [`int`](validators::int), [`int8`](validators::int8) …
//!   [`uint64`](validators::uint64), [`float32`](validators::float32),
//!   [`float64`](validators::float64)
//! - **String**: [`string`](validators::string)
//! - **Boolean**: [`boolean`](validators::boolean)
//! - **Struct**: [`structure`](validators::structure), [`schema!`]

extern crate self as schemata_validator;

mod macros;

pub mod combinators;
pub mod foundation;
pub mod json;
pub mod prelude;
pub mod validators;

pub use foundation::{ErrorSet, Fields, Record, SchemaError, Validate, ValidateExt, Value};

#[cfg(feature = "derive")]
pub use schemata_validator_macros::Fields;
