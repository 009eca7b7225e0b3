//! # schemata-validator-macros
//!
//! Derive macros for `schemata-validator`.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Fields`](derive@Fields) | Enumerates tagged struct fields for struct schemas |
//!
//! ## Examples
//!
//! ```ignore
//! use schemata_validator::Fields;
//!
//! #[derive(Clone, Fields)]
//! pub struct User {
//!     #[schema(tag = "name")]
//!     name: String,
//!
//!     #[schema(tag = "age")]
//!     age: u8,
//!
//!     #[schema(skip)]
//!     session: String,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;

mod fields;

// ============================================================================
// FIELDS DERIVE
// ============================================================================

/// Derives `schemata_validator::Fields` and the `Value` conversions.
///
/// # Field attributes
///
/// - `#[schema(tag = "name")]` - The tag a struct schema addresses this field by
/// - `#[schema(skip)]` - Never enumerate this field
///
/// Fields without a tag, with an empty tag or with `tag = "-"` are not
/// enumerated. Enumerated field types must implement `Clone` and
/// `Into<schemata_validator::Value>`.
///
/// # Generated items
///
/// - `impl Fields for T`
/// - `impl From<T> for Value` and `impl From<&T> for Value`, producing a
///   `Value::Record` named after the struct
///
/// Only structs with named fields are supported.
#[proc_macro_derive(Fields, attributes(schema))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    fields::derive(input)
}
