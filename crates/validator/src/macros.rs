//! Macros for declaring schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`schema!`] — Build a [`StructValidator`](crate::validators::StructValidator)
//!   from `tag => validator` pairs

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a struct schema from `tag => validator` pairs.
///
/// Expands to `StructValidator::new().field(tag, validator)...`, so every
/// builder method of the struct validator can be chained onto the result.
/// Schemas nest by using `schema!` as a field validator.
///
/// ```
/// use schemata_validator::prelude::*;
/// use schemata_validator::schema;
///
/// let user = schema! {
///     "age" => int64().gte(0).lte(150),
///     "email" => string().email(),
///     "address" => schema! {
///         "zip" => string().min(5).max(5),
///     },
/// };
///
/// let input = Record::new("User")
///     .with_field("age", 36_i64)
///     .with_field("email", "ada@example.com")
///     .with_field("address", Record::new("Address").with_field("zip", "123"));
///
/// assert_eq!(
///     user.check(input).unwrap_err().first(),
///     "<address.zip> failed <String> validation for <Min(5)>"
/// );
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        $crate::validators::StructValidator::new()
    };
    ($($tag:expr => $validator:expr),+ $(,)?) => {
        $crate::validators::StructValidator::new()
            $(.field($tag, $validator))+
    };
}
