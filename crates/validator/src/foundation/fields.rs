//! Field enumeration for structured values.

use crate::foundation::{Record, Value};

/// Enumerates the tagged fields of a struct.
///
/// Usually derived:
///
/// ```
/// use schemata_validator::{Fields, Value};
///
/// #[derive(Clone, Fields)]
/// struct Signup {
///     #[schema(tag = "email")]
///     email: String,
///     #[schema(tag = "age")]
///     age: u8,
///     // Untagged: never seen by a struct schema.
///     referrer: Option<String>,
/// }
///
/// let signup = Signup { email: "a@b.io".into(), age: 30, referrer: None };
/// let tags: Vec<_> = signup.fields().into_iter().map(|(tag, _)| tag).collect();
/// assert_eq!(tags, ["email", "age"]);
/// assert!(matches!(Value::from(&signup), Value::Record(_)));
/// ```
///
/// Hand-written implementations must return only tags that are neither
/// empty nor `"-"`; the struct validator ignores such tags either way.
pub trait Fields {
    /// Name of the implementing type.
    fn type_name(&self) -> &'static str;

    /// The `(tag, value)` pairs, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Value)>;

    /// Collects the fields into a [`Record`].
    fn to_record(&self) -> Record {
        let mut record = Record::new(self.type_name());
        for (tag, value) in self.fields() {
            record.push(tag, value);
        }
        record
    }
}
