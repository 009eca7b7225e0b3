//! The opaque input model.
//!
//! Every validator consumes a [`Value`]: a closed sum over the scalar kinds
//! the library understands, keyed records, and nil / reference wrappers.
//! Extraction is a pattern match on the variant, so a value is never
//! widened, narrowed or parsed on its way into a rule.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// A runtime value submitted for validation.
///
/// # Examples
///
/// ```
/// use schemata_validator::Value;
///
/// assert_eq!(Value::from(5_i32), Value::I32(5));
/// assert_eq!(Value::from(None::<u8>), Value::Ref(None));
/// assert_eq!(Value::from(Some(1.5_f64)).resolve(), Some(&Value::F64(1.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (a nil interface).
    #[default]
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    /// A keyed, structured record.
    Record(Record),
    /// A decoded sequence. Carried through, never accepted by a validator.
    List(Vec<Value>),
    /// A reference: `None` is a nil reference, `Some` points at the value.
    Ref(Option<Box<Value>>),
}

impl Value {
    /// Follows references down to the referenced value.
    ///
    /// Returns `None` for [`Value::Nil`] and for a nil reference anywhere
    /// along the chain.
    #[must_use]
    pub fn resolve(&self) -> Option<&Self> {
        let mut current = self;
        loop {
            match current {
                Self::Nil | Self::Ref(None) => return None,
                Self::Ref(Some(inner)) => current = &**inner,
                other => return Some(other),
            }
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the record if this value is one (without following references).
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::String(_) => "String",
            Self::Record(_) => "record",
            Self::List(_) => "list",
            Self::Ref(_) => "ref",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Record(record) => write!(f, "{record}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Ref(None) => f.write_str("&nil"),
            Self::Ref(Some(inner)) => write!(f, "&{inner}"),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A structured value: an ordered list of `(tag, value)` pairs.
///
/// Records are normally produced by `#[derive(Fields)]` or decoded from JSON,
/// but they can be assembled by hand as well.
///
/// ```
/// use schemata_validator::{Record, Value};
///
/// let user = Record::new("User")
///     .with_field("age", 42_i64)
///     .with_field("email", "ada@example.com");
///
/// assert_eq!(user.get("age"), Some(&Value::I64(42)));
/// assert_eq!(user.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    type_name: Cow<'static, str>,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record for the given type name.
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, tag: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(tag, value);
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((tag.into(), value.into()));
    }

    /// Name of the type this record was built from.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    /// Looks up the last field carrying `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|(t, _)| t == tag)
            .map(|(_, value)| value)
    }

    /// Number of fields, including untagged ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (i, (tag, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {tag}: {value}")?;
        }
        f.write_str(" }")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new("Record");
        for (tag, value) in iter {
            record.push(tag, value);
        }
        record
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Record => Record,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Ref(value.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Self>> From<Box<T>> for Value {
    fn from(value: Box<T>) -> Self {
        Self::Ref(Some(Box::new((*value).into())))
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
