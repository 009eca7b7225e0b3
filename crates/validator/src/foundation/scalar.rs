//! Exact type extraction from [`Value`].

use std::fmt::{Debug, Display};

use crate::foundation::Value;

/// A scalar kind a validator can be declared over.
///
/// `extract` succeeds only when the value's variant is exactly `Self`:
/// an `i64` validator rejects a `Value::I32`, and a numeric validator never
/// parses a `Value::String`.
pub trait Scalar: Send + Sync + 'static {
    /// Name used in generated messages, e.g. `i32` or `String`.
    const TYPE_NAME: &'static str;

    /// Borrows the scalar out of `value` if the variant matches.
    fn extract(value: &Value) -> Option<&Self>;
}

/// An ordered numeric scalar: integers, unsigned integers and floats.
///
/// Equality on floats is exact (no epsilon).
pub trait Number: Scalar + Copy + PartialOrd + Display + Debug {
    /// The additive identity, used by the sign rules.
    const ZERO: Self;
}

macro_rules! scalar_kind {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn extract(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

macro_rules! number_kind {
    ($($ty:ty => $variant:ident, $zero:expr);+ $(;)?) => {
        $(
            scalar_kind!($ty => $variant);

            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

scalar_kind! {
    bool => Bool,
    String => String,
}

number_kind! {
    i8 => I8, 0;
    i16 => I16, 0;
    i32 => I32, 0;
    i64 => I64, 0;
    isize => Isize, 0;
    u8 => U8, 0;
    u16 => U16, 0;
    u32 => U32, 0;
    u64 => U64, 0;
    usize => Usize, 0;
    f32 => F32, 0.0;
    f64 => F64, 0.0;
}
