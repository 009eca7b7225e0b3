//! Numeric validators
//!
//! One rule vocabulary, [`NumericCheck`], covers every ordered numeric kind:
//! signed and unsigned integers of each width, and both float widths.
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let port = uint16().range(1024, 49151);
//! assert!(port.check(8080_u16).is_ok());
//! assert!(port.check(80_u16).is_err());
//! assert!(port.check(8080_u32).is_err()); // wrong width
//! ```
//!
//! Float comparisons are exact. `float64().eq(0.3)` rejects `0.1 + 0.2`.

use std::fmt;

use crate::foundation::{Check, Number, Predicate};
use crate::validators::ScalarValidator;

// ============================================================================
// CHECKS
// ============================================================================

/// Constraints available to every numeric validator.
#[derive(Debug, Clone)]
pub enum NumericCheck<T> {
    /// `value < bound`
    Lt(T),
    /// `value > bound`
    Gt(T),
    /// `value <= bound`
    Lte(T),
    /// `value >= bound`
    Gte(T),
    /// `value == expected`
    Eq(T),
    /// `value != expected`
    NotEq(T),
    /// `min <= value <= max`
    Range { min: T, max: T },
    Positive,
    Negative,
    NonNegative,
    NonPositive,
    NonZero,
    /// Membership by equality.
    In(Vec<T>),
    Custom(Predicate<T>),
}

impl<T: Number> Check for NumericCheck<T> {
    type Target = T;

    fn passes(&self, value: &T) -> bool {
        let value = *value;
        match self {
            Self::Lt(bound) => value < *bound,
            Self::Gt(bound) => value > *bound,
            Self::Lte(bound) => value <= *bound,
            Self::Gte(bound) => value >= *bound,
            Self::Eq(expected) => value == *expected,
            Self::NotEq(expected) => value != *expected,
            Self::Range { min, max } => value >= *min && value <= *max,
            Self::Positive => value > T::ZERO,
            Self::Negative => value < T::ZERO,
            Self::NonNegative => value >= T::ZERO,
            Self::NonPositive => value <= T::ZERO,
            Self::NonZero => value != T::ZERO,
            Self::In(set) => set.contains(&value),
            Self::Custom(predicate) => predicate.test(&value),
        }
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl<T: Number> fmt::Display for NumericCheck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lt(bound) => write!(f, "Lt({bound})"),
            Self::Gt(bound) => write!(f, "Gt({bound})"),
            Self::Lte(bound) => write!(f, "Lte({bound})"),
            Self::Gte(bound) => write!(f, "Gte({bound})"),
            Self::Eq(expected) => write!(f, "Eq({expected})"),
            Self::NotEq(expected) => write!(f, "NotEq({expected})"),
            Self::Range { min, max } => write!(f, "Range({min}, {max})"),
            Self::Positive => f.write_str("Positive"),
            Self::Negative => f.write_str("Negative"),
            Self::NonNegative => f.write_str("NonNegative"),
            Self::NonPositive => f.write_str("NonPositive"),
            Self::NonZero => f.write_str("NonZero"),
            Self::In(set) => write!(f, "In({set:?})"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validator for an ordered numeric kind `T`.
pub type NumberValidator<T> = ScalarValidator<NumericCheck<T>>;

/// Validator for a signed integer kind.
pub type IntValidator<T> = NumberValidator<T>;

/// Validator for an unsigned integer kind.
pub type UintValidator<T> = NumberValidator<T>;

/// Validator for a float kind.
pub type FloatValidator<T> = NumberValidator<T>;

impl<T: Number> ScalarValidator<NumericCheck<T>> {
    /// Value must be strictly less than `bound`.
    pub fn lt(self, bound: T) -> Self {
        self.rule(NumericCheck::Lt(bound))
    }

    /// Value must be strictly greater than `bound`.
    pub fn gt(self, bound: T) -> Self {
        self.rule(NumericCheck::Gt(bound))
    }

    /// Value must be at most `bound`.
    pub fn lte(self, bound: T) -> Self {
        self.rule(NumericCheck::Lte(bound))
    }

    /// Value must be at least `bound`.
    pub fn gte(self, bound: T) -> Self {
        self.rule(NumericCheck::Gte(bound))
    }

    /// Value must equal `expected`.
    pub fn eq(self, expected: T) -> Self {
        self.rule(NumericCheck::Eq(expected))
    }

    /// Value must differ from `expected`.
    pub fn not_eq(self, expected: T) -> Self {
        self.rule(NumericCheck::NotEq(expected))
    }

    /// Value must lie in `min..=max`.
    pub fn range(self, min: T, max: T) -> Self {
        self.rule(NumericCheck::Range { min, max })
    }

    pub fn positive(self) -> Self {
        self.rule(NumericCheck::Positive)
    }

    pub fn negative(self) -> Self {
        self.rule(NumericCheck::Negative)
    }

    pub fn non_negative(self) -> Self {
        self.rule(NumericCheck::NonNegative)
    }

    pub fn non_positive(self) -> Self {
        self.rule(NumericCheck::NonPositive)
    }

    pub fn non_zero(self) -> Self {
        self.rule(NumericCheck::NonZero)
    }

    /// Value must equal one of `set`.
    pub fn one_of(self, set: impl IntoIterator<Item = T>) -> Self {
        self.rule(NumericCheck::In(set.into_iter().collect()))
    }

    /// Value must satisfy `predicate`.
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule(NumericCheck::Custom(Predicate::new(predicate)))
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

macro_rules! number_factories {
    ($($(#[$meta:meta])* $factory:ident => $alias:ident<$ty:ty>;)+) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $factory() -> $alias<$ty> {
                ScalarValidator::new()
            }
        )+
    };
}

number_factories! {
    /// Validator for `isize` values.
    int => IntValidator<isize>;
    /// Validator for `i8` values.
    int8 => IntValidator<i8>;
    /// Validator for `i16` values.
    int16 => IntValidator<i16>;
    /// Validator for `i32` values.
    int32 => IntValidator<i32>;
    /// Validator for `i64` values.
    int64 => IntValidator<i64>;
    /// Validator for `usize` values.
    uint => UintValidator<usize>;
    /// Validator for `u8` values.
    uint8 => UintValidator<u8>;
    /// Validator for `u16` values.
    uint16 => UintValidator<u16>;
    /// Validator for `u32` values.
    uint32 => UintValidator<u32>;
    /// Validator for `u64` values.
    uint64 => UintValidator<u64>;
    /// Validator for `f32` values.
    float32 => FloatValidator<f32>;
    /// Validator for `f64` values.
    float64 => FloatValidator<f64>;
}

// ============================================================================
// TESTS
// ============================================================================
