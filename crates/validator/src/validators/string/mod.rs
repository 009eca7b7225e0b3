//! String validators
//!
//! Length bounds count UTF-8 bytes by default. `min_chars`/`max_chars`
//! count Unicode scalar values instead.
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let username = string().min(3).max(16).regex("^[a-z0-9_]+$")?;
//! assert!(username.check("ada_l").is_ok());
//! assert_eq!(username.check("Ad").unwrap_err().len(), 2);
//! # Ok::<(), schemata_validator::SchemaError>(())
//! ```

pub mod email;

use std::fmt;

use regex::Regex;

use crate::foundation::{Check, Predicate, SchemaError};
use crate::validators::ScalarValidator;

pub use email::is_email;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// CHECKS
// ============================================================================

/// Constraints available to [`StringValidator`].
#[derive(Debug, Clone)]
pub enum StringCheck {
    /// At least `n` units, measured by the mode.
    Min(usize, LengthMode),
    /// At most `n` units, measured by the mode.
    Max(usize, LengthMode),
    /// A bare email address, see [`is_email`].
    Email,
    /// Matches the pattern anywhere unless it is anchored.
    Regex(Regex),
    /// Membership by equality.
    In(Vec<String>),
    Custom(Predicate<str>),
}

impl Check for StringCheck {
    type Target = String;

    fn passes(&self, value: &String) -> bool {
        match self {
            Self::Min(min, mode) => mode.measure(value) >= *min,
            Self::Max(max, mode) => mode.measure(value) <= *max,
            Self::Email => is_email(value),
            Self::Regex(pattern) => pattern.is_match(value),
            Self::In(set) => set.iter().any(|candidate| candidate == value),
            Self::Custom(predicate) => predicate.test(value),
        }
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StringCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min(min, LengthMode::Bytes) => write!(f, "Min({min})"),
            Self::Min(min, LengthMode::Chars) => write!(f, "MinChars({min})"),
            Self::Max(max, LengthMode::Bytes) => write!(f, "Max({max})"),
            Self::Max(max, LengthMode::Chars) => write!(f, "MaxChars({max})"),
            Self::Email => f.write_str("Email"),
            Self::Regex(pattern) => write!(f, "Regex({})", pattern.as_str()),
            Self::In(set) => write!(f, "In({set:?})"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validator for `String` values.
pub type StringValidator = ScalarValidator<StringCheck>;

impl ScalarValidator<StringCheck> {
    /// Value must be at least `min` bytes long.
    pub fn min(self, min: usize) -> Self {
        self.rule(StringCheck::Min(min, LengthMode::Bytes))
    }

    /// Value must be at most `max` bytes long.
    pub fn max(self, max: usize) -> Self {
        self.rule(StringCheck::Max(max, LengthMode::Bytes))
    }

    /// Value must be at least `min` characters long.
    pub fn min_chars(self, min: usize) -> Self {
        self.rule(StringCheck::Min(min, LengthMode::Chars))
    }

    /// Value must be at most `max` characters long.
    pub fn max_chars(self, max: usize) -> Self {
        self.rule(StringCheck::Max(max, LengthMode::Chars))
    }

    /// Value must be a bare email address.
    pub fn email(self) -> Self {
        self.rule(StringCheck::Email)
    }

    /// Value must match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidRegex`] if `pattern` does not compile.
    pub fn regex(self, pattern: &str) -> Result<Self, SchemaError> {
        let compiled = Regex::new(pattern).map_err(|source| SchemaError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.regex_compiled(compiled))
    }

    /// Value must match an already compiled pattern.
    pub fn regex_compiled(self, pattern: Regex) -> Self {
        self.rule(StringCheck::Regex(pattern))
    }

    /// Value must equal one of `set`.
    pub fn one_of<I, S>(self, set: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(StringCheck::In(set.into_iter().map(Into::into).collect()))
    }

    /// Value must satisfy `predicate`.
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(StringCheck::Custom(Predicate::new(predicate)))
    }
}

/// Validator for `String` values.
#[must_use]
pub fn string() -> StringValidator {
    ScalarValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
