//! Boolean validators

use std::fmt;

use crate::foundation::Check;
use crate::validators::ScalarValidator;

/// Constraints available to [`BoolValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolCheck {
    True,
    False,
}

impl Check for BoolCheck {
    type Target = bool;

    fn passes(&self, value: &bool) -> bool {
        match self {
            Self::True => *value,
            Self::False => !*value,
        }
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoolCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::True => "True",
            Self::False => "False",
        })
    }
}

/// Validator for `bool` values.
pub type BoolValidator = ScalarValidator<BoolCheck>;

impl ScalarValidator<BoolCheck> {
    /// Value must be `true`.
    pub fn is_true(self) -> Self {
        self.rule(BoolCheck::True)
    }

    /// Value must be `false`.
    pub fn is_false(self) -> Self {
        self.rule(BoolCheck::False)
    }
}

/// Validator for `bool` values.
#[must_use]
pub fn boolean() -> BoolValidator {
    ScalarValidator::new()
}
