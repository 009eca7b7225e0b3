//! The validation flow shared by every scalar validator.

use tracing::trace;

use crate::foundation::error::type_mismatch;
use crate::foundation::{Check, ErrorSet, RuleChain, Scalar, Validate, Value};

/// A validator over one scalar kind, parameterized by its check vocabulary.
///
/// Concrete validators are aliases: [`NumberValidator`](super::NumberValidator),
/// [`StringValidator`](super::StringValidator) and
/// [`BoolValidator`](super::BoolValidator). Rule-attachment methods live on
/// those instantiations; the label, optional flag and `validate` flow are
/// shared here.
#[derive(Debug, Clone)]
pub struct ScalarValidator<C> {
    label: Option<String>,
    optional: bool,
    rules: RuleChain<C>,
}

impl<C: Check> Default for ScalarValidator<C> {
    fn default() -> Self {
        Self {
            label: None,
            optional: false,
            rules: RuleChain::new(),
        }
    }
}

impl<C: Check> ScalarValidator<C> {
    /// Creates a validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default tag used when `validate` is called without one.
    #[must_use = "builder methods must be chained or built"]
    pub fn tag(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Accepts nil values and nil references without running any rule, and
    /// dereferences non-nil references before the type check.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Replaces the generated failure message of the last attached rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if !self.rules.set_last_message(message) {
            tracing::warn!(
                type_name = <C::Target as Scalar>::TYPE_NAME,
                "with_message called before any rule was attached; ignoring"
            );
        }
        self
    }

    /// Appends a check.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, check: C) -> Self {
        self.rules.push(check);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn rules(&self) -> &RuleChain<C> {
        &self.rules
    }
}

impl<C: Check> Validate for ScalarValidator<C> {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        let tag = tag.or(self.label.as_deref());
        let type_name = <C::Target as Scalar>::TYPE_NAME;

        // Only optional scalars follow references; a required one must be
        // handed the exact type.
        let resolved = if self.optional {
            let Some(resolved) = value.resolve() else {
                trace!(tag, type_name, "optional scalar is nil; skipping rules");
                return Ok(());
            };
            resolved
        } else {
            value
        };

        let Some(typed) = <C::Target as Scalar>::extract(resolved) else {
            trace!(tag, type_name, actual = resolved.kind(), "scalar type mismatch");
            return Err(ErrorSet::single(type_mismatch(tag, type_name)));
        };

        let messages = self.rules.evaluate(typed, tag);
        trace!(
            tag,
            type_name,
            rules = self.rules.len(),
            failures = messages.len(),
            "scalar rule chain evaluated"
        );
        ErrorSet::into_result(messages)
    }
}
