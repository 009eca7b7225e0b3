//! Rule chains shared by every scalar validator.
//!
//! A [`Rule`] pairs a [`Check`] (a tagged enum describing one constraint and
//! its build-time parameters) with an optional explicit failure message.
//! A [`RuleChain`] evaluates every rule in attachment order and collects all
//! failures; it never stops at the first one.
//!
//! # Message resolution
//!
//! A failing rule reports, in priority order:
//!
//! 1. the explicit message attached with `with_message`,
//! 2. `"<tag> failed <type> validation for <Rule(params)>"` when a tag is known,
//! 3. `"failed <type> validation for <Rule(params)>"` otherwise.

use std::fmt;
use std::sync::Arc;

use crate::foundation::Scalar;
use crate::foundation::error::rule_failed;

// ============================================================================
// CHECK
// ============================================================================

/// A single constraint over a scalar kind.
pub trait Check: Clone + fmt::Debug + Send + Sync + 'static {
    /// The scalar kind this check inspects.
    type Target: Scalar;

    /// Returns `true` when `value` satisfies the constraint.
    fn passes(&self, value: &Self::Target) -> bool;

    /// Rule label used in generated messages, e.g. `Lt(5)`.
    fn label(&self) -> String;
}

// ============================================================================
// PREDICATE
// ============================================================================

/// A user-supplied predicate for `Custom` rules.
pub struct Predicate<T: ?Sized>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T: ?Sized> Predicate<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Calls the predicate.
    pub fn test(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(<function>)")
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A check plus the explicit message to report when it fails, if any.
#[derive(Debug, Clone)]
pub struct Rule<C> {
    check: C,
    message: Option<String>,
}

impl<C: Check> Rule<C> {
    pub fn new(check: C) -> Self {
        Self {
            check,
            message: None,
        }
    }

    /// Sets the explicit failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check(&self) -> &C {
        &self.check
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Evaluates the rule, returning the resolved failure message.
    pub fn evaluate(&self, value: &C::Target, tag: Option<&str>) -> Option<String> {
        if self.check.passes(value) {
            return None;
        }
        Some(match &self.message {
            Some(message) => message.clone(),
            None => rule_failed(tag, <C::Target as Scalar>::TYPE_NAME, self.check.label()),
        })
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// An ordered list of rules over one scalar kind.
#[derive(Debug, Clone)]
pub struct RuleChain<C> {
    rules: Vec<Rule<C>>,
}

impl<C> Default for RuleChain<C> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<C: Check> RuleChain<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule with no explicit message.
    pub fn push(&mut self, check: C) {
        self.rules.push(Rule::new(check));
    }

    /// Sets the explicit message of the most recently attached rule.
    ///
    /// Returns `false` if the chain is empty.
    pub fn set_last_message(&mut self, message: impl Into<String>) -> bool {
        match self.rules.last_mut() {
            Some(rule) => {
                rule.message = Some(message.into());
                true
            }
            None => false,
        }
    }

    /// Runs every rule against `value` and collects every failure message,
    /// in attachment order.
    pub fn evaluate(&self, value: &C::Target, tag: Option<&str>) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(value, tag))
            .collect()
    }

    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
