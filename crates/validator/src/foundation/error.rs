//! Error types for validation failures and schema construction.
//!
//! [`ErrorSet`] is what every validator returns on failure: an ordered,
//! never-empty list of human-readable messages. [`SchemaError`] is raised
//! while a schema is being built, never during validation.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Delimiter used by [`ErrorSet::joined`].
pub const JOIN_DELIMITER: &str = " | ";

// ============================================================================
// ERROR SET
// ============================================================================

/// An ordered, non-empty collection of validation failure messages.
///
/// Messages keep the order in which they were produced: rule attachment
/// order within a scalar validator, sorted tag order within a struct.
///
/// # Examples
///
/// ```
/// use schemata_validator::ErrorSet;
///
/// let errors = ErrorSet::new(vec!["too small".to_string(), "not even".to_string()]);
/// assert_eq!(errors.first(), "too small");
/// assert_eq!(errors.all().len(), 2);
/// assert_eq!(errors.joined(), "too small | not even");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    messages: SmallVec<[String; 2]>,
}

impl ErrorSet {
    /// Creates an error set from a list of messages.
    ///
    /// # Panics
    ///
    /// Panics if `messages` is empty. An empty error set is never a valid
    /// validation outcome; use [`ErrorSet::from_messages`] when the list may
    /// legitimately be empty.
    pub fn new(messages: impl IntoIterator<Item = String>) -> Self {
        Self::from_messages(messages).expect("an ErrorSet requires at least one message")
    }

    /// Creates an error set holding a single message.
    pub fn single(message: impl Into<String>) -> Self {
        let mut messages = SmallVec::new();
        messages.push(message.into());
        Self { messages }
    }

    /// Creates an error set, or `None` when there is nothing to report.
    pub fn from_messages(messages: impl IntoIterator<Item = String>) -> Option<Self> {
        let messages: SmallVec<[String; 2]> = messages.into_iter().collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Turns a list of messages into a validation result.
    pub fn into_result(messages: impl IntoIterator<Item = String>) -> Result<(), Self> {
        Self::from_messages(messages).map_or(Ok(()), Err)
    }

    /// The first message.
    ///
    /// For struct schemas this is the first failure of the alphabetically
    /// smallest failing tag.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.messages[0]
    }

    /// All messages, in order.
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.messages
    }

    /// All messages joined by [`JOIN_DELIMITER`].
    #[must_use]
    pub fn joined(&self) -> String {
        self.messages.join(JOIN_DELIMITER)
    }

    /// Number of messages (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    /// Appends the messages of `other`, keeping order.
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
    }

    /// Consumes the set and returns the messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages.into_vec()
    }

    /// Converts the set to a JSON array of messages.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.messages
                .iter()
                .cloned()
                .map(serde_json::Value::String)
                .collect(),
        )
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str(JOIN_DELIMITER)?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorSet {}

impl IntoIterator for ErrorSet {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

// ============================================================================
// MESSAGE TEMPLATES
// ============================================================================

/// Message for a value whose kind does not match the validator's type.
pub(crate) fn type_mismatch(tag: Option<&str>, type_name: &str) -> String {
    match tag {
        Some(tag) => format!("<{tag}> failed validation for <{type_name}>"),
        None => format!("failed validation for <{type_name}>"),
    }
}

/// Message for a rule that rejected the value, absent an explicit override.
pub(crate) fn rule_failed(tag: Option<&str>, type_name: &str, rule: impl fmt::Display) -> String {
    match tag {
        Some(tag) => format!("<{tag}> failed <{type_name}> validation for <{rule}>"),
        None => format!("failed <{type_name}> validation for <{rule}>"),
    }
}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Errors raised while building a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A `regex` rule was given a pattern that does not compile.
    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
