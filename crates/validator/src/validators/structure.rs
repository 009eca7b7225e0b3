//! Struct validators
//!
//! A [`StructValidator`] maps field tags to nested schemas and validates a
//! [`Record`](crate::foundation::Record) field by field. Nested failures are
//! flattened into one [`ErrorSet`] with dotted paths (`user.address.zip`).
//!
//! ```
//! use schemata_validator::prelude::*;
//!
//! let schema = structure()
//!     .field("age", int64().gte(0).lte(150))
//!     .field("email", string().email());
//!
//! let input = Record::new("User").with_field("age", -1_i64).with_field("email", "nope");
//! let errors = schema.check_tagged(input, "user").unwrap_err();
//! assert_eq!(
//!     errors.all(),
//!     [
//!         "<user.age> failed <i64> validation for <Gte(0)>",
//!         "<user.email> failed <String> validation for <Email>",
//!     ]
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::combinators::Optional;
use crate::foundation::error::type_mismatch;
use crate::foundation::{ErrorSet, Validate, Value};

const TYPE_NAME: &str = "Struct";

/// Field annotations that never take part in validation.
const IGNORED_TAGS: [&str; 2] = ["", "-"];

// ============================================================================
// POLICY
// ============================================================================

/// What to do when the schema names a tag the value does not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTagPolicy {
    /// Report the missing tag and stop validating this struct. Messages
    /// from tags earlier in sorted order are kept.
    #[default]
    FailFast,
    /// Report the missing tag and keep validating the remaining tags.
    Collect,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates a record against a tag → schema mapping.
///
/// Schema tags are visited in lexicographic order, so a fixed schema and a
/// fixed input always produce the same messages in the same order. Fields
/// present on the value but absent from the schema are ignored.
#[derive(Clone, Default)]
pub struct StructValidator {
    label: Option<String>,
    fields: BTreeMap<String, Arc<dyn Validate>>,
    missing_tags: MissingTagPolicy,
}

impl StructValidator {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the schema for field `tag`, replacing any earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(self, tag: impl Into<String>, schema: impl Validate + 'static) -> Self {
        self.field_shared(tag, Arc::new(schema))
    }

    /// Declares a schema that is shared with other structs.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_shared(mut self, tag: impl Into<String>, schema: Arc<dyn Validate>) -> Self {
        self.fields.insert(tag.into(), schema);
        self
    }

    /// Sets the default tag used when `validate` is called without one.
    #[must_use = "builder methods must be chained or built"]
    pub fn tag(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the missing-tag policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn missing_tags(mut self, policy: MissingTagPolicy) -> Self {
        self.missing_tags = policy;
        self
    }

    /// Wraps the schema so nil values and nil references pass.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Declared tags, in validation order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the schema declared for `tag`.
    pub fn get(&self, tag: &str) -> Option<&dyn Validate> {
        self.fields.get(tag).map(|schema| &**schema)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn missing_tag_policy(&self) -> MissingTagPolicy {
        self.missing_tags
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for StructValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValidator")
            .field("label", &self.label)
            .field("tags", &self.fields.keys().collect::<Vec<_>>())
            .field("missing_tags", &self.missing_tags)
            .finish()
    }
}

impl Validate for StructValidator {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        let tag = tag.or(self.label.as_deref());
        trace!(tag, fields = self.fields.len(), "validating struct");

        if value.is_nil() {
            return Err(ErrorSet::single(format!(
                "{}: nil interface",
                type_mismatch(tag, TYPE_NAME)
            )));
        }
        let Some(resolved) = value.resolve() else {
            return Err(ErrorSet::single(format!(
                "{}: nil pointer",
                type_mismatch(tag, TYPE_NAME)
            )));
        };
        let Some(record) = resolved.as_record() else {
            trace!(tag, actual = resolved.kind(), "struct type mismatch");
            return Err(ErrorSet::single(type_mismatch(tag, TYPE_NAME)));
        };

        let present: HashMap<&str, &Value> = record
            .fields()
            .filter(|(name, _)| !IGNORED_TAGS.contains(name))
            .collect();

        let mut messages = Vec::new();
        for (child, schema) in &self.fields {
            let path = match tag {
                Some(parent) => format!("{parent}.{child}"),
                None => child.clone(),
            };

            let Some(field) = present.get(child.as_str()) else {
                debug!(path = %path, record = record.type_name(), "schema tag missing from value");
                messages.push(format!("tag <{path}> not found for <{TYPE_NAME}>"));
                match self.missing_tags {
                    MissingTagPolicy::FailFast => break,
                    MissingTagPolicy::Collect => continue,
                }
            };

            if let Err(errors) = schema.validate(field, Some(&path)) {
                messages.extend(errors);
            }
        }

        trace!(tag, failures = messages.len(), "struct validated");
        ErrorSet::into_result(messages)
    }
}

/// Creates an empty struct schema.
#[must_use]
pub fn structure() -> StructValidator {
    StructValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
