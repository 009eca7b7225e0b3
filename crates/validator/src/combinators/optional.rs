//! OPTIONAL combinator - lets nil values through

use crate::foundation::{ErrorSet, Validate, Value};

/// Makes a validator accept nil values and nil references.
///
/// Any other value, including a non-nil reference, is handed to the inner
/// validator unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Optional<V> {
    fn validate(&self, value: &Value, tag: Option<&str>) -> Result<(), ErrorSet> {
        match value.resolve() {
            None => Ok(()),
            Some(_) => self.inner.validate(value, tag),
        }
    }
}

pub fn optional<V: Validate>(validator: V) -> Optional<V> {
    Optional::new(validator)
}
