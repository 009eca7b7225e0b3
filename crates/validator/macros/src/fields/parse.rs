//! Parsing of #[schema(...)] attributes

use syn::{Attribute, LitStr};

/// Tags that mark a field as not enumerated.
const IGNORED_TAGS: [&str; 2] = ["", "-"];

/// Schema attributes for a field.
#[derive(Debug, Default, Clone)]
pub(super) struct SchemaAttrs {
    pub tag: Option<LitStr>,
    pub skip: bool,
}

impl SchemaAttrs {
    /// Parse schema attributes from a list of attributes.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("schema") {
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("tag") {
            if self.tag.is_some() {
                return Err(meta.error("duplicate `tag`"));
            }
            self.tag = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }

        Err(meta.error("unsupported schema attribute, expected `tag = \"...\"` or `skip`"))
    }

    /// The tag to enumerate the field under, if it is enumerated at all.
    pub(super) fn enumerated_tag(&self) -> Option<&LitStr> {
        if self.skip {
            return None;
        }
        self.tag
            .as_ref()
            .filter(|tag| !IGNORED_TAGS.contains(&tag.value().as_str()))
    }
}
