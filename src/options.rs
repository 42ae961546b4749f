//! Per-render configuration: [`RenderOptions`] and attribute assembly.
//!
//! Every chart element goes through [`RenderOptions::render_element`], so
//! class/id prefixing, `data-*` hooks, link wrapping and escaping behave
//! identically across all four chart types. Attribute precedence, lowest
//! to highest: base attributes, computed `data-value`/`data-name`,
//! prefix-derived `class`/`id`, caller overrides. An override of `None`
//! deletes the key.

use indexmap::IndexMap;

use crate::data::Metadata;
use crate::svg::{AttrValue, Element};

/// Attribute overrides applied last when assembling an element.
///
/// [`Overrides::unset`] records a deletion, mirroring the convention of
/// a `None`-valued entry removing the attribute entirely (used to strip
/// inherited attributes like a marker radius from group and path elements).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    entries: Vec<(String, Option<AttrValue>)>,
}

impl Overrides {
    pub fn new() -> Overrides {
        Overrides::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Overrides {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    pub fn unset(mut self, name: impl Into<String>) -> Overrides {
        self.entries.push((name.into(), None));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&AttrValue>)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_ref()))
    }
}

/// Shared rendering options: CSS class / element id prefixes plus a bag of
/// passthrough SVG attributes. Constructed per render call, no identity.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Prefixed with `metadata.id` to form a `class` attribute; omitted
    /// when unset.
    pub class_prefix: Option<String>,
    /// Prefixed with `metadata.id` to form an `id` attribute; omitted
    /// when unset.
    pub id_prefix: Option<String>,
    /// Extra attributes applied to every rendered element, in insertion
    /// order.
    pub attrs: IndexMap<String, AttrValue>,
}

impl RenderOptions {
    pub fn new() -> RenderOptions {
        RenderOptions::default()
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> RenderOptions {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> RenderOptions {
        self.id_prefix = Some(prefix.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> RenderOptions {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Assemble the attribute map for an element tagged with `meta`.
    ///
    /// `value` is the data value when the element represents a point; it
    /// drives the `data-value`/`data-name` hooks. Replacing an existing
    /// key keeps its original position, so output order follows first
    /// writes.
    pub fn attributes(
        &self,
        meta: &Metadata,
        value: Option<f64>,
        overrides: &Overrides,
    ) -> IndexMap<String, AttrValue> {
        let mut attrs = self.attrs.clone();

        if let Some(value) = value {
            attrs.insert("data-value".to_string(), AttrValue::Number(value));
            attrs.insert("data-name".to_string(), AttrValue::Text(meta.label.clone()));
        }

        if !meta.id.is_empty() {
            if let Some(prefix) = &self.class_prefix {
                attrs.insert("class".to_string(), format!("{prefix}{}", meta.id).into());
            }
            if let Some(prefix) = &self.id_prefix {
                attrs.insert("id".to_string(), format!("{prefix}{}", meta.id).into());
            }
        }

        for (name, value) in overrides.iter() {
            match value {
                Some(value) => {
                    attrs.insert(name.to_string(), value.clone());
                }
                None => {
                    attrs.shift_remove(name);
                }
            }
        }

        attrs
    }

    /// Render one complete element: attributes per [`RenderOptions::attributes`],
    /// a `<title>` child (the metadata label when no explicit title is
    /// given, none when both are empty), link wrapping, and a trailing
    /// newline.
    pub fn render_element(
        &self,
        tag: &'static str,
        meta: &Metadata,
        value: Option<f64>,
        title: Option<String>,
        overrides: &Overrides,
    ) -> String {
        let title = title.or_else(|| (!meta.label.is_empty()).then(|| meta.label.clone()));

        let mut element = Element::new(tag).attrs(self.attributes(meta, value, overrides));
        if let Some(title) = title {
            element = element.title(title);
        }

        let mut out = meta.wrap_link(&element.render());
        out.push('\n');
        out
    }
}
