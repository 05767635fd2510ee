//! Component templates and placeholder substitution.
//!
//! A template is flat text carrying the [`PLACEHOLDER`] token wherever the
//! component name belongs. There is exactly one variable, so there is no
//! template engine: rendering is a literal global replace.

use crate::domain::value_objects::{ComponentType, LanguageFlavor};

/// Marker replaced by the component name.
pub const PLACEHOLDER: &str = "COMPONENT_NAME";

/// Lookup key of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub component_type: ComponentType,
    pub flavor: LanguageFlavor,
}

impl TemplateKey {
    pub const fn new(component_type: ComponentType, flavor: LanguageFlavor) -> Self {
        Self {
            component_type,
            flavor,
        }
    }
}

/// Raw, read-only template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub key: TemplateKey,
    pub source: &'static str,
}

impl Template {
    pub const fn new(key: TemplateKey, source: &'static str) -> Self {
        Self { key, source }
    }

    /// Number of placeholder occurrences in the source.
    pub fn placeholder_count(&self) -> usize {
        self.source.matches(PLACEHOLDER).count()
    }

    /// Replace every placeholder with `name`.
    ///
    /// Single pass: a name that itself contains the token is inserted
    /// verbatim and not expanded again.
    pub fn substitute(&self, name: &str) -> String {
        substitute(self.source, name)
    }
}

pub(crate) fn substitute(source: &str, name: &str) -> String {
    source.replace(PLACEHOLDER, name)
}
