//! Template store backed by templates embedded at compile time.

use ncomp_core::{
    application::ports::TemplateStore,
    domain::{ComponentType, DomainError, LanguageFlavor, Template, TemplateKey},
    error::NcompResult,
};
use tracing::debug;

use ComponentType::{Class, Functional, FunctionalWithProps, PureClass};
use LanguageFlavor::{Script, TypedScript};

/// Every shipped template. The typed flavor has no pure-class or
/// props-taking functional variant.
static TEMPLATES: [Template; 6] = [
    Template::new(
        TemplateKey::new(Class, Script),
        include_str!("../../templates/js/class.js"),
    ),
    Template::new(
        TemplateKey::new(PureClass, Script),
        include_str!("../../templates/js/pure-class.js"),
    ),
    Template::new(
        TemplateKey::new(Functional, Script),
        include_str!("../../templates/js/functional.js"),
    ),
    Template::new(
        TemplateKey::new(FunctionalWithProps, Script),
        include_str!("../../templates/js/functional-with-props.js"),
    ),
    Template::new(
        TemplateKey::new(Class, TypedScript),
        include_str!("../../templates/ts/class.tsx"),
    ),
    Template::new(
        TemplateKey::new(Functional, TypedScript),
        include_str!("../../templates/ts/functional.tsx"),
    ),
];

/// Read-only store over the embedded template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        TEMPLATES.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        TEMPLATES.is_empty()
    }
}

impl TemplateStore for BuiltinStore {
    fn lookup(&self, component_type: ComponentType, flavor: LanguageFlavor) -> NcompResult<Template> {
        let key = TemplateKey::new(component_type, flavor);
        let template = TEMPLATES
            .iter()
            .find(|t| t.key == key)
            .cloned()
            .ok_or(DomainError::TemplateNotFound {
                component_type,
                flavor,
            })?;

        debug!(%component_type, %flavor, "template found");
        Ok(template)
    }

    fn list(&self) -> Vec<Template> {
        TEMPLATES.to_vec()
    }
}
