//! Renderer - placeholder substitution followed by a formatting pass.

use tracing::{debug, instrument};

use crate::{
    application::ports::CodeFormatter,
    domain::{FormatRules, LanguageFlavor, Template},
    error::NcompResult,
};

/// Turns templates into file contents.
///
/// Pure with respect to its inputs: the same template, name and rules
/// always produce the same text.
pub struct Renderer {
    formatter: Box<dyn CodeFormatter>,
    rules: FormatRules,
}

impl Renderer {
    pub fn new(formatter: Box<dyn CodeFormatter>, rules: FormatRules) -> Self {
        Self { formatter, rules }
    }

    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }

    /// Render a component template for `name`.
    #[instrument(skip_all, fields(template = %template.key.component_type, name = %name))]
    pub fn render(&self, template: &Template, name: &str) -> NcompResult<String> {
        let substituted = template.substitute(name);
        debug!(
            replaced = template.placeholder_count(),
            "placeholders substituted"
        );
        self.formatter.format(&substituted, &self.rules)
    }

    /// Render the one-line index file re-exporting the component.
    ///
    /// Typed output re-exports everything; plain script re-exports the
    /// named component.
    pub fn render_index(&self, name: &str, flavor: LanguageFlavor) -> NcompResult<String> {
        let line = index_source(name, flavor);
        self.formatter.format(&line, &self.rules)
    }
}

fn index_source(name: &str, flavor: LanguageFlavor) -> String {
    match flavor {
        LanguageFlavor::TypedScript => format!("export * from './{name}';\n"),
        LanguageFlavor::Script => format!("export {{ {name} }} from './{name}';\n"),
    }
}
