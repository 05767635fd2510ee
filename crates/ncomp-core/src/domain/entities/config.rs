use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ComponentType, LanguageFlavor};
use crate::error::{NcompError, NcompResult};

/// Layout rules handed to the code formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatRules {
    /// Spaces per indentation level (ignored with `use_tabs`).
    pub indent_width: usize,
    pub use_tabs: bool,
    /// Quote module specifiers with `'` instead of `"`.
    pub single_quote: bool,
    /// Keep statement-terminating semicolons.
    pub semicolons: bool,
}

impl FormatRules {
    /// Accepted `indent_width` values, checked even with `use_tabs`.
    pub const INDENT_WIDTHS: RangeInclusive<usize> = 1..=16;

    /// Rejects rules the formatter cannot honour.
    pub fn validate(&self) -> NcompResult<()> {
        if !Self::INDENT_WIDTHS.contains(&self.indent_width) {
            return Err(NcompError::Configuration {
                message: format!(
                    "indent_width must be between {} and {}, got {}",
                    Self::INDENT_WIDTHS.start(),
                    Self::INDENT_WIDTHS.end(),
                    self.indent_width
                ),
            });
        }
        Ok(())
    }
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
            single_quote: true,
            semicolons: true,
        }
    }
}

/// Configuration in effect for one invocation.
///
/// Produced once by merging override layers over [`EffectiveConfig::default`]
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectiveConfig {
    /// Component type used when `--type` is not given.
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Typed flavor used when `--typescript` is not given.
    pub typescript: bool,
    pub format: FormatRules,
}

impl EffectiveConfig {
    pub fn flavor(&self) -> LanguageFlavor {
        LanguageFlavor::from_typescript(self.typescript)
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            component_type: ComponentType::Class,
            typescript: false,
            format: FormatRules::default(),
        }
    }
}
