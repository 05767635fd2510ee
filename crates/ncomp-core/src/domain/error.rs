use thiserror::Error;

use crate::domain::value_objects::{ComponentType, LanguageFlavor};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("no component name was given")]
    MissingName,

    #[error("unknown component type '{value}'")]
    UnknownComponentType { value: String },

    #[error("unknown language flavor '{value}'")]
    UnknownFlavor { value: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("{component_type} components are not available for {flavor}")]
    UnsupportedCombination {
        component_type: ComponentType,
        flavor: LanguageFlavor,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("no template for {component_type} ({flavor})")]
    TemplateNotFound {
        component_type: ComponentType,
        flavor: LanguageFlavor,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Specify a name for your component like this: ncomp <name>".into(),
                "Example: ncomp Button --type functional".into(),
            ],
            Self::UnknownComponentType { value } => vec![
                format!("'{value}' is not a component type"),
                "Supported types: class, pure-class, functional (fn), functional-with-props (fnp)"
                    .into(),
            ],
            Self::UnknownFlavor { value } => vec![
                format!("'{value}' is not a language flavor"),
                "Supported flavors: script, typed-script".into(),
            ],
            Self::UnsupportedCombination { flavor, .. } => {
                let available: Vec<&str> = ComponentType::ALL
                    .iter()
                    .filter(|t| flavor.supports(**t))
                    .map(ComponentType::as_str)
                    .collect();
                vec![format!(
                    "Types available for {flavor}: {}",
                    available.join(", ")
                )]
            }
            Self::TemplateNotFound { .. } => vec![
                "The built-in template set is incomplete".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::UnknownComponentType { .. } | Self::UnknownFlavor { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedCombination { .. } => ErrorCategory::Compatibility,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
}
