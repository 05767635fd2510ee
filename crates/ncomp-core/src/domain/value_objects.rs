//! Domain value objects: ComponentType and LanguageFlavor.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file defines the types, their string representations, and their
//! `FromStr` parsers. Which combinations are allowed lives in
//! [`LanguageFlavor::supports`].

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ComponentType ─────────────────────────────────────────────────────────────

/// The shape of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Class,
    PureClass,
    Functional,
    FunctionalWithProps,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        Self::Class,
        Self::PureClass,
        Self::Functional,
        Self::FunctionalWithProps,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::PureClass => "pure-class",
            Self::Functional => "functional",
            Self::FunctionalWithProps => "functional-with-props",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "pure-class" => Ok(Self::PureClass),
            "functional" | "fn" => Ok(Self::Functional),
            "functional-with-props" | "fnp" => Ok(Self::FunctionalWithProps),
            other => Err(DomainError::UnknownComponentType {
                value: other.to_string(),
            }),
        }
    }
}

// ── LanguageFlavor ────────────────────────────────────────────────────────────

/// Whether generated files use plain script or typed-script syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageFlavor {
    #[default]
    Script,
    TypedScript,
}

impl LanguageFlavor {
    pub const ALL: [LanguageFlavor; 2] = [Self::Script, Self::TypedScript];

    /// Map the `--typescript` switch onto a flavor.
    pub const fn from_typescript(typescript: bool) -> Self {
        if typescript {
            Self::TypedScript
        } else {
            Self::Script
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::TypedScript => "typed-script",
        }
    }

    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::TypedScript)
    }

    /// Extension of the rendered component file.
    pub const fn component_extension(&self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::TypedScript => "tsx",
        }
    }

    /// Extension of the re-exporting index file.
    pub const fn index_extension(&self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::TypedScript => "ts",
        }
    }

    /// Whether a template of this component type exists for the flavor.
    ///
    /// The typed flavor has no pure-class or props-taking functional variant.
    pub const fn supports(self, component_type: ComponentType) -> bool {
        match self {
            Self::Script => true,
            Self::TypedScript => matches!(
                component_type,
                ComponentType::Class | ComponentType::Functional
            ),
        }
    }
}

impl fmt::Display for LanguageFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageFlavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "script" | "js" | "javascript" => Ok(Self::Script),
            "typed-script" | "ts" | "typescript" => Ok(Self::TypedScript),
            other => Err(DomainError::UnknownFlavor {
                value: other.to_string(),
            }),
        }
    }
}
