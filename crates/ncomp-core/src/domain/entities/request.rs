use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{ComponentType, LanguageFlavor},
};

/// A request to scaffold one component.
///
/// Built once from CLI input and the effective configuration. Holds no I/O
/// state; [`ComponentRequest::validate`] only checks the rules that need no
/// filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    name: String,
    target_directory: PathBuf,
    component_type: ComponentType,
    flavor: LanguageFlavor,
}

impl ComponentRequest {
    pub fn new(
        name: impl Into<String>,
        target_directory: impl Into<PathBuf>,
        component_type: ComponentType,
        flavor: LanguageFlavor,
    ) -> Self {
        Self {
            name: name.into(),
            target_directory: target_directory.into(),
            component_type,
            flavor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the component directory is created in.
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn flavor(&self) -> LanguageFlavor {
        self.flavor
    }

    /// `<target_directory>/<name>`
    pub fn component_dir(&self) -> PathBuf {
        self.target_directory.join(&self.name)
    }

    /// `<target_directory>/<name>/<name>.<ext>`
    pub fn component_file(&self) -> PathBuf {
        self.component_dir().join(format!(
            "{}.{}",
            self.name,
            self.flavor.component_extension()
        ))
    }

    /// `<target_directory>/<name>/index.<ext>`
    pub fn index_file(&self) -> PathBuf {
        self.component_dir()
            .join(format!("index.{}", self.flavor.index_extension()))
    }

    /// Pure checks, in order: the name is present, then the type is
    /// available for the flavor.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }

        if !self.flavor.supports(self.component_type) {
            return Err(DomainError::UnsupportedCombination {
                component_type: self.component_type,
                flavor: self.flavor,
            });
        }

        Ok(())
    }
}
