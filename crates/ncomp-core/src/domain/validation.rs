use crate::domain::{
    entities::{ComponentRequest, Template},
    error::DomainError,
    value_objects::{ComponentType, LanguageFlavor},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ComponentRequest) -> Result<(), DomainError> {
        request.validate()
    }

    /// A looked-up template must belong to the requested key.
    pub fn validate_template(
        template: &Template,
        component_type: ComponentType,
        flavor: LanguageFlavor,
    ) -> Result<(), DomainError> {
        if template.key.component_type != component_type || template.key.flavor != flavor {
            return Err(DomainError::TemplateNotFound {
                component_type,
                flavor,
            });
        }
        Ok(())
    }
}
