use crate::domain::{
    entities::{SoftwareComponent, UsageSet},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Reject blank identifiers.
    pub fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidArgument {
                field,
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Materialize a component's usages, checking that every variant resolves.
    pub fn validate_component(component: &SoftwareComponent) -> Result<UsageSet, DomainError> {
        Self::validate_name("component name", component.name())?;
        component.usages()
    }
}
