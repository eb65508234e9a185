//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No component is registered under this name.
    #[error("Component not found: {name}")]
    ComponentNotFound { name: String },

    /// A component with this name is already registered.
    #[error("Component '{name}' is already registered")]
    DuplicateComponent { name: String },

    /// A metadata writer could not render a publication.
    #[error("Metadata writer '{format}' failed: {reason}")]
    WriterFailed { format: &'static str, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ComponentNotFound { name } => vec![
                format!("No component named '{}' was declared", name),
                "Try: adhoc usages <BUILD> to list declared components".into(),
            ],
            Self::DuplicateComponent { name } => vec![
                format!("'{}' is declared more than once", name),
                "Component names must be unique within a build".into(),
            ],
            Self::WriterFailed { format, .. } => vec![
                format!("The {} writer could not render the publication", format),
                "Try a different --format".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ComponentNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateComponent { .. } => ErrorCategory::Conflict,
            Self::WriterFailed { .. } => ErrorCategory::Internal,
        }
    }
}
