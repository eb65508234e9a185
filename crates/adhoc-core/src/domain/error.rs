// ============================================================================
// domain/error.rs - COMPONENT ERROR DOMAIN
// ============================================================================

use std::sync::Arc;
use thiserror::Error;

/// Error raised by a caller-supplied customizer.
///
/// Customizers are plugin code, so their failures are opaque to the domain.
pub type CustomizeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (customizer failures are shared behind an `Arc`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Cannot add variant '{name}' as a variant with the same name is already registered")]
    DuplicateVariant { name: String },

    // ========================================================================
    // Propagated failures
    // ========================================================================
    /// A customizer failed while its variant was being materialized.
    ///
    /// The customizer's own error is kept as the [`std::error::Error::source`].
    #[error("Customization of variant '{variant}' failed: {source}")]
    CustomizationFailed {
        variant: String,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl DomainError {
    pub(crate) fn customization(variant: impl Into<String>, source: CustomizeError) -> Self {
        Self::CustomizationFailed {
            variant: variant.into(),
            source: Arc::from(source),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { field, .. } => vec![
                format!("Provide a non-empty {}", field),
                "Names are used verbatim in published metadata".into(),
            ],
            Self::DuplicateVariant { name } => vec![
                format!("Two variants of one configuration publish as '{}'", name),
                "Rename one of them or skip it in the customizer".into(),
            ],
            Self::CustomizationFailed { variant, .. } => vec![
                format!("The customizer for '{}' returned an error", variant),
                "Fix the plugin code that configures this variant".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::DuplicateVariant { .. } => ErrorCategory::Conflict,
            Self::CustomizationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}
