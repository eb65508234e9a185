//! In-memory attribute schema holding a build unit's consumer ecosystems.

use std::sync::{Arc, RwLock};

use adhoc_core::{
    application::ports::EcosystemSource,
    domain::Ecosystem,
    error::AdhocResult,
};
use tracing::debug;

/// Thread-safe in-memory schema.
///
/// Clones share state, so a clone handed to a
/// [`ComponentFactory`](adhoc_core::application::ComponentFactory) keeps
/// seeing ecosystems declared later through any other clone.
#[derive(Clone, Default)]
pub struct InMemorySchema {
    inner: Arc<RwLock<Vec<Ecosystem>>>,
}

impl InMemorySchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema pre-populated with `ecosystems`.
    pub fn with_ecosystems(ecosystems: impl IntoIterator<Item = Ecosystem>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ecosystems.into_iter().collect())),
        }
    }

    /// Declare a consumer ecosystem.
    pub fn declare(&self, name: &str, description: Option<&str>) -> AdhocResult<()> {
        let ecosystem = Ecosystem::new(name, description)?;
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        debug!(ecosystem = %ecosystem, "Ecosystem declared on schema");
        inner.push(ecosystem);
        Ok(())
    }

    /// Get the number of declared ecosystems.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if schema is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EcosystemSource for InMemorySchema {
    fn default_ecosystems(&self) -> Vec<Ecosystem> {
        self.inner
            .read()
            .map(|inner| inner.clone())
            .unwrap_or_default()
    }
}

fn poisoned() -> adhoc_core::error::AdhocError {
    adhoc_core::error::AdhocError::Internal {
        message: "ecosystem schema lock poisoned".into(),
    }
}

impl std::fmt::Debug for InMemorySchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySchema")
            .field("ecosystems", &self.default_ecosystems())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhoc_core::application::ComponentFactory;

    #[test]
    fn declared_ecosystems_are_defaults() {
        let schema = InMemorySchema::new();
        schema.declare("java", Some("Java ecosystem")).unwrap();
        schema.declare("native", None).unwrap();

        let defaults = schema.default_ecosystems();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].description(), Some("Java ecosystem"));
    }

    #[test]
    fn blank_declaration_is_rejected() {
        let schema = InMemorySchema::new();
        assert!(schema.declare("", None).is_err());
        assert!(schema.is_empty());
    }

    #[test]
    fn components_see_later_declarations() {
        let schema = InMemorySchema::new();
        let factory = ComponentFactory::new(Arc::new(schema.clone()));
        let component = factory.adhoc("lib").unwrap();

        assert!(component.ecosystems().is_empty());
        schema.declare("swift", None).unwrap();
        assert_eq!(component.ecosystems()[0].name(), "swift");
    }
}
