//! Usage contexts: immutable descriptions of published variants.
//!
//! A [`UsageContext`] is produced fresh on every query and handed to the
//! caller by value. [`UsageSet`] collects them with set semantics. Two
//! contexts are the same entry when they are equal in every field, regardless
//! of which binding produced them. Insertion order is kept so output stays
//! deterministic.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Artifact, Attributes, Capability, Dependency, DependencyConstraint, Scope,
};

/// One fully materialized, publishable variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageContext {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) artifacts: Vec<Artifact>,
    pub(crate) dependencies: Vec<Dependency>,
    pub(crate) dependency_constraints: Vec<DependencyConstraint>,
    pub(crate) capabilities: Vec<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) scope: Option<Scope>,
    #[serde(default)]
    pub(crate) optional: bool,
}

impl UsageContext {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn dependency_constraints(&self) -> &[DependencyConstraint] {
        &self.dependency_constraints
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.attributes.is_empty() {
            let attrs: Vec<String> = self
                .attributes
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, " [{}]", attrs.join(", "))?;
        }
        Ok(())
    }
}

// ── UsageSet ──────────────────────────────────────────────────────────────────

/// Duplicate-free, insertion-ordered collection of usage contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageSet {
    contexts: IndexSet<UsageContext>,
}

impl UsageSet {
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn contains(&self, context: &UsageContext) -> bool {
        self.contexts.contains(context)
    }

    /// First context published under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&UsageContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(UsageContext::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsageContext> {
        self.contexts.iter()
    }
}

impl IntoIterator for UsageSet {
    type Item = UsageContext;
    type IntoIter = indexmap::set::IntoIter<UsageContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.contexts.into_iter()
    }
}

impl<'a> IntoIterator for &'a UsageSet {
    type Item = &'a UsageContext;
    type IntoIter = indexmap::set::Iter<'a, UsageContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.contexts.iter()
    }
}

/// Accumulates contexts during one materialization pass.
///
/// Only [`UsageSetBuilder::build`] hands a set to the caller, so a failed
/// pass never leaks partial results.
#[derive(Debug, Default)]
pub struct UsageSetBuilder {
    contexts: IndexSet<UsageContext>,
}

impl UsageSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a context. Returns `false` when an equal context was already present.
    pub fn add(&mut self, context: UsageContext) -> bool {
        self.contexts.insert(context)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn build(self) -> UsageSet {
        UsageSet {
            contexts: self.contexts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(name: &str) -> UsageContext {
        UsageContext {
            name: name.into(),
            attributes: Attributes::from([("usage".to_string(), "java-api".to_string())]),
            artifacts: vec![Artifact::new("lib", "jar")],
            dependencies: Vec::new(),
            dependency_constraints: Vec::new(),
            capabilities: Vec::new(),
            scope: None,
            optional: false,
        }
    }

    #[test]
    fn builder_deduplicates_equal_contexts() {
        let mut builder = UsageSetBuilder::new();
        assert!(builder.add(context("jar")));
        assert!(!builder.add(context("jar")));
        assert!(builder.add(context("sources")));

        let set = builder.build();
        assert_eq!(set.len(), 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["jar", "sources"]);
    }

    #[test]
    fn contexts_differing_only_in_hints_are_distinct() {
        let mut optional = context("jar");
        optional.optional = true;

        let mut builder = UsageSetBuilder::new();
        builder.add(context("jar"));
        builder.add(optional);

        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn display_lists_attributes() {
        assert_eq!(context("jar").to_string(), "jar [usage=java-api]");
    }

    #[test]
    fn get_finds_by_name() {
        let mut builder = UsageSetBuilder::new();
        builder.add(context("jar"));
        let set = builder.build();

        assert_eq!(set.get("jar").and_then(|c| c.attribute("usage")), Some("java-api"));
        assert!(set.get("missing").is_none());
    }
}
