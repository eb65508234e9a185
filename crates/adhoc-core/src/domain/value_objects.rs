//! Domain value objects: Ecosystem, Artifact, Dependency, Capability, Scope.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. Usage contexts
//! are compared by full value, so everything reachable from a
//! [`UsageContext`](crate::domain::UsageContext) derives `Eq + Hash`.
//! Attribute maps are `BTreeMap`s for the same reason.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Attribute key to attribute value, ordered by key.
pub type Attributes = BTreeMap<String, String>;

// ── Ecosystem ─────────────────────────────────────────────────────────────────

/// A named domain/toolchain tag, e.g. `java` or `native`.
///
/// Downstream metadata writers use ecosystems to pick publication formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ecosystem {
    name: String,
    description: Option<String>,
}

impl Ecosystem {
    /// Create an ecosystem. The name must not be empty; any other string,
    /// whitespace included, is kept as given.
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidArgument {
                field: "ecosystem name",
                reason: "must not be empty".into(),
            });
        }
        Ok(Self {
            name,
            description: description.map(str::to_owned),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({description})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

// ── Artifact ──────────────────────────────────────────────────────────────────

/// A single published file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// File name as published: `name[-classifier].extension`.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!("{}-{classifier}.{}", self.name, self.extension),
            None => format!("{}.{}", self.name, self.extension),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

// ── Module coordinates ────────────────────────────────────────────────────────

/// A `group:name:version` reference used by dependencies, constraints and
/// capabilities alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub group: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coordinates {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.map(str::to_owned),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

impl FromStr for Coordinates {
    type Err = DomainError;

    /// Parse `group:name` or `group:name:version`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let invalid = || DomainError::InvalidArgument {
            field: "coordinates",
            reason: format!("expected 'group:name[:version]', got '{s}'"),
        };
        match parts.as_slice() {
            [group, name] if !group.is_empty() && !name.is_empty() => {
                Ok(Self::new(*group, *name, None))
            }
            [group, name, version] if !group.is_empty() && !name.is_empty() => {
                Ok(Self::new(*group, *name, Some(version).filter(|v| !v.is_empty()).copied()))
            }
            _ => Err(invalid()),
        }
    }
}

/// A dependency declared by an artifact set.
pub type Dependency = Coordinates;

/// A version constraint declared by an artifact set.
pub type DependencyConstraint = Coordinates;

/// A capability provided by a published variant.
pub type Capability = Coordinates;

// ── Scope ─────────────────────────────────────────────────────────────────────

/// Scope hint for writers that map variants onto scope-based formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Runtime,
}

impl Scope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compile" | "api" => Ok(Self::Compile),
            "runtime" => Ok(Self::Runtime),
            other => Err(DomainError::InvalidArgument {
                field: "scope",
                reason: format!("unknown scope: {other}"),
            }),
        }
    }
}
