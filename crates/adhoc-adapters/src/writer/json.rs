//! Module-metadata style JSON writer.
//!
//! The document mirrors the shape consumers of published metadata expect:
//!
//! ```json
//! {
//!   "formatVersion": "1.1",
//!   "component": { "name": "java" },
//!   "createdBy": { "adhoc": { "version": "0.1.0", "buildId": "…" } },
//!   "ecosystems": [ { "name": "java" } ],
//!   "variants": [
//!     {
//!       "name": "apiElements",
//!       "attributes": { "usage": "java-api" },
//!       "dependencies": [ { "group": "g", "module": "m", "version": { "requires": "1.0" } } ],
//!       "files": [ { "name": "lib.jar", "url": "lib.jar" } ]
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use adhoc_core::{
    application::{ApplicationError, Publication, ports::MetadataWriter},
    domain::{Coordinates, Ecosystem, Scope, UsageContext},
    error::AdhocResult,
};
use serde::Serialize;
use tracing::instrument;

/// JSON metadata writer, pretty-printed or compact.
#[derive(Debug, Clone, Copy)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Indented output, for humans and diffs.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, for pipes.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::pretty()
    }
}

impl MetadataWriter for JsonWriter {
    fn format(&self) -> &'static str {
        "json"
    }

    #[instrument(skip_all, fields(component = %publication.component))]
    fn write(&self, publication: &Publication) -> AdhocResult<String> {
        let document = ModuleDocument::from(publication);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| {
            ApplicationError::WriterFailed {
                format: "json",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

// ── Document model ────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleDocument<'a> {
    format_version: &'static str,
    component: ComponentRef<'a>,
    created_by: BTreeMap<&'static str, CreatedBy>,
    ecosystems: &'a [Ecosystem],
    variants: Vec<VariantEntry<'a>>,
}

#[derive(Serialize)]
struct ComponentRef<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBy {
    version: &'static str,
    build_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantEntry<'a> {
    name: &'a str,
    attributes: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<ModuleRef<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependency_constraints: Vec<ModuleRef<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<FileEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capabilities: Vec<CapabilityEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<Scope>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    optional: bool,
}

#[derive(Serialize)]
struct ModuleRef<'a> {
    group: &'a str,
    module: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<VersionConstraint<'a>>,
}

#[derive(Serialize)]
struct VersionConstraint<'a> {
    requires: &'a str,
}

#[derive(Serialize)]
struct FileEntry {
    name: String,
    url: String,
}

#[derive(Serialize)]
struct CapabilityEntry<'a> {
    group: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

impl<'a> From<&'a Publication> for ModuleDocument<'a> {
    fn from(publication: &'a Publication) -> Self {
        Self {
            format_version: publication.format_version,
            component: ComponentRef {
                name: &publication.component,
            },
            created_by: BTreeMap::from([(
                "adhoc",
                CreatedBy {
                    version: adhoc_core::VERSION,
                    build_id: publication.build_id.to_string(),
                },
            )]),
            ecosystems: &publication.ecosystems,
            variants: publication.usages.iter().map(VariantEntry::from).collect(),
        }
    }
}

impl<'a> From<&'a UsageContext> for VariantEntry<'a> {
    fn from(usage: &'a UsageContext) -> Self {
        Self {
            name: usage.name(),
            attributes: usage.attributes(),
            dependencies: usage.dependencies().iter().map(ModuleRef::from).collect(),
            dependency_constraints: usage
                .dependency_constraints()
                .iter()
                .map(ModuleRef::from)
                .collect(),
            files: usage
                .artifacts()
                .iter()
                .map(|a| FileEntry {
                    name: a.file_name(),
                    url: a.file_name(),
                })
                .collect(),
            capabilities: usage
                .capabilities()
                .iter()
                .map(|c| CapabilityEntry {
                    group: &c.group,
                    name: &c.name,
                    version: c.version.as_deref(),
                })
                .collect(),
            scope: usage.scope(),
            optional: usage.is_optional(),
        }
    }
}

impl<'a> From<&'a Coordinates> for ModuleRef<'a> {
    fn from(coordinates: &'a Coordinates) -> Self {
        Self {
            group: &coordinates.group,
            module: &coordinates.name,
            version: coordinates
                .version
                .as_deref()
                .map(|requires| VersionConstraint { requires }),
        }
    }
}
