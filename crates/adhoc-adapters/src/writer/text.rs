//! Human-readable publication summary.

use std::fmt::Write as _;

use adhoc_core::{
    application::{ApplicationError, Publication, ports::MetadataWriter},
    domain::UsageContext,
    error::AdhocResult,
};

/// Plain-text writer, one indented block per published variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataWriter for TextWriter {
    fn format(&self) -> &'static str {
        "text"
    }

    fn write(&self, publication: &Publication) -> AdhocResult<String> {
        render(publication).map_err(|e| {
            ApplicationError::WriterFailed {
                format: "text",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn render(publication: &Publication) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Component: {}", publication.component)?;
    writeln!(out, "Build:     {}", publication.build_id)?;

    let origin = if publication.explicit_ecosystems {
        "explicit"
    } else {
        "default"
    };
    let ecosystems: Vec<String> = publication
        .ecosystems
        .iter()
        .map(ToString::to_string)
        .collect();
    if ecosystems.is_empty() {
        writeln!(out, "Ecosystems ({origin}): none")?;
    } else {
        writeln!(out, "Ecosystems ({origin}): {}", ecosystems.join(", "))?;
    }

    if publication.usages.is_empty() {
        writeln!(out, "Variants: none")?;
        return Ok(out);
    }

    writeln!(out, "Variants ({}):", publication.usages.len())?;
    for usage in &publication.usages {
        render_usage(&mut out, usage)?;
    }
    Ok(out)
}

fn render_usage(out: &mut String, usage: &UsageContext) -> std::fmt::Result {
    write!(out, "  - {}", usage.name())?;
    let mut hints = Vec::new();
    if let Some(scope) = usage.scope() {
        hints.push(scope.to_string());
    }
    if usage.is_optional() {
        hints.push("optional".to_string());
    }
    if !hints.is_empty() {
        write!(out, " ({})", hints.join(", "))?;
    }
    writeln!(out)?;

    for (key, value) in usage.attributes() {
        writeln!(out, "      {key} = {value}")?;
    }
    list(out, "artifacts", usage.artifacts())?;
    list(out, "dependencies", usage.dependencies())?;
    list(out, "constraints", usage.dependency_constraints())?;
    list(out, "capabilities", usage.capabilities())
}

fn list<T: std::fmt::Display>(out: &mut String, label: &str, items: &[T]) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    writeln!(out, "      {label}: {}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhoc_core::prelude::*;
    use std::sync::Arc;

    fn service() -> PublicationService {
        let factory = ComponentFactory::new(Arc::new(|| vec![Ecosystem::new("java", None).unwrap()]));

        let mut native = factory.adhoc("native").unwrap();
        native
            .register_ecosystem("native", Some("Native ecosystem"))
            .unwrap();
        native.add_variant(
            Arc::new(
                OutgoingConfiguration::builder("linkElements")
                    .attribute("usage", "native-link")
                    .artifact(Artifact::new("libfoo", "so"))
                    .build(),
            ),
            |details| {
                details.map_to_scope(Scope::Runtime);
                details.map_to_optional();
                Ok(())
            },
        );

        let mut service = PublicationService::new();
        service.register(native).unwrap();
        service.register(factory.adhoc("api").unwrap()).unwrap();
        service
    }

    #[test]
    fn summary_lists_variants_with_hints() {
        let text = service().render("native", &TextWriter::new()).unwrap();

        assert!(text.contains("Component: native"));
        assert!(text.contains("Ecosystems (explicit): native (Native ecosystem)"));
        assert!(text.contains("  - linkElements (runtime, optional)"));
        assert!(text.contains("      usage = native-link"));
        assert!(text.contains("      artifacts: libfoo.so"));
    }

    #[test]
    fn empty_component_says_so() {
        let text = service().render("api", &TextWriter::new()).unwrap();

        assert!(text.contains("Ecosystems (default): java"));
        assert!(text.contains("Variants: none"));
    }
}
