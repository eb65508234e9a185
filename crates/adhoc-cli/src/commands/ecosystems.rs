//! `adhoc ecosystems`: list each component's resolved ecosystems.
//!
//! Ecosystems are resolved on the component directly. Usages are never
//! materialized here, so a broken customizer does not hide the listing.

use serde::Serialize;

use adhoc_core::domain::Ecosystem;

use crate::{
    cli::{OutputFormat, TargetArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct ComponentEcosystems<'a> {
    component: &'a str,
    explicit: bool,
    ecosystems: Vec<Ecosystem>,
}

pub fn execute(args: TargetArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = super::load_service(&args.build, config)?;
    let listing: Vec<ComponentEcosystems<'_>> =
        super::components(&service, args.component.as_deref())?
            .into_iter()
            .map(|component| ComponentEcosystems {
                component: component.name(),
                explicit: component.has_explicit_ecosystems(),
                ecosystems: component.ecosystems(),
            })
            .collect();

    if output.format() == OutputFormat::Json {
        output.emit(&serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    for entry in &listing {
        let origin = if entry.explicit {
            "(explicit)"
        } else {
            "(default)"
        };
        output.header(&format!("{} {}", entry.component, output.dim(origin)))?;

        if entry.ecosystems.is_empty() {
            output.warning("no ecosystems declared")?;
            continue;
        }
        for ecosystem in &entry.ecosystems {
            output.print(&format!("  {ecosystem}"))?;
        }
    }
    Ok(())
}
