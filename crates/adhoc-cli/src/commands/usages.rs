//! `adhoc usages`: list the usages each component publishes.

use serde::Serialize;

use adhoc_core::domain::{UsageContext, UsageSet};

use crate::{
    cli::{OutputFormat, TargetArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct ComponentUsages<'a> {
    component: &'a str,
    usages: &'a UsageSet,
}

pub fn execute(args: TargetArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = super::load_service(&args.build, config)?;
    let publications = super::publications(&service, args.component.as_deref())?;

    if output.format() == OutputFormat::Json {
        let listing: Vec<ComponentUsages<'_>> = publications
            .iter()
            .map(|p| ComponentUsages {
                component: &p.component,
                usages: &p.usages,
            })
            .collect();
        output.emit(&serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    for publication in &publications {
        output.header(&format!(
            "{} ({} usages)",
            publication.component,
            publication.usages.len()
        ))?;
        if publication.usages.is_empty() {
            output.info("no published variants")?;
            continue;
        }
        for usage in &publication.usages {
            output.print(&format!("  {usage}{}", hints(usage, output)))?;
        }
    }
    Ok(())
}

fn hints(usage: &UsageContext, output: &OutputManager) -> String {
    let mut hints = Vec::new();
    if let Some(scope) = usage.scope() {
        hints.push(scope.to_string());
    }
    if usage.is_optional() {
        hints.push("optional".to_string());
    }
    if hints.is_empty() {
        String::new()
    } else {
        format!(" {}", output.dim(&format!("({})", hints.join(", "))))
    }
}
