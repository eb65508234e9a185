//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod ecosystems;
pub mod publish;
pub mod usages;

use std::path::Path;

use tracing::{debug, instrument};

use adhoc_adapters::{BuildFileLoader, InMemorySchema};
use adhoc_core::{
    application::{Publication, PublicationService},
    domain::SoftwareComponent,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Load `build` and wire its components against the configured schema.
#[instrument(skip(config), fields(build = %build.display()))]
fn load_service(build: &Path, config: &AppConfig) -> CliResult<PublicationService> {
    if !build.is_file() {
        return Err(CliError::BuildFileNotFound {
            path: build.to_path_buf(),
        });
    }

    let schema = InMemorySchema::with_ecosystems(config.default_ecosystems()?);
    let service = BuildFileLoader::new(build).load()?.into_service(&schema)?;

    debug!(components = service.len(), "Build loaded");
    Ok(service)
}

/// Publish one component, or every component in declaration order.
fn publications(
    service: &PublicationService,
    component: Option<&str>,
) -> CliResult<Vec<Publication>> {
    match component {
        Some(name) => Ok(vec![service.publish(name)?]),
        None => Ok(service.publish_all()?),
    }
}

/// Look up one component, or every component in declaration order, without
/// materializing any usages.
fn components<'a>(
    service: &'a PublicationService,
    component: Option<&str>,
) -> CliResult<Vec<&'a SoftwareComponent>> {
    match component {
        Some(name) => Ok(vec![service.component(name)?]),
        None => service
            .names()
            .map(|name| service.component(name).map_err(CliError::from))
            .collect(),
    }
}
