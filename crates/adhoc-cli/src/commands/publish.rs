//! `adhoc publish`: render publication metadata through a writer.
//!
//! Every selected component is rendered separately, in declaration order.
//! With `--format compact` this yields one JSON document per line.

use tracing::info;

use adhoc_adapters::{JsonWriter, TextWriter};
use adhoc_core::application::ports::MetadataWriter;

use crate::{
    cli::{OutputFormat, PublishArgs, PublishFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PublishArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = super::load_service(&args.target.build, config)?;

    let format = args.format.unwrap_or(config.output.publish_format);
    let writer = writer_for(format);

    let names: Vec<String> = match args.target.component {
        Some(name) => vec![name],
        None => service.names().map(str::to_owned).collect(),
    };

    for name in &names {
        let rendered = service.render(name, writer.as_ref())?;
        output.emit(&rendered)?;
    }

    info!(count = names.len(), format = ?format, "Publications rendered");
    if output.format() == OutputFormat::Human {
        output.success(&format!("Rendered {} component(s)", names.len()))?;
    }
    Ok(())
}

fn writer_for(format: PublishFormat) -> Box<dyn MetadataWriter> {
    match format {
        PublishFormat::Json => Box::new(JsonWriter::pretty()),
        PublishFormat::Compact => Box::new(JsonWriter::compact()),
        PublishFormat::Text => Box::new(TextWriter::new()),
    }
}
