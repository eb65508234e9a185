//! End-to-end tests: build file on disk → publication service → writers.

use std::fs;

use adhoc_adapters::{BuildFileLoader, InMemorySchema, JsonWriter, TextWriter};
use adhoc_core::{application::ports::MetadataWriter, error::AdhocError};
use tempfile::TempDir;

const NATIVE_BUILD: &str = r#"
[[configurations]]
name = "linkElements"
attributes = { usage = "native-link" }
artifacts = [{ name = "libfoo", extension = "so" }]

[[configurations]]
name = "headers"
attributes = { usage = "cplusplus-api" }
artifacts = [{ name = "foo-headers", extension = "zip" }]

[[components]]
name = "native"
ecosystems = [
    { name = "native", description = "Native ecosystem" },
    { name = "java" },
]

[[components.variants]]
configuration = "linkElements"

[[components.variants]]
configuration = "headers"
scope = "compile"

[[components]]
name = "api"
"#;

fn write_build(contents: &str) -> (TempDir, BuildFileLoader) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.toml");
    fs::write(&path, contents).unwrap();
    (dir, BuildFileLoader::new(path))
}

#[test]
fn loads_build_file_from_disk() {
    let (_dir, loader) = write_build(NATIVE_BUILD);

    let build = loader.load().unwrap();

    assert_eq!(build.configurations.len(), 2);
    assert_eq!(build.components.len(), 2);
}

#[test]
fn missing_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let loader = BuildFileLoader::new(dir.path().join("nope.toml"));

    let err = loader.load().unwrap_err();
    assert!(matches!(err, AdhocError::Configuration { ref message } if message.contains("nope.toml")));
}

#[test]
fn explicit_and_default_ecosystems_per_component() {
    let (_dir, loader) = write_build(NATIVE_BUILD);
    let schema = InMemorySchema::new();
    schema.declare("java", None).unwrap();

    let service = loader.load().unwrap().into_service(&schema).unwrap();

    let native = service.publish("native").unwrap();
    let names: Vec<&str> = native.ecosystems.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["native", "java"]);
    assert!(native.explicit_ecosystems);

    let api = service.publish("api").unwrap();
    assert!(api.usages.is_empty());
    assert!(!api.explicit_ecosystems);
    assert_eq!(api.ecosystems.len(), 1);
}

#[test]
fn schema_declarations_after_loading_reach_components() {
    let (_dir, loader) = write_build(NATIVE_BUILD);
    let schema = InMemorySchema::new();
    let service = loader.load().unwrap().into_service(&schema).unwrap();

    assert!(service.publish("api").unwrap().ecosystems.is_empty());
    schema.declare("kotlin", None).unwrap();
    assert_eq!(service.publish("api").unwrap().ecosystems[0].name(), "kotlin");
}

#[test]
fn json_and_text_writers_render_loaded_components() {
    let (_dir, loader) = write_build(NATIVE_BUILD);
    let service = loader
        .load()
        .unwrap()
        .into_service(&InMemorySchema::new())
        .unwrap();

    let json = service.render("native", &JsonWriter::compact()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["variants"][0]["name"], "linkElements");
    assert_eq!(value["variants"][1]["scope"], "compile");
    assert_eq!(value["ecosystems"][0]["description"], "Native ecosystem");

    let text = service.render("native", &TextWriter::new()).unwrap();
    assert!(text.contains("  - headers (compile)"));
    assert_eq!(TextWriter::new().format(), "text");
}
