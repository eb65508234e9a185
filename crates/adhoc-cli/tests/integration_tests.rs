//! Integration tests for adhoc-cli.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const BUILD: &str = r#"
[[configurations]]
name = "apiElements"
attributes = { usage = "java-api" }
artifacts = [{ name = "lib", extension = "jar" }]
dependencies = ["org.example:core:1.0"]

[[configurations]]
name = "runtimeElements"
attributes = { usage = "java-runtime" }
artifacts = [{ name = "lib", extension = "jar" }]

[[configurations.variants]]
name = "classes"
attributes = { libraryelements = "classes" }

[[configurations]]
name = "linkElements"
attributes = { usage = "native-link" }
artifacts = [{ name = "libfoo", extension = "so" }]

[[components]]
name = "java"

[[components.variants]]
configuration = "apiElements"
scope = "compile"

[[components.variants]]
configuration = "runtimeElements"
scope = "runtime"

[[components]]
name = "native"
ecosystems = [{ name = "native", description = "Native ecosystem" }, { name = "java" }]

[[components.variants]]
configuration = "linkElements"
optional = true
"#;

/// A build file plus an empty config file, isolated from the user's setup.
struct Workspace {
    _dir: TempDir,
    build: PathBuf,
    config: PathBuf,
}

impl Workspace {
    fn new(build: &str) -> Self {
        Self::with_config(build, "")
    }

    fn with_config(build: &str, config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let build_path = dir.path().join("build.toml");
        let config_path = dir.path().join("adhoc.toml");
        fs::write(&build_path, build).unwrap();
        fs::write(&config_path, config).unwrap();
        Self {
            _dir: dir,
            build: build_path,
            config: config_path,
        }
    }

    fn cmd(&self, args: &[&str]) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("adhoc");
        cmd.env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--no-color")
            .arg("-c")
            .arg(&self.config)
            .args(args.iter().take(1))
            .arg(&self.build)
            .args(args.iter().skip(1));
        cmd
    }
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    cargo_bin_cmd!("adhoc")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("usages"))
        .stdout(predicate::str::contains("ecosystems"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn version_flag() {
    cargo_bin_cmd!("adhoc")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cargo_bin_cmd!("adhoc").arg("frobnicate").assert().code(2);
}

// ── usages ────────────────────────────────────────────────────────────────────

#[test]
fn usages_lists_every_component() {
    let ws = Workspace::new(BUILD);

    ws.cmd(&["usages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("java (3 usages)"))
        .stdout(predicate::str::contains("apiElements [usage=java-api] (compile)"))
        .stdout(predicate::str::contains("runtimeElementsClasses"))
        .stdout(predicate::str::contains("linkElements [usage=native-link] (optional)"));
}

#[test]
fn usages_for_one_component_as_json() {
    let ws = Workspace::new(BUILD);

    let output = ws
        .cmd(&["usages", "-C", "native", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["component"], "native");
    assert_eq!(json[0]["usages"][0]["name"], "linkElements");
    assert_eq!(json[0]["usages"][0]["optional"], true);
}

#[test]
fn component_without_variants_says_so() {
    let ws = Workspace::new("[[components]]\nname = \"api\"\n");

    ws.cmd(&["usages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api (0 usages)"))
        .stdout(predicate::str::contains("no published variants"));
}

// ── ecosystems ────────────────────────────────────────────────────────────────

#[test]
fn ecosystems_distinguish_explicit_from_default() {
    let ws = Workspace::new(BUILD);

    ws.cmd(&["ecosystems"])
        .assert()
        .success()
        .stdout(predicate::str::contains("java (default)"))
        .stdout(predicate::str::contains("  rust"))
        .stdout(predicate::str::contains("native (explicit)"))
        .stdout(predicate::str::contains("  native (Native ecosystem)"));
}

#[test]
fn configured_schema_supplies_the_defaults() {
    let ws = Workspace::with_config(
        BUILD,
        "[schema]\necosystems = [{ name = \"jvm\", description = \"JVM\" }]\n",
    );

    let output = ws
        .cmd(&["ecosystems", "-C", "java", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["explicit"], false);
    assert_eq!(json[0]["ecosystems"][0]["name"], "jvm");
    assert_eq!(json[0]["ecosystems"][0]["description"], "JVM");
}

#[test]
fn empty_schema_warns() {
    let ws = Workspace::with_config(BUILD, "[schema]\necosystems = []\n");

    ws.cmd(&["ecosystems", "-C", "java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no ecosystems declared"));
}

#[test]
fn ecosystems_list_even_when_a_customizer_fails() {
    let ws = Workspace::new(
        r#"
[[ecosystems]]
name = "java"

[[configurations]]
name = "docs"

[[components]]
name = "broken"
[[components.variants]]
configuration = "docs"
fail = "javadoc tool missing"
"#,
    );

    ws.cmd(&["ecosystems"])
        .assert()
        .success()
        .stdout(predicate::str::contains("broken (default)"))
        .stdout(predicate::str::contains("  java"))
        .stderr(predicate::str::contains("javadoc tool missing").not());

    ws.cmd(&["usages"]).assert().code(1);
}

// ── publish ───────────────────────────────────────────────────────────────────

#[test]
fn publish_renders_module_metadata() {
    let ws = Workspace::new(BUILD);

    let output = ws.cmd(&["publish", "-C", "java"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["formatVersion"], "1.1");
    assert_eq!(json["component"]["name"], "java");
    assert_eq!(json["variants"].as_array().unwrap().len(), 3);
    assert_eq!(json["variants"][0]["dependencies"][0]["module"], "core");
}

#[test]
fn compact_publish_emits_one_document_per_component() {
    let ws = Workspace::new(BUILD);

    let output = ws.cmd(&["publish", "--format", "compact"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let documents: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["component"]["name"], "java");
    assert_eq!(documents[1]["component"]["name"], "native");
}

#[test]
fn publish_format_falls_back_to_config() {
    let ws = Workspace::with_config(BUILD, "[output]\npublish_format = \"text\"\n");

    ws.cmd(&["publish", "-C", "native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component: native"))
        .stdout(predicate::str::contains("  - linkElements (optional)"));
}

#[test]
fn quiet_still_emits_metadata() {
    let ws = Workspace::new(BUILD);

    ws.cmd(&["publish", "-C", "java", "-q", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component: java"));
}

// ── errors ────────────────────────────────────────────────────────────────────

#[test]
fn missing_build_file_exits_3() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("adhoc")
        .env_remove("NO_COLOR")
        .arg("--no-color")
        .arg("usages")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Build file not found"));
}

#[test]
fn unknown_component_exits_3() {
    let ws = Workspace::new(BUILD);

    ws.cmd(&["usages", "-C", "kotlin"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("kotlin"));
}

#[test]
fn unknown_configuration_reference_exits_4() {
    let ws = Workspace::new(
        "[[components]]\nname = \"java\"\n[[components.variants]]\nconfiguration = \"nope\"\n",
    );

    ws.cmd(&["usages"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown configuration 'nope'"));
}

#[test]
fn blank_component_name_is_a_user_error() {
    let ws = Workspace::new("[[components]]\nname = \"\"\n");

    ws.cmd(&["usages"]).assert().code(2);
}

#[test]
fn failing_customizer_fails_publication() {
    let ws = Workspace::new(
        r#"
[[configurations]]
name = "docs"

[[components]]
name = "java"
[[components.variants]]
configuration = "docs"
fail = "javadoc tool missing"
"#,
    );

    ws.cmd(&["publish", "-v"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("javadoc tool missing"));
}

#[test]
fn missing_explicit_config_exits_4() {
    let ws = Workspace::new(BUILD);

    cargo_bin_cmd!("adhoc")
        .env_remove("NO_COLOR")
        .args(["--no-color", "-c"])
        .arg(ws.build.with_file_name("nope.toml"))
        .arg("usages")
        .arg(&ws.build)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── config / completions ──────────────────────────────────────────────────────

#[test]
fn config_list_reflects_environment_overrides() {
    let ws = Workspace::new(BUILD);

    cargo_bin_cmd!("adhoc")
        .env_remove("NO_COLOR")
        .env("ADHOC_OUTPUT__PUBLISH_FORMAT", "text")
        .args(["--no-color", "-c"])
        .arg(&ws.config)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("publish_format = \"text\""))
        .stdout(predicate::str::contains("name = \"rust\""));
}

#[test]
fn config_path_prints_a_toml_path() {
    cargo_bin_cmd!("adhoc")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".toml"));
}

#[test]
fn completions_for_bash() {
    cargo_bin_cmd!("adhoc")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adhoc"));
}
