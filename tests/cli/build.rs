use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, catalog};

const CONFIG: &str = r#"
sources:
  - label: Core
    local: po/core
  - label: Docs
    local: po/docs
  - label: Missing
    local: po/missing
"#;

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("sources.yml", CONFIG)?;
    test.write_file(
        "po/core/app-fr.po",
        &catalog(&[
            ("Hello", "Bonjour", false),
            ("Bye", "Salut", true),
            ("Thanks", "", false),
        ]),
    )?;
    test.write_file(
        "po/core/app-de.po",
        &catalog(&[("Hello", "Hallo", false), ("Bye", "Tschüss", false)]),
    )?;
    test.write_file(
        "po/docs/guide/manual-fr.po",
        &catalog(&[("Intro", "", false)]),
    )?;
    Ok(test)
}

fn json_without_timestamp(content: &str) -> Result<Value> {
    let mut value: Value = serde_json::from_str(content)?;
    if let Some(object) = value.as_object_mut() {
        object.remove("generated_at");
    }
    Ok(value)
}

#[test]
fn test_build_writes_all_outputs() -> Result<()> {
    let test = setup()?;

    let output = test
        .build_command()
        .args(["--config", "sources.yml", "--output", "out"])
        .output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 3 records from 3 catalog files to out"));
    assert!(stdout.contains("warning: skipped source with a missing directory: Missing"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found, skipping source 'Missing'"));

    let csv = test.read_file("out/stats.csv")?.replace("\r\n", "\n");
    assert_snapshot!(csv.trim_end(), @r"
    source,file,language,translated,fuzzy,untranslated,total,pct_translated,pct_fuzzy,pct_untranslated
    Core,app,de,2,0,0,2,100.0,0.0,0.0
    Core,app,fr,1,1,1,3,33.3,33.3,33.3
    Docs,manual,fr,0,0,1,1,0.0,0.0,100.0
    ");

    let json: Value = serde_json::from_str(&test.read_file("out/stats.json")?)?;
    assert!(json["generated_at"].as_str().is_some_and(|s| s.ends_with(" UTC")));
    let records = json["records"].as_array().expect("records list");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1]["source"], "Core");
    assert_eq!(records[1]["file"], "app");
    assert_eq!(records[1]["language"], "fr");
    assert_eq!(records[1]["fuzzy"], 1);
    assert_eq!(records[1]["pct_translated"], 33.3);

    let html = test.read_file("out/index.html")?;
    assert!(html.contains(r#"<a href="stats.json" download>JSON</a>"#));
    assert!(html.contains(r#"<a href="stats.csv" download>CSV</a>"#));
    assert!(html.contains("<td>Docs</td>"));

    Ok(())
}

#[test]
fn test_build_is_repeatable() -> Result<()> {
    let test = setup()?;

    test.build_command()
        .args(["--config", "sources.yml", "--output", "out"])
        .output()?;
    let first = json_without_timestamp(&test.read_file("out/stats.json")?)?;

    test.build_command()
        .args(["--config", "sources.yml", "--output", "out"])
        .output()?;
    let second = json_without_timestamp(&test.read_file("out/stats.json")?)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_build_default_output_dir() -> Result<()> {
    let test = setup()?;

    let output = test
        .build_command()
        .args(["--config", "sources.yml", "--no-report"])
        .output()?;

    assert!(output.status.success());
    assert!(test.exists("translation-status/dashboard/stats.json"));
    assert!(test.exists("translation-status/dashboard/stats.csv"));
    assert!(!test.exists("translation-status/dashboard/index.html"));

    Ok(())
}

#[test]
fn test_build_without_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("sources.yml", "sources: []\n")?;

    let output = test
        .build_command()
        .args(["--config", "sources.yml", "--output", "out"])
        .output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_str(&test.read_file("out/stats.json")?)?;
    assert_eq!(json["records"], Value::Array(Vec::new()));
    assert!(!test.exists("out/stats.csv"));
    assert!(test.read_file("out/index.html")?.contains("No records"));

    Ok(())
}

#[test]
fn test_build_missing_config_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .build_command()
        .args(["--config", "missing.yml"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));

    Ok(())
}

#[test]
fn test_build_requires_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--config"));

    Ok(())
}

#[test]
fn test_build_malformed_catalog_aborts() -> Result<()> {
    let test = setup()?;
    fs::write(
        test.root().join("po/core/broken-fr.po"),
        "this is not a catalog at all\n{{{\n",
    )?;

    let output = test
        .build_command()
        .args(["--config", "sources.yml", "--output", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse catalog file"));
    assert!(stderr.contains("broken-fr.po"));
    assert!(stderr.contains("line 1: unexpected content"));
    assert!(!test.exists("out/stats.json"));

    Ok(())
}
