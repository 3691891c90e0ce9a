use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, catalog};

const FULL_HEADER_CATALOG: &str = r#"# German messages.
msgid ""
msgstr ""
"Project-Id-Version: messages 1.0\n"
"POT-Creation-Date: 2026-01-02 03:04+0000\n"
"PO-Revision-Date: 2026-01-05 10:00+0100\n"
"Last-Translator: Jane Doe <jane@example.org>\n"
"Language-Team: German\n"
"Language: de\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

msgid "Hello"
msgstr "Hallo"
"#;

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "po_files/report-fr.po",
        &catalog(&[("Hello", "Bonjour", false), ("Bye", "Salut", true)]),
    )?;
    test.write_file(
        "po_files/report-es.po",
        &catalog(&[("Hello", "", false), ("Bye", "", false)]),
    )?;
    test.write_file("po_files/messages.po", FULL_HEADER_CATALOG)?;
    Ok(test)
}

#[test]
fn test_dashboard_defaults() -> Result<()> {
    let test = setup()?;

    let output = test.dashboard_command().output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 3 records from 3 catalog files to dashboard"));
    assert!(stdout.contains("Language"));

    let html = test.read_file("dashboard/index.html")?;
    assert!(html.contains("Translation Coverage by Language"));
    assert!(html.contains(r#""x":["es","fr","messages"]"#));
    assert!(html.contains(r#""name":"Fuzzy","type":"bar","marker":{"color":"orange"}"#));
    assert!(!html.contains("<th>Source</th>"));

    let json: Value = serde_json::from_str(&test.read_file("dashboard/stats.json")?)?;
    let records = json.as_array().expect("flat record list");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["language"], "messages");
    assert_eq!(records[2]["file"], "");
    assert!(records[0].get("source").is_none());

    Ok(())
}

#[test]
fn test_dashboard_custom_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/nested/app-ja.po",
        &catalog(&[("Hello", "こんにちは", false)]),
    )?;

    let output = test
        .dashboard_command()
        .args(["--po-dir", "locales", "--output", "site"])
        .output()?;

    assert!(output.status.success());
    let csv = test.read_file("site/stats.csv")?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "app,ja,1,0,0,1,100.0,0.0,0.0");

    Ok(())
}

#[test]
fn test_dashboard_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("po_files"))?;

    let output = test.dashboard_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("dashboard/stats.json")?, "[]");
    assert!(!test.exists("dashboard/stats.csv"));
    assert!(test.read_file("dashboard/index.html")?.contains("No records"));

    Ok(())
}

#[test]
fn test_dashboard_missing_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.dashboard_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Catalog directory 'po_files' does not exist."));

    Ok(())
}
