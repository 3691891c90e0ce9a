use anyhow::Result;

use crate::CliTest;

#[test]
fn test_fetch_skips_local_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "sources.yml",
        r#"
sources:
  - label: docs
    local: po/docs
"#,
    )?;

    let output = test.fetch_command().args(["--config", "sources.yml"]).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fetched 0 catalog files from 0 sources"));
    assert!(stdout.contains("no remote: docs"));
    assert!(!test.exists("po/docs"));

    Ok(())
}

#[test]
fn test_fetch_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("sources.yml", "sources:\n  - local: po/docs\n")?;

    let output = test.fetch_command().args(["--config", "sources.yml"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
    assert!(stderr.contains("label"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("build"));
    assert!(stdout.contains("dashboard"));
    assert!(stdout.contains("fetch"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));

    Ok(())
}
