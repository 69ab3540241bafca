use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("sources").is_some(),
        "Config should have 'sources' field"
    );
    assert!(
        parsed.get("destination").is_some(),
        "Config should have 'destination' field"
    );
    assert!(
        parsed.get("langPlace").is_some(),
        "Config should have 'langPlace' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18nrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".i18nrc.json").exists());

    let content = test.read_file(".i18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .i18nrc.json already exists
    ");
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_then_compile_uses_defaults() -> Result<()> {
    let test = CliTest::with_file(
        "locales/greeting_i18n.yaml",
        "greeting:\n  en: Hi\n  pt: Oi\n",
    )?;

    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.compile_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ File "i18n/translations_en.json" created.
    ✓ File "i18n/translations_pt.json" created.

    ----- stderr -----
    "#);
    assert_eq!(
        test.read_file("i18n/translations_en.json")?,
        r#"{"greeting":"Hi"}"#
    );
    assert_eq!(
        test.read_file("i18n/translations_pt.json")?,
        r#"{"greeting":"Oi"}"#
    );
    Ok(())
}
