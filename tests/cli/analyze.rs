use anyhow::Result;
use serde_json::Value;

use crate::{ALL_USED, CliTest, WITH_UNUSED, stderr_of, stdout_of};

#[test]
fn test_analyze_reports_usage_counts() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_UNUSED)?;

    let output = test.command().args(["analyze", "App.js"]).output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("styles [plain]"));
    assert!(stdout.contains("container: 1 usage"));
    assert!(stdout.contains("stale: 0 usages"));
    assert!(stdout.contains("1 unused style"));
    Ok(())
}

#[test]
fn test_analyze_clean_file_exits_zero() -> Result<()> {
    let test = CliTest::with_file("App.js", ALL_USED)?;

    let output = test.command().args(["analyze", "App.js"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_analyze_json_output() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_UNUSED)?;

    let output = test
        .command()
        .args(["analyze", "App.js", "--json"])
        .output()?;
    let groups: Value = serde_json::from_str(&stdout_of(&output))?;

    let entries = groups[0]["entries"].as_array().unwrap();
    assert_eq!(groups[0]["rootName"], "styles");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "container");
    assert_eq!(entries[0]["usageCount"], 1);
    assert_eq!(entries[2]["name"], "stale");
    assert_eq!(entries[2]["usageCount"], 0);
    Ok(())
}

#[test]
fn test_analyze_unreadable_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["analyze", "missing.js"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read"));
    Ok(())
}

#[test]
fn test_analyze_unparseable_file_is_an_error() -> Result<()> {
    let test = CliTest::with_file("broken.js", "const = {{{")?;

    let output = test.command().args(["analyze", "broken.js"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to analyze"));
    Ok(())
}
