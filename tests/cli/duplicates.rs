use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stdout_of};

const WITH_DUPLICATES: &str = r#"const App = () => (
  <View style={{ flex: 1, backgroundColor: 'red' }}>
    <Text style={{ flex: 1, backgroundColor: 'red' }}>a</Text>
    <Text style={{ margin: 4 }}>b</Text>
  </View>
);
"#;

#[test]
fn test_duplicates_reports_repeated_literals() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;

    let output = test.command().args(["duplicates", "App.js"]).output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("1 duplicated inline style group(s)"));
    assert!(stdout.contains("2 occurrence(s)"));
    Ok(())
}

#[test]
fn test_duplicates_none_found() -> Result<()> {
    let test = CliTest::with_file("App.js", "const App = () => <View style={{ flex: 1 }} />;\n")?;

    let output = test.command().args(["duplicates", "App.js"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("No duplicated inline styles"));
    Ok(())
}

#[test]
fn test_duplicates_json_output() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;

    let output = test
        .command()
        .args(["duplicates", "App.js", "--json"])
        .output()?;
    let groups: Value = serde_json::from_str(&stdout_of(&output))?;

    assert_eq!(groups.as_array().unwrap().len(), 1);
    assert_eq!(groups[0]["properties"]["flex"], 1.0);
    assert_eq!(groups[0]["occurrences"].as_array().unwrap().len(), 2);
    Ok(())
}
