use anyhow::Result;

use crate::{CliTest, stdout_of};

const WITH_DUPLICATES: &str = r#"import { StyleSheet, Text, View } from 'react-native';

const App = () => (
  <View style={{ flex: 1 }}>
    <Text style={{ flex: 1 }}>a</Text>
  </View>
);

const styles = StyleSheet.create({
  container: {
    margin: 4,
  },
});
"#;

#[test]
fn test_consolidate_dry_run_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;

    let output = test.command().args(["consolidate", "App.js"]).output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Would merge 1 group(s), replacing 2 literal(s)."));
    assert_eq!(test.read_file("App.js")?, WITH_DUPLICATES);
    Ok(())
}

#[test]
fn test_consolidate_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;

    let output = test
        .command()
        .args(["consolidate", "App.js", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Merged 1 group(s), replaced 2 literal(s)."));

    let rewritten = test.read_file("App.js")?;
    assert!(!rewritten.contains("style={{ flex: 1 }}"));
    assert_eq!(
        rewritten.matches("style={styles.consolidatedStyle_1}").count(),
        2
    );
    assert!(rewritten.contains("consolidatedStyle_1: {"));
    Ok(())
}

#[test]
fn test_consolidate_prefix_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;
    test.write_file(
        ".restylerc.json",
        r#"{ "consolidatedStylePrefix": "fromConfig" }"#,
    )?;

    let output = test
        .command()
        .args(["consolidate", "App.js", "--apply", "--prefix", "shared"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file("App.js")?.contains("shared_1"));
    Ok(())
}

#[test]
fn test_consolidate_prefix_from_config() -> Result<()> {
    let test = CliTest::with_file("App.js", WITH_DUPLICATES)?;
    test.write_file(
        ".restylerc.json",
        r#"{ "consolidatedStylePrefix": "appStyle" }"#,
    )?;

    let output = test
        .command()
        .args(["consolidate", "App.js", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file("App.js")?.contains("appStyle_1"));
    Ok(())
}

#[test]
fn test_consolidate_without_duplicates() -> Result<()> {
    let test = CliTest::with_file("App.js", "const App = () => <View style={{ flex: 1 }} />;\n")?;

    let output = test
        .command()
        .args(["consolidate", "App.js", "--apply"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("No duplicated inline styles"));
    assert_eq!(
        test.read_file("App.js")?,
        "const App = () => <View style={{ flex: 1 }} />;\n"
    );
    Ok(())
}
