use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const SOURCE: &str = r#"const App = () => (
  <View style={{ flex: 1, backgroundColor: 'red' }} />
);

const styles = StyleSheet.create({
  container: {
    flex: 1,
  },
});
"#;

// `style={{ ... }}` on line 2 spans columns 8..51.
const SELECTION: &[&str] = &["--start", "2:8", "--end", "2:51"];

#[test]
fn test_extract_dry_run_previews_entry() -> Result<()> {
    let test = CliTest::with_file("App.js", SOURCE)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card"])
        .args(SELECTION)
        .output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("  card: {"));
    assert!(stdout.contains("    backgroundColor: 'red',"));
    assert!(stdout.contains("Would extract style \"card\""));
    assert_eq!(test.read_file("App.js")?, SOURCE);
    Ok(())
}

#[test]
fn test_extract_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("App.js", SOURCE)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card", "--apply"])
        .args(SELECTION)
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    let rewritten = test.read_file("App.js")?;
    assert!(rewritten.contains("<View style={styles.card} />"));
    assert!(rewritten.contains("  card: {\n    flex: 1,\n    backgroundColor: 'red',\n  },\n});"));
    Ok(())
}

#[test]
fn test_extract_rejects_non_style_selection() -> Result<()> {
    let test = CliTest::with_file("App.js", SOURCE)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card"])
        .args(["--start", "1:0", "--end", "1:10"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("not an inline style literal"));
    Ok(())
}

#[test]
fn test_extract_rejects_invalid_name() -> Result<()> {
    let test = CliTest::with_file("App.js", SOURCE)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "_card"])
        .args(SELECTION)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("invalid style name"));
    Ok(())
}

#[test]
fn test_extract_requires_target_with_multiple_sheets() -> Result<()> {
    let source = r#"const App = () => (
  <View style={{ flex: 1, backgroundColor: 'red' }} />
);

const a = StyleSheet.create({ x: { flex: 1 } });
const b = StyleSheet.create({ y: { flex: 2 } });
"#;
    let test = CliTest::with_file("App.js", source)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card", "--apply"])
        .args(SELECTION)
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("target root name is required"));

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card", "--target", "b", "--apply"])
        .args(SELECTION)
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file("App.js")?.contains("style={b.card}"));
    Ok(())
}

#[test]
fn test_extract_creates_sheet_when_none_exists() -> Result<()> {
    let source = "const App = () => (\n  <View style={{ flex: 1, backgroundColor: 'red' }} />\n);\n";
    let test = CliTest::with_file("App.js", source)?;

    let output = test
        .command()
        .args(["extract", "App.js", "--name", "card", "--apply"])
        .args(SELECTION)
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    let rewritten = test.read_file("App.js")?;
    assert!(rewritten.contains("style={styles.card}"));
    assert!(rewritten.contains("const styles = StyleSheet.create({"));
    Ok(())
}
