use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Created .restylerc.json"));

    let config = test.read_file(".restylerc.json")?;
    assert!(config.contains("consolidatedStylePrefix"));
    assert!(config.contains("ignores"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".restylerc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));
    assert_eq!(test.read_file(".restylerc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Usage:"));
    Ok(())
}
