use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_rules_lists_supported_diagnostics() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("rules");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("ICG001"));
    assert!(output.stdout.contains("Enforce interface generic type argument"));
    assert!(output.stdout.contains("ICG002"));
    assert!(
        output
            .stdout
            .contains("Method '{0}' must be generic and have an interface type constraint")
    );

    Ok(())
}
