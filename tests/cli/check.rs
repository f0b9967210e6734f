use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, DEMO_SYMBOLS, model};

fn call(type_argument: &str, enclosing: &str) -> String {
    format!(
        r#"{{ "target": "M:Demo.Program.Use``1", "typeArguments": ["{}"],
             "enclosingMethod": {},
             "location": {{ "file": "Program.cs", "line": 12, "col": 9,
                            "sourceLine": "        Use<Logger>();" }} }}"#,
        type_argument, enclosing
    )
}

#[test]
fn test_class_type_argument() -> Result<()> {
    let test = CliTest::with_file(
        "obj/Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", r#""M:Demo.Program.Main""#)),
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: The generic type parameter must be an interface  ICG001")
    );
    assert!(output.stdout.contains("--> Program.cs:12:9"));
    assert!(output.stdout.contains("12 |         Use<Logger>();"));
    assert!(
        output
            .stdout
            .contains("= note: type argument 'Demo.Logger' of 'Use' is a class")
    );
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_interface_type_argument() -> Result<()> {
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.IService", r#""M:Demo.Program.Main""#)),
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim(), @"✓ Checked 1 model file - no issues found");

    Ok(())
}

#[test]
fn test_marked_caller_suppresses() -> Result<()> {
    let symbols = format!(
        r#"{},
        {{ "kind": "method", "id": "M:Demo.Program.Outer``1", "name": "Outer",
          "typeParameters": [{{ "name": "T", "constraints": ["Demo.IService"] }}],
          "attributes": [{{ "class": "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute" }}],
          "locations": [{{ "file": "Program.cs", "line": 10, "col": 17 }}] }}"#,
        DEMO_SYMBOLS
    );
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(&symbols, &call("Demo.Logger", r#""M:Demo.Program.Outer``1""#)),
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_top_level_call() -> Result<()> {
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("ICG001"));

    Ok(())
}

#[test]
fn test_unconstrained_declaration() -> Result<()> {
    let symbols = r#"
        { "kind": "method", "id": "M:Demo.Program.Use``1", "name": "Use",
          "typeParameters": [{ "name": "T" }],
          "attributes": [{ "class": "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute" }],
          "locations": [{ "file": "Program.cs", "line": 5, "col": 17 }] }"#;
    let test = CliTest::with_file("Demo.icg.json", &model(symbols, ""))?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "error: Method 'Use' must be generic and have an interface type constraint  ICG002"
    ));
    assert!(output.stdout.contains("--> Program.cs:5:17"));
    assert!(
        output
            .stdout
            .contains("= note: type parameter 'T' has no interface constraint")
    );

    Ok(())
}

#[test]
fn test_unexported_constraint_is_not_reported() -> Result<()> {
    let symbols = r#"
        { "kind": "type", "name": "Demo.Handle", "typeKind": "functionPointer" },
        { "kind": "method", "id": "M:Demo.Program.UseBcl``1", "name": "UseBcl",
          "typeParameters": [{ "name": "T", "constraints": ["System.IDisposable"] }],
          "attributes": [{ "class": "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute" }],
          "locations": [{ "file": "Program.cs", "line": 5, "col": 17 }] }"#;
    let test = CliTest::with_file("Demo.icg.json", &model(symbols, ""))?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 model file - no issues found"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    let value: Value = serde_json::from_str(&output.stdout)?;
    let diagnostics = value.as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["id"], "ICG001");
    assert_eq!(diagnostics[0]["line"], 12);

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let symbols = format!(
        r#"{},
        {{ "kind": "method", "id": "M:Demo.Program.Run", "name": "Run",
          "attributes": [{{ "class": "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute" }}],
          "locations": [{{ "file": "Program.cs", "line": 20, "col": 17 }}] }}"#,
        DEMO_SYMBOLS
    );
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(&symbols, &call("Demo.Logger", "null")),
    )?;

    let all = test.run(test.check_command())?;
    assert!(all.stdout.contains("ICG001"));
    assert!(all.stdout.contains("ICG002"));

    let mut cmd = test.check_command();
    cmd.args(["--rule", "declaration"]);
    let declaration_only = test.run(cmd)?;
    assert!(!declaration_only.stdout.contains("ICG001"));
    assert!(declaration_only.stdout.contains("Method 'Run'"));

    Ok(())
}

#[test]
fn test_config_rule_levels() -> Result<()> {
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;
    test.write_file(".icgrc.json", r#"{ "rules": { "ICG001": "warning" } }"#)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: The generic type parameter must be an interface"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    test.write_file(".icgrc.json", r#"{ "rules": { "ICG001": "off" } }"#)?;
    let output = test.run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_generated_code_is_skipped() -> Result<()> {
    let generated_call = r#"{ "target": "M:Demo.Program.Use``1", "typeArguments": ["Demo.Logger"],
        "location": { "file": "Program.g.cs", "line": 3, "col": 5 }, "generated": true }"#;
    let test = CliTest::with_file("Demo.icg.json", &model(DEMO_SYMBOLS, generated_call))?;

    let output = test.run(test.check_command())?;
    assert_eq!(output.code, Some(0));

    test.write_file(".icgrc.json", r#"{ "analyzeGenerated": true }"#)?;
    let output = test.run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("--> Program.g.cs:3:5"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file(
        "bin/Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;
    test.write_file(".icgrc.json", r#"{ "ignores": ["**/bin/**"] }"#)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 0 model files"));

    Ok(())
}

#[test]
fn test_explicit_paths() -> Result<()> {
    let test = CliTest::with_file(
        "a/A.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;
    test.write_file(
        "b/B.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.IService", "null")),
    )?;

    let mut cmd = test.check_command();
    cmd.arg("b");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 model file"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("Broken.icg.json", "{ \"symbols\": [")?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> Broken.icg.json"));
    assert!(
        output
            .stderr
            .contains("1 model file(s) could not be parsed")
    );

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".icgrc.json", r#"{ "rules": { "ICG404": "error" } }"#)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Unknown rule in 'rules': \"ICG404\""));

    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let test = CliTest::with_file(
        "Demo.icg.json",
        &model(DEMO_SYMBOLS, &call("Demo.Logger", "null")),
    )?;

    let first = test.run(test.check_command())?;
    let second = test.run(test.check_command())?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage: icg"));
    assert!(output.stdout.contains("check"));

    Ok(())
}
