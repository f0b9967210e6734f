use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod rules;

const BIN_NAME: &str = "icg";

/// Marked generic method `Use<T>() where T : IService`, plus the types the
/// call-site scenarios need. Calls are appended per test.
pub const DEMO_SYMBOLS: &str = r#"
    { "kind": "type", "name": "Demo.IService", "typeKind": "interface" },
    { "kind": "type", "name": "Demo.Logger", "typeKind": "class" },
    { "kind": "method", "id": "M:Demo.Program.Use``1", "name": "Use",
      "typeParameters": [{ "name": "T", "constraints": ["Demo.IService"] }],
      "attributes": [{ "class": "InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute" }],
      "locations": [{ "file": "Program.cs", "line": 5, "col": 17 }] },
    { "kind": "method", "id": "M:Demo.Program.Main", "name": "Main",
      "locations": [{ "file": "Program.cs", "line": 8, "col": 17 }] }
"#;

/// Build a model document from raw symbol and call JSON fragments.
pub fn model(symbols: &str, calls: &str) -> String {
    format!(
        r#"{{ "assembly": "Demo", "symbols": [{}], "calls": [{}] }}"#,
        symbols, calls
    )
}

pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn run(&self, mut cmd: Command) -> Result<CliOutput> {
        let output = cmd.output().context("Failed to run icg")?;
        Ok(CliOutput {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }
}
