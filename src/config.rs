use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::AnalysisOptions,
    issues::{Rule, Severity},
};

pub const CONFIG_FILE_NAME: &str = ".icgrc.json";

/// Configured level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Info,
    Warning,
    Error,
}

impl RuleLevel {
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Info => Some(Severity::Info),
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (or single files) scanned for model files.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Also check methods and calls the host flagged as generated code.
    #[serde(default)]
    pub analyze_generated: bool,
    /// Per-rule level overrides, keyed by diagnostic id.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleLevel>,
}

fn default_includes() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            analyze_generated: false,
            rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or unknown rule ids.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for id in self.rules.keys() {
            if Rule::from_id(id).is_none() {
                bail!("Unknown rule in 'rules': \"{}\"", id);
            }
        }

        Ok(())
    }

    /// Analysis options for this configuration, restricted to `selected`
    /// when it is non-empty.
    pub fn analysis_options(&self, selected: &[Rule]) -> AnalysisOptions {
        let mut options = AnalysisOptions {
            analyze_generated: self.analyze_generated,
            ..Default::default()
        };

        if !selected.is_empty() {
            options.rules.retain(|rule| selected.contains(rule));
        }

        for (id, level) in &self.rules {
            let Some(rule) = Rule::from_id(id) else {
                continue;
            };
            match level.severity() {
                Some(severity) => {
                    options.severities.insert(rule, severity);
                }
                None => {
                    options.rules.remove(&rule);
                }
            }
        }

        options
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
