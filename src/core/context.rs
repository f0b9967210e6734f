use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::ParseErrorIssue,
    model::{LoadModelsResult, load_models, scan_model_files},
};

/// Configuration and inputs of one `check` run.
///
/// Model files are discovered eagerly, so path problems surface before any
/// analysis starts; parsing is deferred to the first call of `models()`.
///
/// # Configuration Priority
///
/// 1. CLI arguments (paths, `--root`)
/// 2. `.icgrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (config search start, base for relative paths).
    pub root_dir: PathBuf,

    /// All model files to analyze, sorted.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    loaded: OnceCell<LoadModelsResult>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the root path is not UTF-8.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !common_args.paths.is_empty() {
            config.includes = common_args
                .paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }

        let scan_result = scan_model_files(&root_dir, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        if verbose {
            eprintln!(
                "{} Found {} model file(s) under {}",
                "note:".bold(),
                scan_result.files.len(),
                root_dir.display()
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            loaded: OnceCell::new(),
        })
    }

    /// Parsed models (lazy initialization, files are parsed in parallel).
    pub fn models(&self) -> &LoadModelsResult {
        self.loaded.get_or_init(|| {
            let result = load_models(&self.files);
            if self.verbose {
                for warning in &result.warnings {
                    eprintln!(
                        "{} Failed to load {}: {}",
                        "warning:".bold().yellow(),
                        warning.file_path,
                        warning.error
                    );
                }
            }
            result
        })
    }

    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.models()
            .warnings
            .iter()
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path.clone(),
                error: warning.error.clone(),
            })
            .collect()
    }

    /// Path of a model file relative to the project root, for display.
    pub fn display_path<'a>(&self, file_path: &'a str) -> &'a str {
        Path::new(file_path)
            .strip_prefix(&self.root_dir)
            .ok()
            .and_then(|p| p.to_str())
            .unwrap_or(file_path)
    }
}
