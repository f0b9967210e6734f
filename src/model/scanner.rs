//! Discovery and loading of model files.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::SemanticModel;

/// File name suffix of semantic model exports.
pub const MODEL_FILE_SUFFIX: &str = ".icg.json";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for model files.
pub struct ScanResult {
    /// Model file paths, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Collect model files under `includes` (relative to `base_dir`).
///
/// Includes may name directories (walked recursively) or single files.
/// An empty include list scans `base_dir` itself.
pub fn scan_model_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let roots: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut roots = Vec::new();
        for inc in includes {
            let path = if inc == "." {
                base_dir.to_path_buf()
            } else {
                base_dir.join(inc)
            };
            if path.exists() {
                roots.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
        roots
    };

    for root in roots {
        // A file named explicitly is taken as-is, whatever its suffix.
        if root.is_file() {
            files.insert(root.to_string_lossy().into_owned());
            continue;
        }

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_model_file(path) {
                files.insert(path_str.into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_model_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MODEL_FILE_SUFFIX))
}

/// A model file that could not be loaded.
#[derive(Debug, Clone)]
pub struct ModelLoadWarning {
    pub file_path: String,
    pub error: String,
}

/// A successfully loaded model together with the file it came from.
pub struct LoadedModel {
    pub file_path: String,
    pub model: SemanticModel,
}

#[derive(Default)]
pub struct LoadModelsResult {
    pub models: Vec<LoadedModel>,
    pub warnings: Vec<ModelLoadWarning>,
}

/// Read and parse model files in parallel. Output order follows `files`.
pub fn load_models<'a, I>(files: I) -> LoadModelsResult
where
    I: IntoIterator<Item = &'a String>,
{
    let files: Vec<&String> = files.into_iter().collect();
    let loaded: Vec<_> = files
        .par_iter()
        .map(|file_path| {
            (
                file_path.to_string(),
                SemanticModel::load(Path::new(file_path.as_str())),
            )
        })
        .collect();

    let mut result = LoadModelsResult::default();
    for (file_path, model) in loaded {
        match model {
            Ok(model) => result.models.push(LoadedModel { file_path, model }),
            Err(e) => result.warnings.push(ModelLoadWarning {
                file_path,
                error: format!("{:#}", e),
            }),
        }
    }
    result
}
