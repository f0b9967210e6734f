//! Runs both checks over a semantic model.

use std::collections::{HashMap, HashSet};

use crate::{
    issues::{Issue, Rule, Severity},
    model::SemanticModel,
    rules::{
        call_site::check_interface_type_argument_issues,
        declaration::check_marker_declaration_issues,
    },
};

/// Which rules run, and how their findings are reported.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub rules: HashSet<Rule>,
    /// Severity overrides; rules absent here use their descriptor default.
    pub severities: HashMap<Rule, Severity>,
    pub analyze_generated: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            rules: Rule::ANALYZER_RULES
                .into_iter()
                .filter(|rule| rule.descriptor().is_some_and(|d| d.enabled_by_default))
                .collect(),
            severities: HashMap::new(),
            analyze_generated: false,
        }
    }
}

impl AnalysisOptions {
    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    fn severity_for(&self, rule: Rule) -> Option<Severity> {
        self.severities.get(&rule).copied()
    }
}

/// Check every call expression and every declared method of `model`.
///
/// The two checks share nothing and run side by side; each fans out over its
/// own nodes. The result is sorted, so repeated runs over the same model
/// yield identical output.
pub fn analyze(model: &SemanticModel, options: &AnalysisOptions) -> Vec<Issue> {
    let (call_issues, declaration_issues) = rayon::join(
        || {
            if options.is_enabled(Rule::InterfaceTypeArgument) {
                check_interface_type_argument_issues(model, options.analyze_generated)
            } else {
                Vec::new()
            }
        },
        || {
            if options.is_enabled(Rule::MarkerDeclaration) {
                check_marker_declaration_issues(model, options.analyze_generated)
            } else {
                Vec::new()
            }
        },
    );

    let mut issues: Vec<Issue> = call_issues
        .into_iter()
        .map(Issue::InterfaceTypeArgument)
        .chain(declaration_issues.into_iter().map(Issue::MarkerDeclaration))
        .map(|issue| match options.severity_for(issue.rule()) {
            Some(severity) => issue.with_severity(severity),
            None => issue,
        })
        .collect();

    issues.sort();
    issues
}
