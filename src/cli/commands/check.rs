use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::{CheckContext, analyze},
    issues::{Issue, Rule},
    model::LoadedModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    /// ICG001: non-interface type argument at a call site
    #[value(aliases = ["ICG001", "icg001"])]
    CallSite,
    /// ICG002: marker on a method without an interface-constrained type parameter
    #[value(aliases = ["ICG002", "icg002"])]
    Declaration,
}

impl CheckRule {
    pub fn rule(self) -> Rule {
        match self {
            CheckRule::CallSite => Rule::InterfaceTypeArgument,
            CheckRule::Declaration => Rule::MarkerDeclaration,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let selected: Vec<Rule> = args.rules.iter().map(|r| r.rule()).collect();
    let options = ctx.config.analysis_options(&selected);

    let loaded = ctx.models();
    let mut all_issues: Vec<Issue> = Vec::new();
    for loaded in &loaded.models {
        let issues = analyze(&loaded.model, &options);
        if ctx.verbose {
            eprintln!("{} {}", "note:".bold(), model_note(&ctx, loaded, issues.len()));
        }
        all_issues.extend(issues);
    }

    all_issues.extend(ctx.parse_errors().into_iter().map(|mut issue| {
        issue.file_path = ctx.display_path(&issue.file_path).to_string();
        Issue::ParseError(issue)
    }));

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            format: args.format,
            models_checked: ctx.files.len(),
        }),
        all_issues,
    ))
}

/// One-line verbose summary of a checked model file.
fn model_note(ctx: &CheckContext, loaded: &LoadedModel, issue_count: usize) -> String {
    let path = ctx.display_path(&loaded.file_path);
    let name = match loaded.model.assembly() {
        Some(assembly) => format!("{} ({})", path, assembly),
        None => path.to_string(),
    };
    format!(
        "Checked {}: {} symbol(s), {} call(s), {} issue(s)",
        name,
        loaded.model.symbol_count(),
        loaded.model.calls().len(),
        issue_count
    )
}
