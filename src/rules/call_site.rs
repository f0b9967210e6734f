//! Call-site check (ICG001).
//!
//! Every call to a marked generic method must pass an interface as its first
//! type argument, unless the calling method is itself marked. A marked
//! caller takes on the same contract, so marked methods may delegate to each
//! other freely.
//!
//! Anything the host could not resolve is skipped rather than guessed at:
//! unresolved targets, missing type arguments, and type arguments absent
//! from the symbol table.

use rayon::prelude::*;

use super::marker::has_marker;
use crate::{
    issues::{INTERFACE_TYPE_ARGUMENT, InterfaceTypeArgumentIssue},
    model::{CallExpression, SemanticModel},
};

pub fn check_interface_type_argument_issues(
    model: &SemanticModel,
    analyze_generated: bool,
) -> Vec<InterfaceTypeArgumentIssue> {
    model
        .calls()
        .par_iter()
        .filter(|call| analyze_generated || !call.generated)
        .filter_map(|call| check_interface_type_argument(model, call))
        .collect()
}

/// Check a single call expression. Returns at most one issue.
pub fn check_interface_type_argument(
    model: &SemanticModel,
    call: &CallExpression,
) -> Option<InterfaceTypeArgumentIssue> {
    let target = model.resolve_target(call)?;
    if !target.is_generic() || !has_marker(Some(target)) {
        return None;
    }

    if has_marker(model.enclosing_method(call)) {
        return None;
    }

    let type_argument = call.type_arguments.first()?;
    let type_kind = model.type_symbol(type_argument)?.type_kind;
    if type_kind.is_interface() {
        return None;
    }

    Some(InterfaceTypeArgumentIssue {
        location: call.location.clone(),
        method_name: target.name.clone(),
        type_argument: type_argument.clone(),
        type_kind,
        severity: INTERFACE_TYPE_ARGUMENT.default_severity,
    })
}
