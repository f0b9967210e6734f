//! Declaration check (ICG002).
//!
//! A method carrying the marker must be generic, and its first type
//! parameter must list at least one interface among its constraints.
//! Later type parameters are not inspected. Constraint types missing from
//! the symbol table make the declaration inconclusive, so it is skipped.

use rayon::prelude::*;

use super::marker::has_marker;
use crate::{
    issues::{MARKER_DECLARATION, MarkerDeclarationIssue, MarkerDeclarationReason},
    model::{MethodSymbol, SemanticModel},
};

pub fn check_marker_declaration_issues(
    model: &SemanticModel,
    analyze_generated: bool,
) -> Vec<MarkerDeclarationIssue> {
    let methods: Vec<&MethodSymbol> = model
        .methods()
        .filter(|method| analyze_generated || !method.generated)
        .collect();

    methods
        .par_iter()
        .filter_map(|method| check_marker_declaration(model, method))
        .collect()
}

/// Check a single method declaration. Returns at most one issue.
///
/// Methods without a source location come from metadata and are not
/// declarations of this compilation, so they are skipped.
pub fn check_marker_declaration(
    model: &SemanticModel,
    method: &MethodSymbol,
) -> Option<MarkerDeclarationIssue> {
    if !has_marker(Some(method)) {
        return None;
    }
    let location = method.location()?;

    let reason = match method.first_type_parameter() {
        None => MarkerDeclarationReason::NotGeneric,
        Some(type_parameter) => {
            let mut unresolved = false;
            for constraint in &type_parameter.constraints {
                match model.type_symbol(constraint) {
                    Some(ty) if ty.type_kind.is_interface() => return None,
                    Some(_) => {}
                    None => unresolved = true,
                }
            }
            // Unexported constraint types are inconclusive.
            if unresolved {
                return None;
            }
            MarkerDeclarationReason::MissingInterfaceConstraint {
                type_parameter: type_parameter.name.clone(),
            }
        }
    };

    Some(MarkerDeclarationIssue {
        location: location.clone(),
        method_name: method.name.clone(),
        reason,
        severity: MARKER_DECLARATION.default_severity,
    })
}
