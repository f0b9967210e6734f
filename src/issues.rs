//! Diagnostic descriptors and issue types.
//!
//! Each issue is self-contained with all information the reporters need:
//! location, message, severity and any extra note or hint.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::model::{Location, TypeKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    InterfaceTypeArgument,
    MarkerDeclaration,
    ParseError,
}

impl Rule {
    /// Rules backed by a diagnostic descriptor, in id order.
    pub const ANALYZER_RULES: [Rule; 2] = [Rule::InterfaceTypeArgument, Rule::MarkerDeclaration];

    pub fn descriptor(self) -> Option<&'static DiagnosticDescriptor> {
        match self {
            Rule::InterfaceTypeArgument => Some(&INTERFACE_TYPE_ARGUMENT),
            Rule::MarkerDeclaration => Some(&MARKER_DECLARATION),
            Rule::ParseError => None,
        }
    }

    /// Look up an analyzer rule by its diagnostic id (case-insensitive).
    pub fn from_id(id: &str) -> Option<Rule> {
        Self::ANALYZER_RULES.into_iter().find(|rule| {
            rule.descriptor()
                .is_some_and(|d| d.id.eq_ignore_ascii_case(id))
        })
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.descriptor() {
            Some(descriptor) => write!(f, "{}", descriptor.id),
            None => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Diagnostic Descriptors
// ============================================================

/// Static description of a diagnostic the analyzer can emit.
#[derive(Debug, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message with positional `{0}`, `{1}`, ... placeholders.
    pub message_format: &'static str,
    pub category: &'static str,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
}

impl DiagnosticDescriptor {
    /// Substitute positional arguments into the message format.
    pub fn format_message(&self, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(self.message_format.to_string(), |message, (i, arg)| {
                message.replace(&format!("{{{}}}", i), arg)
            })
    }
}

/// ICG001: a marked generic method is called with a non-interface type argument.
pub const INTERFACE_TYPE_ARGUMENT: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "ICG001",
    title: "Enforce interface generic type argument",
    message_format: "The generic type parameter must be an interface",
    category: "TypeConstraints",
    default_severity: Severity::Error,
    enabled_by_default: true,
};

/// ICG002: the marker is applied to a method that cannot satisfy it.
pub const MARKER_DECLARATION: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "ICG002",
    title: "OnlyAllowInterfaceCallsAttribute must be used with generic methods having an interface type constraint",
    message_format: "Method '{0}' must be generic and have an interface type constraint",
    category: "Usage",
    default_severity: Severity::Error,
    enabled_by_default: true,
};

pub const SUPPORTED_DIAGNOSTICS: [&DiagnosticDescriptor; 2] =
    [&INTERFACE_TYPE_ARGUMENT, &MARKER_DECLARATION];

// ============================================================
// Issue Types
// ============================================================

/// Call to a marked generic method whose first type argument is not an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceTypeArgumentIssue {
    /// Location of the call expression.
    pub location: Location,
    /// Display name of the called method.
    pub method_name: String,
    /// The offending first type argument.
    pub type_argument: String,
    pub type_kind: TypeKind,
    pub severity: Severity,
}

/// Which half of the declaration contract a marked method fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerDeclarationReason {
    NotGeneric,
    /// The first type parameter has no interface among its constraints.
    MissingInterfaceConstraint { type_parameter: String },
}

impl std::fmt::Display for MarkerDeclarationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerDeclarationReason::NotGeneric => write!(f, "method has no type parameters"),
            MarkerDeclarationReason::MissingInterfaceConstraint { type_parameter } => write!(
                f,
                "type parameter '{}' has no interface constraint",
                type_parameter
            ),
        }
    }
}

/// Marked method declaration that is not generic or lacks an interface constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDeclarationIssue {
    /// Declared location of the method.
    pub location: Location,
    pub method_name: String,
    pub reason: MarkerDeclarationReason,
    pub severity: Severity,
}

/// Model file could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    InterfaceTypeArgument(InterfaceTypeArgumentIssue),
    MarkerDeclaration(MarkerDeclarationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// Replace the severity of an analyzer issue. Parse errors are always errors.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        match &mut self {
            Issue::InterfaceTypeArgument(issue) => issue.severity = severity,
            Issue::MarkerDeclaration(issue) => issue.severity = severity,
            Issue::ParseError(_) => {}
        }
        self
    }

    fn sort_key(&self) -> (&str, usize, usize, Rule) {
        match self.location() {
            ReportLocation::Source(location) => {
                (location.file_path(), location.line, location.col, self.rule())
            }
            ReportLocation::File { path } => (path, 0, 0, self.rule()),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source location (may carry the source line for context display).
    Source(&'a Location),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for InterfaceTypeArgumentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.location)
    }

    fn message(&self) -> String {
        INTERFACE_TYPE_ARGUMENT.format_message(&[])
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Rule::InterfaceTypeArgument
    }

    fn hint(&self) -> Option<String> {
        Some(
            "pass an interface type, or mark the calling method with [OnlyAllowInterfaceCalls]"
                .to_string(),
        )
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "type argument '{}' of '{}' is {}",
            self.type_argument,
            self.method_name,
            with_article(self.type_kind)
        ))
    }
}

impl Report for MarkerDeclarationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.location)
    }

    fn message(&self) -> String {
        MARKER_DECLARATION.format_message(&[&self.method_name])
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Rule::MarkerDeclaration
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

fn with_article(kind: TypeKind) -> String {
    let name = kind.to_string();
    let article = match name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!("{} {}", article, name)
}
