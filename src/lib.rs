//! icg - interface constraint guard
//!
//! Checks a compiler's exported semantic model for misuse of generic methods
//! marked with `InterfaceConstraintAnalyzer.OnlyAllowInterfaceCallsAttribute`:
//!
//! - ICG001: a marked generic method is called with a non-interface first
//!   type argument from an unmarked caller.
//! - ICG002: the marker sits on a method that is not generic, or whose first
//!   type parameter has no interface constraint.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis driver and per-run context
//! - `issues`: Diagnostic descriptors and issue types
//! - `model`: Semantic model types and model file loading
//! - `rules`: The two checks and the marker predicate

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod model;
pub mod rules;
