//! Core analysis engine.
//!
//! - `context`: configuration merging and model discovery for a run
//! - `analyzer`: runs the rules over one semantic model

mod analyzer;
mod context;

pub use analyzer::{AnalysisOptions, analyze};
pub use context::CheckContext;
