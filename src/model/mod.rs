//! Semantic model exported by the host compiler.
//!
//! The host resolves symbols, types and call targets; this module only
//! deserializes and indexes what it exported. Nothing here is ever mutated
//! after loading.

mod scanner;
mod semantic;
mod symbols;

pub use scanner::{
    LoadModelsResult, LoadedModel, MODEL_FILE_SUFFIX, ModelLoadWarning, ScanResult, load_models,
    scan_model_files,
};
pub use semantic::{CallExpression, ModelDocument, SemanticModel};
pub use symbols::{
    AttributeData, Attributed, Location, MethodSymbol, Symbol, TypeKind, TypeParameter,
    TypeSymbol,
};
