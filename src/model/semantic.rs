//! The semantic model of one compilation.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::symbols::{Location, MethodSymbol, Symbol, TypeSymbol};

/// A call to a method, as seen at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    /// Id of the called method. `None` when the host could not resolve it.
    #[serde(default)]
    pub target: Option<String>,
    /// Supplied type arguments (explicit or inferred), by type name.
    #[serde(default)]
    pub type_arguments: Vec<String>,
    /// Id of the nearest containing method. `None` for top-level code.
    #[serde(default)]
    pub enclosing_method: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub generated: bool,
}

impl CallExpression {
    pub fn new(target: impl Into<String>, location: Location) -> Self {
        Self {
            target: Some(target.into()),
            type_arguments: Vec::new(),
            enclosing_method: None,
            location,
            generated: false,
        }
    }

    pub fn with_type_argument(mut self, type_argument: impl Into<String>) -> Self {
        self.type_arguments.push(type_argument.into());
        self
    }

    pub fn within(mut self, enclosing_method: impl Into<String>) -> Self {
        self.enclosing_method = Some(enclosing_method.into());
        self
    }
}

/// On-disk shape of a model file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    #[serde(default)]
    pub assembly: Option<String>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub calls: Vec<CallExpression>,
}

/// Indexed, read-only view over a [`ModelDocument`].
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    assembly: Option<String>,
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
    calls: Vec<CallExpression>,
}

impl SemanticModel {
    /// Index the document's symbols. Fails if two symbols share an id.
    pub fn new(document: ModelDocument) -> Result<Self> {
        let mut index = HashMap::with_capacity(document.symbols.len());
        for (position, symbol) in document.symbols.iter().enumerate() {
            if index.insert(symbol.id().to_string(), position).is_some() {
                bail!("Duplicate symbol id \"{}\"", symbol.id());
            }
        }

        Ok(Self {
            assembly: document.assembly,
            symbols: document.symbols,
            index,
            calls: document.calls,
        })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let document: ModelDocument =
            serde_json::from_str(content).context("Invalid semantic model")?;
        Self::new(document)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbol(&self, id: &str) -> Option<&Symbol> {
        self.index.get(id).map(|&position| &self.symbols[position])
    }

    pub fn method(&self, id: &str) -> Option<&MethodSymbol> {
        self.symbol(id).and_then(Symbol::as_method)
    }

    pub fn type_symbol(&self, name: &str) -> Option<&TypeSymbol> {
        self.symbol(name).and_then(Symbol::as_type)
    }

    /// All method symbols, in document order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodSymbol> {
        self.symbols.iter().filter_map(Symbol::as_method)
    }

    pub fn calls(&self) -> &[CallExpression] {
        &self.calls
    }

    /// The method a call binds to, if the host resolved it.
    pub fn resolve_target(&self, call: &CallExpression) -> Option<&MethodSymbol> {
        call.target.as_deref().and_then(|id| self.method(id))
    }

    /// The method lexically containing a call, if any.
    pub fn enclosing_method(&self, call: &CallExpression) -> Option<&MethodSymbol> {
        call.enclosing_method
            .as_deref()
            .and_then(|id| self.method(id))
    }
}
