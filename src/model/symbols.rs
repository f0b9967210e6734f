//! Symbol types of the semantic model.
//!
//! The host compiler resolves every declaration before handing it over, so
//! these are plain immutable records. The set of symbol kinds is closed:
//! a [`Symbol`] is either a method or a type, and attribute applications
//! live inside them as [`AttributeData`].

use serde::{Deserialize, Serialize};

/// Source position of a declaration or expression (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub col: usize,
    /// Text of the source line, when the host exported it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file: file.into(),
            line,
            col,
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }

    pub fn file_path(&self) -> &str {
        &self.file
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

/// Classification of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    TypeParameter,
    Array,
    Pointer,
    Dynamic,
    Error,
    /// Any kind not listed above, including ones newer hosts add.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    pub fn is_interface(self) -> bool {
        self == TypeKind::Interface
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
            TypeKind::TypeParameter => "type parameter",
            TypeKind::Array => "array",
            TypeKind::Pointer => "pointer",
            TypeKind::Dynamic => "dynamic",
            TypeKind::Error => "error type",
            TypeKind::Unknown => "unknown type",
        };
        write!(f, "{}", name)
    }
}

/// An attribute applied to a declaration.
///
/// `class` is the fully-qualified name of the attribute type, or `None` when
/// the host could not bind it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeData {
    #[serde(default)]
    pub class: Option<String>,
}

impl AttributeData {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
        }
    }

    pub fn unresolved() -> Self {
        Self { class: None }
    }
}

/// Anything that carries applied attributes.
pub trait Attributed {
    fn attributes(&self) -> &[AttributeData];
}

/// A resolved type, keyed by its fully-qualified display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSymbol {
    pub name: String,
    #[serde(default)]
    pub type_kind: TypeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeData>,
}

impl TypeSymbol {
    pub fn new(name: impl Into<String>, type_kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            type_kind,
            attributes: Vec::new(),
        }
    }
}

impl Attributed for TypeSymbol {
    fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}

/// A generic type parameter and its ordered constraint types (by type name).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }
}

/// A resolved method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSymbol {
    /// Host-assigned identity, unique within one model.
    pub id: String,
    /// Display name, used in diagnostic messages.
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    /// Declared source locations. Empty for methods imported from metadata.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// True when the declaration lives in generated code.
    #[serde(default)]
    pub generated: bool,
}

impl MethodSymbol {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_parameters: Vec::new(),
            attributes: Vec::new(),
            locations: Vec::new(),
            generated: false,
        }
    }

    pub fn with_type_parameter(mut self, type_parameter: TypeParameter) -> Self {
        self.type_parameters.push(type_parameter);
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn arity(&self) -> usize {
        self.type_parameters.len()
    }

    pub fn is_generic(&self) -> bool {
        self.arity() > 0
    }

    pub fn first_type_parameter(&self) -> Option<&TypeParameter> {
        self.type_parameters.first()
    }

    /// Primary declared location, if the method is declared in source.
    pub fn location(&self) -> Option<&Location> {
        self.locations.first()
    }
}

impl Attributed for MethodSymbol {
    fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}

/// A symbol in the model's symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Symbol {
    Method(MethodSymbol),
    Type(TypeSymbol),
}

impl Symbol {
    /// Key under which the symbol is indexed.
    pub fn id(&self) -> &str {
        match self {
            Symbol::Method(method) => &method.id,
            Symbol::Type(ty) => &ty.name,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSymbol> {
        match self {
            Symbol::Method(method) => Some(method),
            Symbol::Type(_) => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeSymbol> {
        match self {
            Symbol::Type(ty) => Some(ty),
            Symbol::Method(_) => None,
        }
    }
}

impl Attributed for Symbol {
    fn attributes(&self) -> &[AttributeData] {
        match self {
            Symbol::Method(method) => method.attributes(),
            Symbol::Type(ty) => ty.attributes(),
        }
    }
}
