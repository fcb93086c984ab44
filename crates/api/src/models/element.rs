use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Source-level kind of a program element, as the host compiler reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Field,
    Method,
    Other,
}

impl ElementKind {
    /// Class-like kinds; enums count as classes in the element model.
    pub fn is_class(&self) -> bool {
        matches!(self, ElementKind::Class | ElementKind::Enum)
    }

    /// Interface-like kinds; annotation types are interfaces underneath.
    pub fn is_interface(&self) -> bool {
        matches!(self, ElementKind::Interface | ElementKind::Annotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

/// What kind of declaration directly encloses a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnclosingKind {
    TopLevel,
    /// Nested inside another class; needs `static` to be instantiable
    /// without an enclosing instance.
    Class,
    /// Nested inside a non-class container (package, method body).
    NonClass,
}

/// A declared constructor, reduced to what validation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub modifiers: Vec<Modifier>,
    pub param_count: usize,
}

impl Constructor {
    pub fn public_no_args() -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            param_count: 0,
        }
    }

    pub fn is_public_no_args(&self) -> bool {
        self.param_count == 0 && self.modifiers.contains(&Modifier::Public)
    }
}

/// A declaration carrying the provider marker, snapshotted from the host's
/// element model for the current pass. Never retained across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCandidate {
    /// Qualified binary name, e.g. `com.example.FooImpl` or `com.example.Outer$Inner`.
    pub qualified_name: String,
    pub simple_name: String,
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub enclosing: EnclosingKind,
    pub constructors: Vec<Constructor>,
    /// The candidate's own type, for assignability checks.
    pub type_ref: TypeRef,
    /// The marker annotation's declared `value` list, in declaration order.
    pub declared_services: Vec<TypeRef>,
}

impl ProviderCandidate {
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}
