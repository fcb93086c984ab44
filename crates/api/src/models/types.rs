use serde::{Deserialize, Serialize};

/// Opaque handle to a type reference owned by the host compiler.
///
/// The engine never interprets the value; classification, naming and
/// assignability all go through the host's `TypeOracle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub u32);

/// Coarse classification of a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeRefKind {
    /// A class or interface type. The only kind usable as a service.
    Declared,
    Array,
    Primitive,
    Void,
    Other,
}

impl TypeRefKind {
    pub fn is_declared(&self) -> bool {
        matches!(self, TypeRefKind::Declared)
    }
}
