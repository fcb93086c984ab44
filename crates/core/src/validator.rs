use spigen_api::{EnclosingKind, Modifier, ProviderCandidate};

/// Why a candidate was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotPublic,
    InnerClass,
    NoDefaultConstructor,
}

impl Rejection {
    /// Diagnostic text attributed to the candidate.
    pub fn message(&self, simple_name: &str) -> String {
        match self {
            Rejection::NotPublic => {
                format!("Annotated provider '{simple_name}' is not a public type")
            }
            Rejection::InnerClass => {
                format!("Annotated provider '{simple_name}' must not be an inner class")
            }
            Rejection::NoDefaultConstructor => format!(
                "Annotated provider '{simple_name}' is an invalid provider type\n\
                 It does not contain a public default/no-args constructor"
            ),
        }
    }
}

/// Structural acceptance rules, applied in order; the first violation wins.
pub fn validate(candidate: &ProviderCandidate) -> Result<(), Rejection> {
    if !candidate.has_modifier(Modifier::Public) {
        return Err(Rejection::NotPublic);
    }

    // A non-static type nested in a class needs an enclosing instance, which
    // no runtime service loader can supply.
    if candidate.enclosing == EnclosingKind::Class && !candidate.has_modifier(Modifier::Static) {
        return Err(Rejection::InnerClass);
    }

    if !candidate
        .constructors
        .iter()
        .any(|constructor| constructor.is_public_no_args())
    {
        return Err(Rejection::NoDefaultConstructor);
    }

    Ok(())
}
