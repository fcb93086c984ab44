use std::io::Write;

use crate::error::FilerError;
use crate::models::{Diagnostic, TypeRef, TypeRefKind};

/// Type-system queries answered by the host compiler.
///
/// The engine is written purely against this seam, so a unit test can drive
/// it with a fake oracle and no compiler at all.
pub trait TypeOracle: Send + Sync {
    fn ref_kind(&self, type_ref: TypeRef) -> TypeRefKind;

    /// Whether `sub` is assignable to `sup` (identical to, or a subtype of).
    fn is_assignable(&self, sub: TypeRef, sup: TypeRef) -> bool;

    /// Qualified binary name of a declared type. `None` for handles the host
    /// cannot resolve to a named element.
    fn qualified_name(&self, type_ref: TypeRef) -> Option<String>;
}

/// Where validation output goes. The host maps these onto its own
/// compiler-diagnostic stream.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Resource-creation facility for generated manifests.
pub trait Filer: Send + Sync {
    /// Open a new resource at `path` (relative to the host's output root).
    ///
    /// Returns `FilerError::AlreadyExists` if a previous run or pass already
    /// produced the resource; the caller decides whether that is fatal.
    fn create_resource(&self, path: &str) -> Result<Box<dyn Write>, FilerError>;
}

/// Composite host surface the engine drives one pass against.
/// Lets callers hand over a single object instead of two.
pub trait ProcessingHost: TypeOracle + DiagnosticSink {}

impl<T: TypeOracle + DiagnosticSink> ProcessingHost for T {}
