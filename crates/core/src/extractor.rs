use spigen_api::{Diagnostic, DiagnosticSink, ProviderCandidate, TypeOracle};
use tracing::trace;

/// Outcome of reading a validated candidate's declared service list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Qualified names of every service the candidate registers under.
    /// Unusable entries were already dropped with a warning.
    Services(Vec<String>),
    /// At least one declared service is not a supertype of the candidate.
    /// No partial registration: the whole candidate is rejected so the
    /// registry stays internally consistent.
    NotAssignable,
}

/// Walks the candidate's declared service references.
///
/// Entries that are not declared types (arrays, primitives, `void`) get a
/// warning and are skipped; a failed assignability check is an error and
/// aborts the candidate.
pub fn extract(
    candidate: &ProviderCandidate,
    oracle: &dyn TypeOracle,
    diagnostics: &dyn DiagnosticSink,
) -> Extraction {
    let mut services = Vec::with_capacity(candidate.declared_services.len());

    for &service_ref in &candidate.declared_services {
        let kind = oracle.ref_kind(service_ref);
        if !kind.is_declared() {
            diagnostics.report(Diagnostic::warning(
                &candidate.qualified_name,
                format!(
                    "Annotation value of kind '{kind:?}' is not a valid service type \
                     (non-final class or interface)\nIgnoring entry"
                ),
            ));
            continue;
        }

        // A declared type the host cannot name is as unusable as an array entry.
        let Some(service_name) = oracle.qualified_name(service_ref) else {
            diagnostics.report(Diagnostic::warning(
                &candidate.qualified_name,
                "Annotation value could not be resolved to a named type\nIgnoring entry",
            ));
            continue;
        };

        if !oracle.is_assignable(candidate.type_ref, service_ref) {
            diagnostics.report(Diagnostic::error(
                &candidate.qualified_name,
                format!(
                    "Annotated provider '{}' is not assignable from service '{}'",
                    candidate.simple_name, service_name
                ),
            ));
            return Extraction::NotAssignable;
        }

        trace!(
            provider = %candidate.qualified_name,
            service = %service_name,
            "accepted service entry"
        );
        services.push(service_name);
    }

    Extraction::Services(services)
}
