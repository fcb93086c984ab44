use spigen_api::ProviderCandidate;
use tracing::debug;

/// Filters one pass's annotated elements down to actual provider candidates.
///
/// The marker only means something on classes and interfaces. Anything else
/// the host hands us (an annotation misattached at a point the syntax still
/// permits) is skipped without a diagnostic, since the marker's declared
/// applicability already excludes it.
pub fn scan(elements: &[ProviderCandidate]) -> impl Iterator<Item = &ProviderCandidate> {
    elements.iter().filter(|element| {
        let keep = element.kind.is_class() || element.kind.is_interface();
        if !keep {
            debug!(
                element = %element.qualified_name,
                kind = ?element.kind,
                "skipping non-type element"
            );
        }
        keep
    })
}
