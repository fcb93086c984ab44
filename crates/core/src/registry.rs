use std::collections::{BTreeMap, BTreeSet, HashSet};

use dashmap::DashMap;
use tracing::debug;

/// Process-wide accumulator mapping each service qualified name to the set of
/// provider qualified names contributed across every pass of a session.
///
/// The host may drive passes from a worker pool with shared processor state,
/// so recording must be safe under concurrent calls; the per-service set is
/// only ever touched under its shard's lock.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    providers_by_service: DashMap<String, HashSet<String>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotently adds `provider` under `service`, creating the entry if
    /// absent.
    pub fn record(&self, service: &str, provider: &str) {
        let inserted = self
            .providers_by_service
            .entry(service.to_string())
            .or_default()
            .insert(provider.to_string());
        if inserted {
            debug!(service, provider, "recorded provider");
        }
    }

    /// Drops everything accumulated so far. Only the abort-session
    /// containment policy calls this.
    pub fn reset(&self) {
        self.providers_by_service.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.providers_by_service.is_empty()
    }

    /// Number of services with at least one recorded provider.
    pub fn len(&self) -> usize {
        self.providers_by_service.len()
    }

    /// Stable, sorted view for the manifest writer. Taken once after the
    /// final pass; sorting keeps repeated builds byte-identical.
    pub fn snapshot(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.providers_by_service
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().iter().cloned().collect()))
            .collect()
    }
}
