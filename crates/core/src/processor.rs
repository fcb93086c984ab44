use spigen_api::{Diagnostic, DiagnosticSink, Filer, ProcessingHost, ProviderCandidate, TypeOracle};
use tracing::{info, warn};

use crate::config::{ContainmentPolicy, ProcessorConfig};
use crate::error::{Result, SpigenError};
use crate::extractor::{self, Extraction};
use crate::registry::ServiceRegistry;
use crate::scanner;
use crate::validator;
use crate::writer::ManifestWriter;

/// One pass worth of marker-annotated elements, snapshotted from the host.
#[derive(Debug, Clone, Default)]
pub struct PassInput {
    pub elements: Vec<ProviderCandidate>,
}

/// What happened during a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    pub candidates: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Session driver.
///
/// Owns the registry for the whole generation run: feed it one pass at a time
/// with [`Processor::process_pass`], then flush manifests exactly once with
/// [`Processor::finish`]. Everything except the registry is stateless per
/// invocation.
pub struct Processor {
    config: ProcessorConfig,
    registry: ServiceRegistry,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            registry: ServiceRegistry::new(),
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Runs scanner, validator, extractor and accumulator over one pass.
    ///
    /// Rejections are reported through the host's diagnostic sink. Under the
    /// default per-candidate policy they never fail the pass; under
    /// [`ContainmentPolicy::AbortSession`] the first rejection wipes the
    /// registry and returns an error.
    pub fn process_pass(&self, pass: &PassInput, host: &dyn ProcessingHost) -> Result<PassSummary> {
        let oracle: &dyn TypeOracle = host;
        let diagnostics: &dyn DiagnosticSink = host;

        let mut summary = PassSummary::default();

        for candidate in scanner::scan(&pass.elements) {
            summary.candidates += 1;

            if let Err(rejection) = validator::validate(candidate) {
                diagnostics.report(Diagnostic::error(
                    &candidate.qualified_name,
                    rejection.message(&candidate.simple_name),
                ));
                summary.rejected += 1;
                self.contain_rejection(candidate)?;
                continue;
            }

            match extractor::extract(candidate, oracle, diagnostics) {
                Extraction::Services(services) => {
                    for service in &services {
                        self.registry.record(service, &candidate.qualified_name);
                    }
                    summary.accepted += 1;
                }
                Extraction::NotAssignable => {
                    summary.rejected += 1;
                    self.contain_rejection(candidate)?;
                }
            }
        }

        info!(
            candidates = summary.candidates,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "pass complete"
        );
        Ok(summary)
    }

    /// Flushes the accumulated registry into per-service manifests. Call
    /// once, after the final pass.
    pub fn finish(&self, filer: &dyn Filer) -> Result<usize> {
        let snapshot = self.registry.snapshot();
        info!(services = snapshot.len(), "writing service manifests");
        ManifestWriter::new(&self.config.manifest_prefix).write_all(&snapshot, filer)
    }

    fn contain_rejection(&self, candidate: &ProviderCandidate) -> Result<()> {
        match self.config.containment {
            ContainmentPolicy::PerCandidate => Ok(()),
            ContainmentPolicy::AbortSession => {
                warn!(
                    candidate = %candidate.qualified_name,
                    "discarding registry, abort-session policy in effect"
                );
                self.registry.reset();
                Err(SpigenError::SessionAborted(format!(
                    "validation failed for '{}'",
                    candidate.qualified_name
                )))
            }
        }
    }
}
