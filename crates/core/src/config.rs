use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How a validation failure affects the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainmentPolicy {
    /// Reject and report the failing candidate, keep processing the others.
    /// Produces useful partial results for multi-declaration projects.
    #[default]
    PerCandidate,
    /// Any validation failure discards everything accumulated so far and
    /// fails the pass.
    AbortSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProcessorConfig {
    /// Namespace prefix under which manifests are created.
    pub manifest_prefix: String,
    pub containment: ContainmentPolicy,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            manifest_prefix: "META-INF/services".to_string(),
            containment: ContainmentPolicy::PerCandidate,
        }
    }
}

impl ProcessorConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
