use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use spigen_api::{Filer, FilerError};
use tracing::{debug, info};

use crate::error::{Result, SpigenError};

/// Serializes the final registry snapshot, one manifest per service.
///
/// Invoked exactly once, after all passes complete.
pub struct ManifestWriter<'a> {
    prefix: &'a str,
}

impl<'a> ManifestWriter<'a> {
    pub fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }

    /// Writes every manifest, returning how many resources were created.
    ///
    /// An already-existing resource is assumed to be a harmless re-run
    /// collision and skipped. Any other I/O failure aborts the remaining
    /// writes and surfaces the cause.
    pub fn write_all(
        &self,
        snapshot: &BTreeMap<String, BTreeSet<String>>,
        filer: &dyn Filer,
    ) -> Result<usize> {
        let mut written = 0;

        for (service, providers) in snapshot {
            if providers.is_empty() {
                continue;
            }

            let path = format!("{}/{}", self.prefix, service);
            let mut resource = match filer.create_resource(&path) {
                Ok(writer) => writer,
                Err(FilerError::AlreadyExists) => {
                    debug!(%path, "manifest already present, skipping");
                    continue;
                }
                Err(FilerError::Io(source)) => {
                    return Err(SpigenError::ManifestWrite { path, source });
                }
            };

            if let Err(source) = write_manifest(resource.as_mut(), providers) {
                return Err(SpigenError::ManifestWrite { path, source });
            }
            written += 1;
        }

        info!(manifests = written, "manifest emission finished");
        Ok(written)
    }
}

/// One provider qualified name per line, newline-terminated, UTF-8.
fn write_manifest(out: &mut dyn Write, providers: &BTreeSet<String>) -> std::io::Result<()> {
    for provider in providers {
        out.write_all(provider.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
