use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use spigen_api::{Filer, FilerError};

/// `Filer` backed by a plain output directory, behaving like a build tool's
/// class-output location: resources are created fresh, never overwritten.
#[derive(Debug, Clone)]
pub struct FsFiler {
    root: PathBuf,
}

impl FsFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Filer for FsFiler {
    fn create_resource(&self, path: &str) -> std::result::Result<Box<dyn Write>, FilerError> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(FilerError::Io)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&full) {
            Ok(file) => Ok(Box::new(BufWriter::new(file))),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(FilerError::AlreadyExists),
            Err(e) => Err(FilerError::Io(e)),
        }
    }
}
