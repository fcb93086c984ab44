/// Failure modes of a host `Filer` implementation.
#[derive(Debug, thiserror::Error)]
pub enum FilerError {
    #[error("resource already exists")]
    AlreadyExists,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
