use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpigenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed writing manifest '{path}': {source}")]
    ManifestWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("session aborted: {0}")]
    SessionAborted(String),
}

pub type Result<T> = std::result::Result<T, SpigenError>;
