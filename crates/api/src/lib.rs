pub mod error;
pub mod host;
pub mod models;

// Re-export commonly used types
pub use error::FilerError;
pub use host::{DiagnosticSink, Filer, ProcessingHost, TypeOracle};
pub use models::*;
