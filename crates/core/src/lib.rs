pub mod config;
pub mod error;
pub mod logging;

pub mod extractor;
pub mod filer;
pub mod processor;
pub mod registry;
pub mod scanner;
pub mod validator;
pub mod writer;

pub use config::{ContainmentPolicy, ProcessorConfig};
pub use error::{Result, SpigenError};
pub use filer::FsFiler;
pub use processor::{PassInput, PassSummary, Processor};
pub use registry::ServiceRegistry;
