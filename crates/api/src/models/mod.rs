pub mod diagnostic;
pub mod element;
pub mod types;

pub use diagnostic::*;
pub use element::*;
pub use types::*;
