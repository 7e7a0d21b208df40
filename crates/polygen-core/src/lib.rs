pub mod compiler;
pub use compiler::Compiler;

mod error;
pub use error::{ConfigurationIssue, Error, Violation};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses polygen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
