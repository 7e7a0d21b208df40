//! Shared fixtures for the end-to-end generation tests.

mod fixtures;
pub use fixtures::*;

mod recording;
pub use recording::Recording;

pub use polygen::compiler::{Diagnostic, Images, Output, Request, Severity};
pub use polygen::{Artifact, Compiler, Config, GenerateCode, Generator, Schema};
pub use polygen_compiler_syn::{DocIndex, LineTable, Manifest};
