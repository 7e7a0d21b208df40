mod configuration;
mod schema_validation;
mod use_after_build;

use configuration::ConfigurationError;
use schema_validation::SchemaValidationError;
use std::sync::Arc;
use use_after_build::UseAfterBuildError;

pub use configuration::ConfigurationIssue;
pub use schema_validation::Violation;

/// An error that can occur while building a schema.
///
/// Compilation problems are not represented here: they are reported as
/// diagnostics on a non-successful artifact.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Configuration(ConfigurationError),
    UseAfterBuild(UseAfterBuildError),
    SchemaValidation(SchemaValidationError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Configuration(err) => core::fmt::Display::fmt(err, f),
            UseAfterBuild(err) => core::fmt::Display::fmt(err, f),
            SchemaValidation(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}
