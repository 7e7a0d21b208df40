use super::{Error, ErrorKind};

/// Error when a builder is mutated or finalized after `build()` succeeded.
#[derive(Debug)]
pub(super) struct UseAfterBuildError {
    column: Box<str>,
}

impl std::error::Error for UseAfterBuildError {}

impl core::fmt::Display for UseAfterBuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column builder `{}` was used after build", self.column)
    }
}

impl Error {
    /// Creates a use-after-build error for the named column builder.
    pub fn use_after_build(column: impl Into<String>) -> Error {
        Error::from(ErrorKind::UseAfterBuild(UseAfterBuildError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a use-after-build error.
    pub fn is_use_after_build(&self) -> bool {
        matches!(self.kind(), ErrorKind::UseAfterBuild(_))
    }
}
