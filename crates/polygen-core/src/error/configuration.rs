use super::{Error, ErrorKind};

/// One invalid or contradictory column configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationIssue {
    /// The offending column, qualified as `namespace.table.column` once the
    /// column belongs to a table.
    pub column: String,

    /// What is wrong with it
    pub message: String,
}

impl ConfigurationIssue {
    pub fn new(column: impl Into<String>, message: impl Into<String>) -> ConfigurationIssue {
        ConfigurationIssue {
            column: column.into(),
            message: message.into(),
        }
    }

    pub(crate) fn qualified(mut self, table: &str) -> ConfigurationIssue {
        self.column = format!("{table}.{}", self.column);
        self
    }
}

impl core::fmt::Display for ConfigurationIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}`: {}", self.column, self.message)
    }
}

/// Error when column builders were configured with inapplicable or
/// contradictory options.
///
/// This occurs when:
/// - a facet does not apply to the column type (`max_length` on `Int32`)
/// - a required facet is missing (`String` without `max_length`)
/// - two options exclude each other (`nullable` with `primary_key`)
#[derive(Debug)]
pub(super) struct ConfigurationError {
    issues: Vec<ConfigurationIssue>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid column configuration: ")?;

        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(issue, f)?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a configuration error carrying every issue found.
    pub fn configuration(issues: Vec<ConfigurationIssue>) -> Error {
        debug_assert!(!issues.is_empty());
        Error::from(ErrorKind::Configuration(ConfigurationError { issues }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.configuration_issues().is_some()
    }

    /// The column issues of a configuration error.
    pub fn configuration_issues(&self) -> Option<&[ConfigurationIssue]> {
        match self.kind() {
            ErrorKind::Configuration(err) => Some(&err.issues[..]),
            _ => None,
        }
    }
}
