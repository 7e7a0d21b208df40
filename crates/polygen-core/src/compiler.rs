mod timeout;
pub use timeout::Timeout;

use indexmap::IndexMap;
use std::fmt;

/// Name of the unit declaring every other unit as a module.
pub const ROOT_UNIT: &str = "lib.rs";

/// Turns synthesized source units into compiled images.
///
/// Implementations report every problem as a [`Diagnostic`] on a failed
/// [`Output`]; compilation itself never fails with an error.
pub trait Compiler: Send + Sync {
    fn compile(&self, request: &Request) -> Output;
}

impl<C: Compiler + ?Sized> Compiler for std::sync::Arc<C> {
    fn compile(&self, request: &Request) -> Output {
        (**self).compile(request)
    }
}

impl<C: Compiler + ?Sized> Compiler for Box<C> {
    fn compile(&self, request: &Request) -> Output {
        (**self).compile(request)
    }
}

/// Source to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Name of the crate the units form
    pub crate_name: String,

    /// Source units keyed by file name, `lib.rs` first
    pub units: IndexMap<String, String>,
}

/// Result of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub success: bool,

    /// Problems found, in the order they were found
    pub diagnostics: Vec<Diagnostic>,

    /// Present iff `success`
    pub images: Option<Images>,
}

/// The three compiled images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Images {
    pub binary: Vec<u8>,
    pub debug: Vec<u8>,
    pub documentation: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Position within a source unit. Lines start at 1, columns at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub unit: String,
    pub line: usize,
    pub column: usize,
}

impl Request {
    pub fn new(crate_name: impl Into<String>) -> Request {
        Request {
            crate_name: crate_name.into(),
            units: IndexMap::new(),
        }
    }

    pub fn unit(mut self, name: impl Into<String>, source: impl Into<String>) -> Request {
        self.units.insert(name.into(), source.into());
        self
    }
}

impl Output {
    pub fn succeeded(images: Images, diagnostics: Vec<Diagnostic>) -> Output {
        debug_assert!(diagnostics
            .iter()
            .all(|diagnostic| diagnostic.severity != Severity::Error));

        Output {
            success: true,
            diagnostics,
            images: Some(images),
        }
    }

    pub fn failed(diagnostics: Vec<Diagnostic>) -> Output {
        Output {
            success: false,
            diagnostics,
            images: None,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(Severity::Info, message)
    }

    pub fn new(severity: Severity, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, unit: impl Into<String>, line: usize, column: usize) -> Diagnostic {
        self.location = Some(Location {
            unit: unit.into(),
            line,
            column,
        });
        self
    }
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.unit, self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {location}: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
