use std::time::Duration;

/// Configuration for code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the crate formed by the synthesized units
    pub crate_name: String,

    /// Upper bound on a single compilation; unbounded when `None`
    pub compile_timeout: Option<Duration>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the crate name
    pub fn crate_name(mut self, crate_name: impl Into<String>) -> Self {
        self.crate_name = crate_name.into();
        self
    }

    /// Bound the time spent compiling
    pub fn compile_timeout(mut self, limit: Duration) -> Self {
        self.compile_timeout = Some(limit);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crate_name: "polygen_generated".to_string(),
            compile_timeout: None,
        }
    }
}
