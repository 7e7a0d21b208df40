mod builder;
pub use builder::Builder;

use crate::{Artifact, Config};

use polygen_core::compiler::{Compiler, Request};
use polygen_core::Schema;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the synthesis and compilation pipeline.
///
/// A generator holds no mutable state; one instance can serve any number of
/// requests, from any number of threads.
#[derive(Clone)]
pub struct Generator {
    config: Config,
    compiler: Arc<dyn Compiler>,
}

impl Generator {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Synthesizes the schema's source and compiles it.
    ///
    /// Compilation problems are reported on the returned artifact; this never
    /// fails.
    pub fn generate(&self, schema: &Schema) -> Artifact {
        let synthesis = polygen_codegen::synthesize(schema);

        let request = Request {
            crate_name: self.config.crate_name.clone(),
            units: synthesis.units(),
        };

        debug!(
            crate_name = %request.crate_name,
            units = request.units.len(),
            "compiling synthesized source"
        );

        let artifact = Artifact::from_output(self.compiler.compile(&request));

        if artifact.success() {
            info!(
                crate_name = %self.config.crate_name,
                diagnostics = artifact.diagnostics().len(),
                "generated artifact"
            );
        } else {
            warn!(
                crate_name = %self.config.crate_name,
                errors = artifact.errors().count(),
                "generation failed"
            );
        }

        artifact
    }

    /// Synthesizes the schema's source as one file, without compiling it.
    pub fn generate_as_string(&self, schema: &Schema) -> String {
        polygen_codegen::synthesize(schema).to_source()
    }
}

impl Default for Generator {
    fn default() -> Generator {
        Generator::builder().build()
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
