use super::Generator;
use crate::Config;

use polygen_compiler_syn::Syn;
use polygen_core::compiler::{Compiler, Timeout};
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    config: Config,

    /// Defaults to [`Syn`]
    compiler: Option<Arc<dyn Compiler>>,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Set the compiler used to turn synthesized source into images
    pub fn compiler(&mut self, compiler: impl Compiler + 'static) -> &mut Self {
        self.compiler = Some(Arc::new(compiler));
        self
    }

    pub fn build(&self) -> Generator {
        let compiler: Arc<dyn Compiler> = match &self.compiler {
            Some(compiler) => compiler.clone(),
            None => Arc::new(Syn::new()),
        };

        let compiler: Arc<dyn Compiler> = match self.config.compile_timeout {
            Some(limit) => Arc::new(Timeout::new(compiler, limit)),
            None => compiler,
        };

        Generator {
            config: self.config.clone(),
            compiler,
        }
    }
}
