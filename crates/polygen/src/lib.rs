mod artifact;
pub use artifact::{Artifact, EmitResult, Image};

mod config;
pub use config::Config;

pub mod generator;
pub use generator::Generator;

pub use polygen_codegen::{synthesize, Synthesis};
pub use polygen_compiler_syn::Syn;
pub use polygen_core::{compiler, schema, Compiler, Error, Result, Schema};

/// Generation entry points on [`Schema`], using a default [`Generator`].
///
/// ```
/// use polygen::{GenerateCode, Schema};
///
/// let schema = Schema::builder()
///     .table("blogging", "Blog")
///     .column("BlogId").int32().identity().primary_key()
///     .column("Name").string().max_length(200)
///     .build()
///     .unwrap();
///
/// let artifact = schema.generate_code();
/// assert!(artifact.success());
/// ```
pub trait GenerateCode {
    /// Synthesizes and compiles the schema's data-access source.
    fn generate_code(&self) -> Artifact;

    /// Synthesizes the schema's data-access source as a single file.
    fn generate_code_as_string(&self) -> String;
}

impl GenerateCode for Schema {
    fn generate_code(&self) -> Artifact {
        Generator::default().generate(self)
    }

    fn generate_code_as_string(&self) -> String {
        Generator::default().generate_as_string(self)
    }
}
