mod expand;

mod synthesis;
pub use synthesis::Synthesis;

pub use polygen_core::compiler::ROOT_UNIT;

use expand::util;
use synthesis::Module;

use polygen_core::Schema;
use tracing::debug;

/// Synthesizes the data-access source for a schema.
///
/// Pure and deterministic: the same schema always yields the same source.
pub fn synthesize(schema: &Schema) -> Synthesis {
    let mut modules = vec![Module {
        ident: util::ident("support"),
        file_stem: "support".to_string(),
        doc: " Types shared by every generated entity.".to_string(),
        items: expand::support(),
    }];

    for namespace in schema.namespaces() {
        let ident = util::module_ident(namespace);

        modules.push(Module {
            file_stem: util::unraw(&ident),
            ident,
            doc: format!(" Entities of the `{namespace}` namespace."),
            items: expand::namespace(schema, namespace),
        });
    }

    debug!(
        modules = modules.len(),
        tables = schema.tables.len(),
        "synthesized source"
    );

    Synthesis { modules }
}
