mod check;

pub mod image;
pub use image::{DocIndex, LineTable, Manifest};

mod walk;

use polygen_core::compiler::{Compiler, Diagnostic, Output, Request, Severity, ROOT_UNIT};
use tracing::{debug, trace, warn};

/// Compiles source units by parsing them with `syn`.
///
/// Every unit must parse as a Rust file. `lib.rs` must declare each other
/// unit as a module, and no scope may define the same name twice. On success
/// three images are emitted:
///
/// * binary: a `bincode` [`Manifest`] of every unit's items and tokens
/// * debug: a JSON [`LineTable`] mapping each item to its source position
/// * documentation: a JSON [`DocIndex`] of every documented item
#[derive(Debug, Clone, Copy, Default)]
pub struct Syn;

impl Syn {
    pub fn new() -> Syn {
        Syn
    }
}

impl Compiler for Syn {
    fn compile(&self, request: &Request) -> Output {
        debug!(
            crate_name = %request.crate_name,
            units = request.units.len(),
            "compiling"
        );

        if request.units.is_empty() {
            return Output::failed(vec![Diagnostic::error("request contains no source units")]);
        }

        let mut diagnostics = vec![];
        let mut files = vec![];

        for (name, source) in &request.units {
            match check::parse(name, source) {
                Ok(file) => {
                    trace!(unit = %name, items = file.items.len(), "parsed unit");
                    files.push((name, file));
                }
                Err(errors) => diagnostics.extend(errors),
            }
        }

        let root = files
            .iter()
            .find(|(name, _)| *name == ROOT_UNIT)
            .map(|(_, file)| file);
        diagnostics.extend(check::modules(request, root));

        let mut units = vec![];

        for (name, file) in &files {
            let module = walk::module_path(&request.crate_name, name, ROOT_UNIT);
            let unit = walk::unit(name, module, file);

            diagnostics.extend(check::duplicates(&unit));
            diagnostics.extend(check::empty(&unit));

            units.push((unit, file));
        }

        for diagnostic in &diagnostics {
            if diagnostic.severity >= Severity::Warning {
                warn!(%diagnostic, "compilation diagnostic");
            }
        }

        if diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
        {
            return Output::failed(diagnostics);
        }

        match image::emit(&request.crate_name, &units) {
            Ok(images) => {
                debug!(
                    binary = images.binary.len(),
                    debug = images.debug.len(),
                    documentation = images.documentation.len(),
                    "emitted images"
                );
                Output::succeeded(images, diagnostics)
            }
            Err(diagnostic) => {
                diagnostics.push(diagnostic);
                Output::failed(diagnostics)
            }
        }
    }
}
