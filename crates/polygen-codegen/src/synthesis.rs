use polygen_core::compiler::ROOT_UNIT;

use indexmap::IndexMap;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use tracing::warn;

/// Rust source synthesized from a schema.
///
/// Made of the `support` module followed by one module per namespace, in the
/// order namespaces were first declared. It renders either as separate
/// source units ([`Synthesis::units`]) or as a single file with inline
/// modules ([`Synthesis::to_source`]).
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub(crate) modules: Vec<Module>,
}

#[derive(Debug, Clone)]
pub(crate) struct Module {
    pub(crate) ident: Ident,

    /// File name of the module's unit, without extension
    pub(crate) file_stem: String,

    /// Module level documentation
    pub(crate) doc: String,

    pub(crate) items: TokenStream,
}

const CRATE_DOC: &str = " Data-access entities generated from a relational schema.";

impl Synthesis {
    /// Source units keyed by file name: `lib.rs` declaring every module,
    /// then one unit per module.
    pub fn units(&self) -> IndexMap<String, String> {
        let mut units = IndexMap::new();

        let declarations = self.modules.iter().map(|module| {
            let ident = &module.ident;
            quote!(pub mod #ident;)
        });

        units.insert(
            ROOT_UNIT.to_string(),
            render(quote! {
                #![doc = #CRATE_DOC]
                #( #declarations )*
            }),
        );

        for module in &self.modules {
            let doc = &module.doc;
            let items = &module.items;

            units.insert(
                format!("{}.rs", module.file_stem),
                render(quote! {
                    #![doc = #doc]
                    #items
                }),
            );
        }

        units
    }

    /// The whole synthesis as one file with inline modules.
    pub fn to_source(&self) -> String {
        let modules = self.modules.iter().map(|module| {
            let ident = &module.ident;
            let doc = &module.doc;
            let items = &module.items;

            quote! {
                #[doc = #doc]
                pub mod #ident {
                    #items
                }
            }
        });

        render(quote! {
            #![doc = #CRATE_DOC]
            #( #modules )*
        })
    }

    /// Names of the modules, `support` first.
    pub fn modules(&self) -> impl Iterator<Item = String> + '_ {
        self.modules.iter().map(|module| module.file_stem.clone())
    }
}

/// Pretty-prints a file's tokens.
///
/// Tokens that do not parse as a file are returned unformatted so the
/// compiler can report the problem with the rest of its diagnostics.
fn render(tokens: TokenStream) -> String {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => prettyplease::unparse(&file),
        Err(err) => {
            warn!(%err, "synthesized tokens are not a valid file");
            tokens.to_string()
        }
    }
}
