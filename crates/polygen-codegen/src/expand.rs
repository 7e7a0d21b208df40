mod entity;
mod insert;
mod metadata;
mod navigation;
mod support;
pub(crate) mod util;

pub(crate) use support::support;

use polygen_core::schema::{Relationship, Schema, Table};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    schema: &'a Schema,

    /// The table being expanded
    table: &'a Table,

    /// Relationships whose source is the table
    relationships: Vec<&'a Relationship>,

    /// Path prefix for support types
    support: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_struct = self.expand_entity_struct();
        let entity_methods = self.expand_entity_methods();
        let insert_struct = self.expand_insert_struct();
        let entity_impl = self.expand_entity_impl();

        quote! {
            #entity_struct
            #entity_methods
            #insert_struct
            #entity_impl
        }
    }
}

/// Items of one namespace module: every entity declared in it, in
/// declaration order.
pub(crate) fn namespace(schema: &Schema, namespace: &str) -> TokenStream {
    schema
        .tables_in(namespace)
        .map(|table| {
            Expand {
                schema,
                table,
                relationships: schema.relationships_from(table).collect(),
                support: quote!(crate::support),
            }
            .expand()
        })
        .collect()
}
