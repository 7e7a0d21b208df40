use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// The insert shape: only the columns callers may set.
    pub(super) fn expand_insert_struct(&self) -> TokenStream {
        let entity_ident = util::entity_ident(self.table);
        let insert_ident = util::insert_ident(self.table);
        let doc = util::doc(&format!("Values for inserting a new [`{entity_ident}`]."));

        let fields = self
            .table
            .columns
            .iter()
            .filter(|column| column.is_settable())
            .map(|column| {
                let property = util::property_ident(column);
                let ty = util::rust_type(column, &self.support);
                let doc = util::column_doc(column);

                quote! {
                    #doc
                    pub #property: #ty,
                }
            });

        quote! {
            #doc
            #[derive(Debug, Clone, PartialEq)]
            pub struct #insert_ident {
                #( #fields )*
            }
        }
    }
}
