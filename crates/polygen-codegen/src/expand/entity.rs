use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_struct(&self) -> TokenStream {
        let entity_ident = util::entity_ident(self.table);
        let doc = util::doc(&format!(
            "Entity for table `{}`.",
            self.table.qualified_name()
        ));

        let fields = self.table.columns.iter().map(|column| {
            let property = util::property_ident(column);
            let ty = util::rust_type(column, &self.support);
            let doc = util::column_doc(column);

            if column.is_settable() {
                quote! {
                    #doc
                    pub #property: #ty,
                }
            } else {
                quote! {
                    #property: #ty,
                }
            }
        });

        let navigation_fields = self.expand_navigation_fields();

        quote! {
            #doc
            #[derive(Debug, Clone, PartialEq)]
            pub struct #entity_ident {
                #( #fields )*
                #navigation_fields
            }
        }
    }

    pub(super) fn expand_entity_methods(&self) -> TokenStream {
        let entity_ident = util::entity_ident(self.table);
        let from_row = self.expand_from_row();
        let getters = self.expand_getters();
        let navigation_methods = self.expand_navigation_methods();

        quote! {
            impl #entity_ident {
                #from_row
                #getters
                #navigation_methods
            }
        }
    }

    fn expand_from_row(&self) -> TokenStream {
        let params = self.table.columns.iter().map(|column| {
            let property = util::property_ident(column);
            let ty = util::rust_type(column, &self.support);
            quote!(#property: #ty)
        });

        let inits = self.table.columns.iter().map(util::property_ident);
        let navigation_inits = self.expand_navigation_inits();

        let too_many_arguments = if self.table.columns.len() > 7 {
            quote!(#[allow(clippy::too_many_arguments)])
        } else {
            quote!()
        };

        quote! {
            /// Builds the entity from the values of a row, in column order.
            #too_many_arguments
            pub fn from_row(#( #params ),*) -> Self {
                Self {
                    #( #inits, )*
                    #navigation_inits
                }
            }
        }
    }

    /// Read-only access to the columns the data store assigns.
    fn expand_getters(&self) -> TokenStream {
        self.table
            .columns
            .iter()
            .filter(|column| !column.is_settable())
            .map(|column| {
                let property = util::property_ident(column);
                let ty = util::rust_type(column, &self.support);
                let doc = util::column_doc(column);

                if util::is_copy(column) {
                    quote! {
                        #doc
                        pub fn #property(&self) -> #ty {
                            self.#property
                        }
                    }
                } else {
                    quote! {
                        #doc
                        pub fn #property(&self) -> &#ty {
                            &self.#property
                        }
                    }
                }
            })
            .collect()
    }
}
