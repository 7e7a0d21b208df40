use super::{util, Expand};
use polygen_core::schema::Relationship;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

impl Expand<'_> {
    pub(super) fn expand_navigation_fields(&self) -> TokenStream {
        self.relationships
            .iter()
            .map(|relationship| {
                let field = navigation_ident(relationship);
                let target = util::entity_path(relationship.target(self.schema));

                quote! {
                    #field: ::std::option::Option<::std::boxed::Box<#target>>,
                }
            })
            .collect()
    }

    pub(super) fn expand_navigation_inits(&self) -> TokenStream {
        self.relationships
            .iter()
            .map(|relationship| {
                let field = navigation_ident(relationship);
                quote!(#field: ::std::option::Option::None,)
            })
            .collect()
    }

    pub(super) fn expand_navigation_methods(&self) -> TokenStream {
        self.relationships
            .iter()
            .map(|relationship| self.expand_navigation_accessors(relationship))
            .collect()
    }

    fn expand_navigation_accessors(&self, relationship: &Relationship) -> TokenStream {
        let field = navigation_ident(relationship);
        let setter = format_ident!("set_{}", util::unraw(&field));
        let target_table = relationship.target(self.schema);
        let target = util::entity_path(target_table);

        let get_doc = util::doc(&format!(
            "The `{}` referenced through `{}`, if attached.",
            target_table.qualified_name(),
            relationship.name
        ));
        let set_doc = util::doc(&format!(
            "Attaches the referenced `{}`, copying its key into the foreign key columns.",
            target_table.qualified_name()
        ));

        let key_assignments = self.expand_key_assignments(relationship);

        quote! {
            #get_doc
            pub fn #field(&self) -> ::std::option::Option<&#target> {
                self.#field.as_deref()
            }

            #set_doc
            pub fn #setter(&mut self, value: #target) {
                #key_assignments
                self.#field = ::std::option::Option::Some(::std::boxed::Box::new(value));
            }
        }
    }

    /// Copies the referenced key into each settable foreign key column.
    fn expand_key_assignments(&self, relationship: &Relationship) -> TokenStream {
        let value = quote!(value);

        relationship
            .columns
            .iter()
            .filter_map(|fk| {
                let source = self.schema.column(fk.source);
                let target = self.schema.column(fk.target);

                // Only non-null keys of the same generated type are copied.
                if target.nullable
                    || !source.is_settable()
                    || !util::same_value_type(source, target)
                {
                    return None;
                }

                let property = util::property_ident(source);
                let read = util::read_column(&value, target);

                Some(if source.nullable {
                    quote!(self.#property = ::std::option::Option::Some(#read);)
                } else {
                    quote!(self.#property = #read;)
                })
            })
            .collect()
    }
}

fn navigation_ident(relationship: &Relationship) -> Ident {
    util::ident(&relationship.navigation.snake_case())
}
