use super::{util, Expand};
use polygen_core::schema::{Column, Relationship};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    /// Implements the support `Entity` trait, describing the table to callers.
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let support = &self.support;
        let entity_ident = util::entity_ident(self.table);
        let namespace = util::str_lit(&self.table.namespace);
        let name = util::str_lit(&self.table.name);
        let columns = self
            .table
            .columns
            .iter()
            .map(|column| self.expand_column_info(column));
        let primary_key = self
            .table
            .primary_key_columns()
            .map(|column| util::str_lit(&util::unraw(&util::property_ident(column))));
        let foreign_keys = self
            .relationships
            .iter()
            .map(|relationship| self.expand_foreign_key_info(relationship));
        let key = self.expand_key();
        let concurrency_token = self.expand_concurrency_token();

        quote! {
            impl #support::Entity for #entity_ident {
                const NAMESPACE: &'static str = #namespace;
                const NAME: &'static str = #name;

                const COLUMNS: &'static [#support::ColumnInfo] = &[
                    #( #columns ),*
                ];

                const PRIMARY_KEY: &'static [&'static str] = &[
                    #( #primary_key ),*
                ];

                const FOREIGN_KEYS: &'static [#support::ForeignKeyInfo] = &[
                    #( #foreign_keys ),*
                ];

                #key
                #concurrency_token
            }
        }
    }

    fn expand_column_info(&self, column: &Column) -> TokenStream {
        let support = &self.support;
        let name = util::str_lit(&column.name);
        let property = util::str_lit(&util::unraw(&util::property_ident(column)));
        let data_type = format_ident!("{}", column.ty.as_str());
        let nullable = column.nullable;
        let primary_key = column.primary_key;
        let unique = column.unique;
        let concurrency_token = column.is_concurrency_token();

        let max_length = match column.max_length {
            Some(max_length) => {
                let max_length = util::u32_lit(max_length);
                quote!(::std::option::Option::Some(#max_length))
            }
            None => quote!(::std::option::Option::None),
        };

        let generated = if column.identity {
            quote!(OnInsert)
        } else if column.is_concurrency_token() {
            quote!(OnInsertOrUpdate)
        } else if column.computed {
            quote!(Computed)
        } else {
            quote!(Never)
        };

        quote! {
            #support::ColumnInfo {
                name: #name,
                property: #property,
                data_type: #support::DataType::#data_type,
                nullable: #nullable,
                primary_key: #primary_key,
                unique: #unique,
                max_length: #max_length,
                generated: #support::Generated::#generated,
                concurrency_token: #concurrency_token,
            }
        }
    }

    fn expand_foreign_key_info(&self, relationship: &Relationship) -> TokenStream {
        let support = &self.support;
        let target = relationship.target(self.schema);
        let name = util::str_lit(&relationship.name);
        let navigation = util::str_lit(&relationship.navigation.snake_case());
        let target_namespace = util::str_lit(&target.namespace);
        let target_name = util::str_lit(&target.name);

        let columns = relationship.columns.iter().map(|fk| {
            let source = util::str_lit(&self.schema.column(fk.source).name);
            let target = util::str_lit(&self.schema.column(fk.target).name);
            quote!((#source, #target))
        });

        let on_delete = format_ident!("{}", relationship.on_delete.as_str());
        let cardinality = format_ident!("{}", relationship.cardinality.as_str());

        quote! {
            #support::ForeignKeyInfo {
                name: #name,
                navigation: #navigation,
                target_namespace: #target_namespace,
                target: #target_name,
                columns: &[ #( #columns ),* ],
                on_delete: #support::DeleteAction::#on_delete,
                cardinality: #support::Cardinality::#cardinality,
            }
        }
    }

    /// `type Key` and `key()`: the primary key values, in declaration order.
    fn expand_key(&self) -> TokenStream {
        let self_ = quote!(self);

        let types = self
            .table
            .primary_key_columns()
            .map(|column| util::rust_type(column, &self.support));
        let values = self
            .table
            .primary_key_columns()
            .map(|column| util::read_column(&self_, column));

        quote! {
            type Key = ( #( #types, )* );

            fn key(&self) -> Self::Key {
                ( #( #values, )* )
            }
        }
    }

    fn expand_concurrency_token(&self) -> TokenStream {
        let support = &self.support;

        let Some(column) = self.table.concurrency_token() else {
            return quote!();
        };

        let property = util::property_ident(column);

        let body = if column.nullable {
            quote!(self.#property.as_ref())
        } else {
            quote!(::std::option::Option::Some(&self.#property))
        };

        quote! {
            fn concurrency_token(&self) -> ::std::option::Option<&#support::RowVersion> {
                #body
            }
        }
    }
}
