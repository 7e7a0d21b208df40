use polygen_core::schema::{Column, Name, Table, Type};

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{format_ident, quote};

/// Identifier for `name`, emitted as a raw identifier when it is a keyword.
pub(crate) fn ident(name: &str) -> Ident {
    match syn::parse_str::<Ident>(name) {
        Ok(ident) => ident,
        Err(_) => Ident::new_raw(name, Span::call_site()),
    }
}

/// `name` without a leading `r#`.
pub(crate) fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

pub(crate) fn module_ident(namespace: &str) -> Ident {
    ident(&Name::new(namespace).snake_case())
}

pub(crate) fn entity_ident(table: &Table) -> Ident {
    ident(&table.entity_name().upper_camel_case())
}

pub(crate) fn insert_ident(table: &Table) -> Ident {
    format_ident!("New{}", table.entity_name().upper_camel_case())
}

pub(crate) fn property_ident(column: &Column) -> Ident {
    ident(&column.property_name().snake_case())
}

/// Absolute path of a table's entity type.
pub(crate) fn entity_path(table: &Table) -> TokenStream {
    let module = ident(&table.module_name().snake_case());
    let entity = entity_ident(table);
    quote!(crate::#module::#entity)
}

/// The generated type of a column, `Option` wrapped when nullable.
pub(crate) fn rust_type(column: &Column, support: &TokenStream) -> TokenStream {
    let ty = value_type(column, support);

    if column.nullable {
        quote!(::std::option::Option<#ty>)
    } else {
        ty
    }
}

fn value_type(column: &Column, support: &TokenStream) -> TokenStream {
    match column.ty {
        Type::Boolean => quote!(bool),
        Type::Byte => quote!(u8),
        Type::Int16 => quote!(i16),
        Type::Int32 => quote!(i32),
        Type::Int64 => quote!(i64),
        Type::Double => quote!(f64),
        Type::String => quote!(::std::string::String),
        Type::Char if is_single_char(column) => quote!(char),
        Type::Char => quote!(::std::string::String),
        Type::Date => quote!(#support::Date),
        Type::DateTime => quote!(#support::DateTime),
        Type::Binary => quote!(::std::vec::Vec<u8>),
        Type::RowVersion => quote!(#support::RowVersion),
    }
}

fn is_single_char(column: &Column) -> bool {
    column.max_length.unwrap_or(1) == 1
}

/// Whether two columns generate the same value type.
pub(crate) fn same_value_type(a: &Column, b: &Column) -> bool {
    a.ty == b.ty && (a.ty != Type::Char || is_single_char(a) == is_single_char(b))
}

/// Whether the generated type of the column is `Copy`.
pub(crate) fn is_copy(column: &Column) -> bool {
    match column.ty {
        Type::String | Type::Binary => false,
        Type::Char => is_single_char(column),
        _ => true,
    }
}

/// Reads a column's value out of `receiver`, copying or cloning it.
///
/// Store-generated columns are private to their entity's module and are read
/// through their getter.
pub(crate) fn read_column(receiver: &TokenStream, column: &Column) -> TokenStream {
    let property = property_ident(column);

    let access = if column.is_settable() {
        quote!(#receiver.#property)
    } else {
        quote!(#receiver.#property())
    };

    if is_copy(column) {
        access
    } else {
        quote!(#access.clone())
    }
}

pub(crate) fn str_lit(value: &str) -> Literal {
    Literal::string(value)
}

pub(crate) fn u32_lit(value: u32) -> Literal {
    Literal::u32_unsuffixed(value)
}

/// `#[doc = "..."]` with the leading space `///` comments carry.
pub(crate) fn doc(text: &str) -> TokenStream {
    let text = format!(" {text}");
    quote!(#[doc = #text])
}

/// Documents a column: its name and its length constraint.
pub(crate) fn column_doc(column: &Column) -> TokenStream {
    let mut text = format!("Column `{}`", column.name);

    if let Some(max_length) = column.max_length {
        let unit = if max_length == 1 {
            "character"
        } else {
            "characters"
        };
        text.push_str(&format!(", at most {max_length} {unit}"));
    }

    if column.identity {
        text.push_str(", assigned by the data store on insert");
    } else if column.is_concurrency_token() {
        text.push_str(", the row's concurrency token");
    } else if column.computed {
        text.push_str(", computed by the data store");
    }

    text.push('.');
    doc(&text)
}
