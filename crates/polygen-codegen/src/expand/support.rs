use polygen_core::schema::Type;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Every abstract column type, in the order the `DataType` enum lists them.
const DATA_TYPES: &[Type] = &[
    Type::Boolean,
    Type::Byte,
    Type::Int16,
    Type::Int32,
    Type::Int64,
    Type::Double,
    Type::String,
    Type::Char,
    Type::Date,
    Type::DateTime,
    Type::Binary,
    Type::RowVersion,
];

/// Items of the support module shared by every entity.
pub(crate) fn support() -> TokenStream {
    let data_types = DATA_TYPES.iter().map(|ty| format_ident!("{}", ty.as_str()));

    quote! {
        /// A civil date in the Gregorian calendar.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct Date {
            pub year: i32,
            pub month: u8,
            pub day: u8,
        }

        /// A civil date and wall clock time, without a time zone.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct DateTime {
            pub date: Date,
            pub hour: u8,
            pub minute: u8,
            pub second: u8,
            pub nanosecond: u32,
        }

        /// Opaque token the data store changes on every write of a row.
        ///
        /// Tokens are only ever compared for equality.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct RowVersion([u8; 8]);

        impl RowVersion {
            pub const fn from_bytes(bytes: [u8; 8]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; 8] {
                &self.0
            }
        }

        /// Abstract type of a column.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DataType {
            #( #data_types, )*
        }

        /// When the data store assigns a column's value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Generated {
            /// Always set by callers.
            Never,
            /// Assigned once, when the row is inserted.
            OnInsert,
            /// Reassigned on every write.
            OnInsertOrUpdate,
            /// Derived by the data store.
            Computed,
        }

        /// Referential action applied to dependent rows on delete.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DeleteAction {
            NoAction,
            Cascade,
            SetNull,
        }

        /// How many source rows may reference one target row.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Cardinality {
            OneToOne,
            ManyToOne,
        }

        /// Describes one column of an entity's table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct ColumnInfo {
            /// Name of the column in the table
            pub name: &'static str,
            /// Name of the entity property holding the column
            pub property: &'static str,
            pub data_type: DataType,
            pub nullable: bool,
            pub primary_key: bool,
            pub unique: bool,
            pub max_length: ::std::option::Option<u32>,
            pub generated: Generated,
            pub concurrency_token: bool,
        }

        /// Describes a foreign key from an entity's table to another table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct ForeignKeyInfo {
            /// Name of the relationship
            pub name: &'static str,
            /// Name of the navigation property on the referencing entity
            pub navigation: &'static str,
            pub target_namespace: &'static str,
            pub target: &'static str,
            /// `(referencing column, referenced column)` pairs
            pub columns: &'static [(&'static str, &'static str)],
            pub on_delete: DeleteAction,
            pub cardinality: Cardinality,
        }

        /// Metadata and key access implemented by every generated entity.
        pub trait Entity {
            /// Namespace of the entity's table
            const NAMESPACE: &'static str;
            /// Name of the entity's table
            const NAME: &'static str;
            /// Columns, in declaration order
            const COLUMNS: &'static [ColumnInfo];
            /// Properties forming the primary key, in declaration order
            const PRIMARY_KEY: &'static [&'static str];
            const FOREIGN_KEYS: &'static [ForeignKeyInfo];

            /// Primary key values, in declaration order
            type Key;

            fn key(&self) -> Self::Key;

            /// The row's concurrency token, for tables that have one.
            fn concurrency_token(&self) -> ::std::option::Option<&RowVersion> {
                ::std::option::Option::None
            }
        }
    }
}
