use super::{Name, TableId, Type};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column, as declared.
    pub name: String,

    /// The abstract data type of the column.
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// True if the data store assigns the column's value on insert.
    pub identity: bool,

    /// True if the column's value is derived by the data store and never set
    /// by callers.
    pub computed: bool,

    /// True if the column's values are unique within the table.
    pub unique: bool,

    /// Maximum length of textual columns.
    pub max_length: Option<u32>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    /// Row-version columns act as the table's optimistic concurrency token.
    pub fn is_concurrency_token(&self) -> bool {
        self.ty == Type::RowVersion
    }

    /// Identity, computed and row-version values come from the data store.
    pub fn is_store_generated(&self) -> bool {
        self.identity || self.computed || self.is_concurrency_token()
    }

    /// Settable columns appear in the insert shape and as public properties.
    pub fn is_settable(&self) -> bool {
        !self.is_store_generated()
    }

    /// Name of the generated property.
    pub fn property_name(&self) -> Name {
        Name::new(&self.name)
    }
}

impl ColumnId {
    pub(crate) fn placeholder() -> Self {
        Self {
            table: TableId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
