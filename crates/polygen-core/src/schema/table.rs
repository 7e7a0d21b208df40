use super::{Column, ColumnId, Name};

use std::fmt;

/// A table of the schema
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Logical grouping of the table, e.g. the module it belongs to.
    pub namespace: String,

    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order.
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key, in declaration order
    pub columns: Vec<ColumnId>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key
            .columns
            .iter()
            .map(|column_id| &self.columns[column_id.index])
    }

    pub fn identity_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.identity)
    }

    pub fn concurrency_token(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.is_concurrency_token())
    }

    /// `namespace.name`, as used in diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Name of the generated entity type.
    pub fn entity_name(&self) -> Name {
        Name::new(&self.name)
    }

    /// Name of the generated module holding the table's entity.
    pub fn module_name(&self) -> Name {
        Name::new(&self.namespace)
    }
}

impl TableId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
