use super::{ColumnId, Name, Schema, Table, TableId};

use std::fmt;

/// A foreign key from the columns of one table to the key of another.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Uniquely identifies the relationship
    pub id: RelationshipId,

    /// The relationship name, unique within the schema
    pub name: String,

    /// The referencing ("from") table
    pub source: TableId,

    /// The referenced ("to") table
    pub target: TableId,

    /// Referencing/referenced column pairs, in declaration order
    pub columns: Vec<ForeignKeyColumn>,

    /// What happens to referencing rows when the referenced row is deleted
    pub on_delete: DeleteAction,

    /// Derived from whether the referencing columns are themselves unique.
    pub cardinality: Cardinality,

    /// Name of the navigation property generated on the source entity
    pub navigation: Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyColumn {
    /// The column on the source table acting as the foreign key
    pub source: ColumnId,

    /// The column on the target table this foreign key column maps to
    pub target: ColumnId,
}

/// Referential action applied to dependent rows on delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeleteAction {
    #[default]
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

/// Uniquely identifies a relationship
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct RelationshipId(pub usize);

impl Relationship {
    pub fn source<'a>(&self, schema: &'a Schema) -> &'a Table {
        schema.table(self.source)
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Table {
        schema.table(self.target)
    }

    pub fn source_columns(&self) -> impl ExactSizeIterator<Item = ColumnId> + '_ {
        self.columns.iter().map(|fk| fk.source)
    }

    pub fn target_columns(&self) -> impl ExactSizeIterator<Item = ColumnId> + '_ {
        self.columns.iter().map(|fk| fk.target)
    }
}

impl DeleteAction {
    pub fn as_str(self) -> &'static str {
        match self {
            DeleteAction::NoAction => "NoAction",
            DeleteAction::Cascade => "Cascade",
            DeleteAction::SetNull => "SetNull",
        }
    }
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::OneToOne => "OneToOne",
            Cardinality::ManyToOne => "ManyToOne",
        }
    }
}

impl fmt::Debug for RelationshipId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RelationshipId({})", self.0)
    }
}
