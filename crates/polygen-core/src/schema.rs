pub mod builder;
pub use builder::{
    ColumnBuilder, ColumnDeclaration, ColumnSpecBuilder, RelationshipBuilder, SchemaBuilder,
    TableBuilder,
};

mod column;
pub use column::{Column, ColumnId};

mod name;
pub use name::Name;

mod relationship;
pub use relationship::{Cardinality, DeleteAction, ForeignKeyColumn, Relationship, RelationshipId};

mod table;
pub use table::{PrimaryKey, Table, TableId};

mod ty;
pub use ty::Type;

mod verify;

use crate::{Error, Result};

/// A validated relational schema.
///
/// Built once through [`Schema::builder`] and immutable afterwards, so it can
/// be shared freely between threads generating code from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Tables, in declaration order
    pub tables: Vec<Table>,

    /// Relationships, in declaration order
    pub relationships: Vec<Relationship>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::create()
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn relationship(&self, id: RelationshipId) -> &Relationship {
        self.relationships
            .get(id.0)
            .expect("invalid relationship ID")
    }

    pub fn table_by_name(&self, namespace: &str, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.namespace == namespace && table.name == name)
    }

    /// Relationships whose "from" side is the given table.
    pub fn relationships_from(
        &self,
        table: impl Into<TableId>,
    ) -> impl Iterator<Item = &Relationship> + '_ {
        let table = table.into();
        self.relationships
            .iter()
            .filter(move |relationship| relationship.source == table)
    }

    /// Namespaces in the order they were first declared.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = vec![];

        for table in &self.tables {
            if !namespaces.contains(&table.namespace.as_str()) {
                namespaces.push(&table.namespace);
            }
        }

        namespaces
    }

    /// Tables of one namespace, in declaration order.
    pub fn tables_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a Table> + 'a {
        self.tables
            .iter()
            .filter(move |table| table.namespace == namespace)
    }

    /// Re-checks every schema invariant.
    ///
    /// Schemas returned by [`SchemaBuilder::build`] always pass; this is for
    /// schemas assembled or modified by hand.
    pub fn validate(&self) -> Result<()> {
        let violations = self.verify();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::schema_validation(violations))
        }
    }
}
