use super::{ColumnDeclaration, ColumnSpecBuilder, RelationshipBuilder, SchemaBuilder, TableDecl};
use crate::schema::Schema;
use crate::Result;

/// Declares the columns of one table.
#[derive(Debug)]
pub struct TableBuilder {
    schema: SchemaBuilder,
    table: TableDecl,
}

impl TableBuilder {
    pub(super) fn new(schema: SchemaBuilder, namespace: &str, name: &str) -> TableBuilder {
        TableBuilder {
            schema,
            table: TableDecl {
                namespace: namespace.to_string(),
                name: name.to_string(),
                columns: vec![],
            },
        }
    }

    /// Begins declaring a column. Its type is chosen next.
    pub fn column(self, name: &str) -> ColumnDeclaration {
        ColumnDeclaration::new(self, name)
    }

    pub fn table(self, namespace: &str, name: &str) -> TableBuilder {
        self.done().table(namespace, name)
    }

    pub fn relationship(self, name: &str) -> RelationshipBuilder {
        self.done().relationship(name)
    }

    pub fn build(self) -> Result<Schema> {
        self.done().build()
    }

    /// Returns to the schema level.
    pub fn done(self) -> SchemaBuilder {
        let TableBuilder { mut schema, table } = self;
        schema.tables.push(table);
        schema
    }

    /// Adds a finished column, or records why it could not be finished.
    pub(super) fn push_column(&mut self, spec: &ColumnSpecBuilder) {
        match spec.finish() {
            Ok(column) => self.table.columns.push(column),
            Err(issues) => {
                let table = format!("{}.{}", self.table.namespace, self.table.name);
                self.schema
                    .issues
                    .extend(issues.into_iter().map(|issue| issue.qualified(&table)));
            }
        }
    }
}
