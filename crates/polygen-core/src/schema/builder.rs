mod column;
pub use column::{ColumnBuilder, ColumnDeclaration, ColumnSpecBuilder};

mod relationship;
pub use relationship::RelationshipBuilder;

mod table;
pub use table::TableBuilder;

use super::{Column, ColumnId, DeleteAction, PrimaryKey, Relationship, Schema, Table, TableId};
use crate::{ConfigurationIssue, Error, Result, Violation};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Root of the fluent schema builder.
///
/// Tables and relationships may be declared in any order. Relationship
/// endpoints are symbolic until [`SchemaBuilder::build`] resolves them
/// against the complete set of declared tables.
///
/// ```
/// use polygen_core::Schema;
///
/// let schema = Schema::builder()
///     .table("blogging", "Blog")
///         .column("Id").int32().primary_key().identity()
///         .column("Title").string().max_length(200)
///     .table("blogging", "Post")
///         .column("Id").int32().primary_key().identity()
///         .column("BlogId").int32()
///     .relationship("FK_Blog_Posts")
///         .from("blogging", "Post")
///         .to("blogging", "Blog")
///         .reference("BlogId", "Id")
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.tables.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: Vec<TableDecl>,
    relationships: Vec<RelationshipDecl>,

    /// Column configuration problems, reported before any validation
    issues: Vec<ConfigurationIssue>,
}

#[derive(Debug)]
struct TableDecl {
    namespace: String,
    name: String,
    columns: Vec<Column>,
}

#[derive(Debug)]
struct RelationshipDecl {
    name: String,
    from: Option<(String, String)>,
    to: Option<(String, String)>,
    references: Vec<(String, String)>,
    on_delete: DeleteAction,
}

/// Used to track state during the build process
struct BuildSchema {
    /// Maps `(namespace, name)` to table identifiers. Populated for every
    /// table before the first relationship is resolved.
    table_lookup: IndexMap<(String, String), TableId>,

    /// Tables as they are built
    tables: Vec<Table>,

    /// Relationships that resolved successfully
    relationships: Vec<Relationship>,

    /// Every relationship name seen, resolved or not
    relationship_names: IndexSet<String>,

    /// Everything found wrong so far
    violations: Vec<Violation>,
}

impl SchemaBuilder {
    pub fn create() -> Self {
        Self::default()
    }

    /// Begins declaring a table.
    pub fn table(self, namespace: &str, name: &str) -> TableBuilder {
        TableBuilder::new(self, namespace, name)
    }

    /// Begins declaring a relationship.
    pub fn relationship(self, name: &str) -> RelationshipBuilder {
        RelationshipBuilder::new(self, name)
    }

    /// Validates every declaration and produces the schema.
    ///
    /// Column configuration problems fail with a configuration error. Any
    /// other problem fails with a schema validation error listing every
    /// violation found.
    pub fn build(self) -> Result<Schema> {
        debug!(
            tables = self.tables.len(),
            relationships = self.relationships.len(),
            "building schema"
        );

        if !self.issues.is_empty() {
            debug!(issues = self.issues.len(), "column configuration rejected");
            return Err(Error::configuration(self.issues));
        }

        let mut builder = BuildSchema {
            table_lookup: IndexMap::new(),
            tables: vec![],
            relationships: vec![],
            relationship_names: IndexSet::new(),
            violations: vec![],
        };

        // Register every table first so relationships may refer to tables
        // declared after them.
        for table in self.tables {
            builder.register_table(table);
        }

        for relationship in self.relationships {
            builder.resolve_relationship(relationship);
        }

        let schema = Schema {
            tables: builder.tables,
            relationships: builder.relationships,
        };

        let mut violations = builder.violations;
        violations.extend(schema.verify());

        if !violations.is_empty() {
            debug!(violations = violations.len(), "schema rejected");
            return Err(Error::schema_validation(violations));
        }

        debug!(
            tables = schema.tables.len(),
            relationships = schema.relationships.len(),
            "schema built"
        );

        Ok(schema)
    }
}

impl BuildSchema {
    fn register_table(&mut self, decl: TableDecl) {
        let key = (decl.namespace, decl.name);

        if self.table_lookup.contains_key(&key) {
            self.violations.push(Violation::DuplicateTable {
                table: format!("{}.{}", key.0, key.1),
            });
            return;
        }

        let id = TableId(self.tables.len());
        let (namespace, name) = key.clone();
        self.table_lookup.insert(key, id);

        let mut table = Table {
            id,
            namespace,
            name,
            columns: vec![],
            primary_key: PrimaryKey::default(),
        };

        for mut column in decl.columns {
            if table.column_by_name(&column.name).is_some() {
                self.violations.push(Violation::DuplicateColumn {
                    table: table.qualified_name(),
                    column: column.name,
                });
                continue;
            }

            column.id = ColumnId {
                table: id,
                index: table.columns.len(),
            };

            if column.primary_key {
                table.primary_key.columns.push(column.id);
            }

            table.columns.push(column);
        }

        self.tables.push(table);
    }

    fn lookup_table(&self, namespace: &str, name: &str) -> Option<&Table> {
        let id = self
            .table_lookup
            .get(&(namespace.to_string(), name.to_string()))?;
        Some(&self.tables[id.0])
    }
}
