mod names;

use super::{Name, Schema, Table, Type};
use crate::Violation;

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
    violations: Vec<Violation>,
}

impl Schema {
    pub(super) fn verify(&self) -> Vec<Violation> {
        let mut verify = Verify {
            schema: self,
            violations: vec![],
        };
        verify.verify();
        verify.violations
    }
}

impl Verify<'_> {
    fn verify(&mut self) {
        self.verify_ids_match_positions();

        self.verify_tables_are_unique();

        let schema = self.schema;

        for table in &schema.tables {
            self.verify_table(table);
        }

        self.verify_relationship_names_are_unique();
        self.verify_names_are_valid();
        self.verify_generated_names_are_distinct();
    }

    /// Each identifier must match its item's position. A table whose own
    /// identifier is off is reported without its columns.
    fn verify_ids_match_positions(&mut self) {
        let schema = self.schema;

        for (index, table) in schema.tables.iter().enumerate() {
            if table.id.0 != index {
                self.misplaced_id("table", table.qualified_name());
                continue;
            }

            for (index, column) in table.columns.iter().enumerate() {
                if column.id.table != table.id || column.id.index != index {
                    let name = format!("{}.{}", table.qualified_name(), column.name);
                    self.misplaced_id("column", name);
                }
            }
        }

        for (index, relationship) in schema.relationships.iter().enumerate() {
            if relationship.id.0 != index {
                self.misplaced_id("relationship", relationship.name.clone());
            }
        }
    }

    fn misplaced_id(&mut self, kind: &'static str, name: String) {
        self.violations.push(Violation::MisplacedId { kind, name });
    }

    fn verify_tables_are_unique(&mut self) {
        let schema = self.schema;
        let mut seen = HashSet::new();

        for table in &schema.tables {
            if !seen.insert((&table.namespace, &table.name)) {
                self.violations.push(Violation::DuplicateTable {
                    table: table.qualified_name(),
                });
            }
        }
    }

    fn verify_table(&mut self, table: &Table) {
        if table.columns.is_empty() {
            self.violations.push(Violation::EmptyTable {
                table: table.qualified_name(),
            });
            return;
        }

        let mut seen = HashSet::new();

        for column in &table.columns {
            if !seen.insert(&column.name) {
                self.violations.push(Violation::DuplicateColumn {
                    table: table.qualified_name(),
                    column: column.name.clone(),
                });
            }

            if column.primary_key && column.nullable {
                self.violations.push(Violation::NullablePrimaryKey {
                    column: format!("{}.{}", table.qualified_name(), column.name),
                });
            }
        }

        let identity: Vec<_> = table
            .columns
            .iter()
            .filter(|column| column.identity)
            .map(|column| column.name.clone())
            .collect();

        if identity.len() > 1 {
            self.violations.push(Violation::MultipleIdentity {
                table: table.qualified_name(),
                columns: identity,
            });
        }

        let row_versions: Vec<_> = table
            .columns
            .iter()
            .filter(|column| column.ty == Type::RowVersion)
            .map(|column| column.name.clone())
            .collect();

        if row_versions.len() > 1 {
            self.violations.push(Violation::MultipleRowVersion {
                table: table.qualified_name(),
                columns: row_versions,
            });
        }
    }

    fn verify_relationship_names_are_unique(&mut self) {
        let schema = self.schema;
        let mut seen = HashSet::new();

        for relationship in &schema.relationships {
            if !seen.insert(&relationship.name) {
                self.violations.push(Violation::DuplicateRelationship {
                    relationship: relationship.name.clone(),
                });
            }
        }
    }

    fn verify_names_are_valid(&mut self) {
        let schema = self.schema;
        let mut namespaces = HashSet::new();

        for table in &schema.tables {
            if namespaces.insert(&table.namespace) {
                self.verify_name("namespace", &table.namespace);
            }

            self.verify_name("table", &table.name);

            for column in &table.columns {
                self.verify_name("column", &column.name);
            }
        }

        for relationship in &schema.relationships {
            if !is_emittable(&relationship.navigation) {
                self.violations.push(Violation::InvalidName {
                    kind: "navigation",
                    name: relationship.navigation.snake_case(),
                });
            }
        }
    }

    fn verify_name(&mut self, kind: &'static str, name: &str) {
        if !Name::is_valid(name) {
            self.violations.push(Violation::InvalidName {
                kind,
                name: name.to_string(),
            });
        }
    }
}

fn is_emittable(name: &Name) -> bool {
    let snake = name.snake_case();
    !snake.is_empty() && Name::is_valid(&snake)
}
