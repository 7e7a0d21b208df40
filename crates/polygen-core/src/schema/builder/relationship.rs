use super::{BuildSchema, RelationshipDecl, SchemaBuilder, TableBuilder};
use crate::schema::{
    Cardinality, ColumnId, DeleteAction, ForeignKeyColumn, Name, Relationship, RelationshipId,
    Schema, Table,
};
use crate::{Result, Violation};

use tracing::trace;

/// Declares a relationship between two tables.
///
/// Endpoints are names only; they are resolved when the schema is built, so
/// the tables may be declared before or after the relationship.
#[derive(Debug)]
pub struct RelationshipBuilder {
    schema: SchemaBuilder,
    relationship: RelationshipDecl,
}

impl RelationshipBuilder {
    pub(super) fn new(schema: SchemaBuilder, name: &str) -> RelationshipBuilder {
        RelationshipBuilder {
            schema,
            relationship: RelationshipDecl {
                name: name.to_string(),
                from: None,
                to: None,
                references: vec![],
                on_delete: DeleteAction::default(),
            },
        }
    }

    /// The referencing table.
    pub fn from(mut self, namespace: &str, table: &str) -> Self {
        self.relationship.from = Some((namespace.to_string(), table.to_string()));
        self
    }

    /// The referenced table.
    pub fn to(mut self, namespace: &str, table: &str) -> Self {
        self.relationship.to = Some((namespace.to_string(), table.to_string()));
        self
    }

    /// Pairs a column of the referencing table with a column of the
    /// referenced table. Composite keys call this once per column.
    pub fn reference(mut self, from_column: &str, to_column: &str) -> Self {
        self.relationship
            .references
            .push((from_column.to_string(), to_column.to_string()));
        self
    }

    pub fn on_delete_cascade(self) -> Self {
        self.on_delete(DeleteAction::Cascade)
    }

    /// Requires every referencing column to be nullable.
    pub fn on_delete_set_null(self) -> Self {
        self.on_delete(DeleteAction::SetNull)
    }

    pub fn on_delete(mut self, action: DeleteAction) -> Self {
        self.relationship.on_delete = action;
        self
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
        let RelationshipBuilder {
            mut schema,
            relationship,
        } = self;
        schema.relationships.push(relationship);
        schema
    }
}

impl BuildSchema {
    pub(super) fn resolve_relationship(&mut self, decl: RelationshipDecl) {
        if !self.relationship_names.insert(decl.name.clone()) {
            self.violations.push(Violation::DuplicateRelationship {
                relationship: decl.name,
            });
            return;
        }

        let mut violations = vec![];

        let source = self.resolve_endpoint(&decl, decl.from.as_ref(), "from", &mut violations);
        let target = self.resolve_endpoint(&decl, decl.to.as_ref(), "to", &mut violations);

        if decl.references.is_empty() {
            violations.push(Violation::NoReferences {
                relationship: decl.name.clone(),
            });
        }

        let (Some(source), Some(target)) = (source, target) else {
            self.violations.extend(violations);
            return;
        };

        let mut columns = vec![];

        for (from_column, to_column) in &decl.references {
            let from = resolve_column(&decl, source, from_column, &mut violations);
            let to = resolve_column(&decl, target, to_column, &mut violations);

            if let (Some(from), Some(to)) = (from, to) {
                columns.push(ForeignKeyColumn {
                    source: from,
                    target: to,
                });
            }
        }

        if !violations.is_empty() || columns.is_empty() {
            self.violations.extend(violations);
            return;
        }

        if !is_key(target, &columns) {
            violations.push(Violation::TargetNotKey {
                relationship: decl.name.clone(),
                table: target.qualified_name(),
            });
        }

        for fk in &columns {
            let from = source.column(fk.source);
            let to = target.column(fk.target);

            if from.ty != to.ty {
                violations.push(Violation::TypeMismatch {
                    relationship: decl.name.clone(),
                    from: format!("{}.{}", source.qualified_name(), from.name),
                    from_ty: from.ty,
                    to: format!("{}.{}", target.qualified_name(), to.name),
                    to_ty: to.ty,
                });
            }

            if decl.on_delete == DeleteAction::SetNull && !from.nullable {
                violations.push(Violation::SetNullOnRequiredColumn {
                    relationship: decl.name.clone(),
                    column: format!("{}.{}", source.qualified_name(), from.name),
                });
            }
        }

        if !violations.is_empty() {
            self.violations.extend(violations);
            return;
        }

        let cardinality = cardinality(source, &columns);
        let navigation = self.navigation_name(source, target, &columns, &decl.name);

        trace!(
            relationship = %decl.name,
            source = %source.qualified_name(),
            target = %target.qualified_name(),
            cardinality = cardinality.as_str(),
            navigation = %navigation.snake_case(),
            "resolved relationship"
        );

        let relationship = Relationship {
            id: RelationshipId(self.relationships.len()),
            name: decl.name,
            source: source.id,
            target: target.id,
            columns,
            on_delete: decl.on_delete,
            cardinality,
            navigation,
        };

        self.relationships.push(relationship);
    }

    fn resolve_endpoint(
        &self,
        decl: &RelationshipDecl,
        endpoint: Option<&(String, String)>,
        side: &'static str,
        violations: &mut Vec<Violation>,
    ) -> Option<&Table> {
        let Some((namespace, name)) = endpoint else {
            violations.push(Violation::MissingEndpoint {
                relationship: decl.name.clone(),
                side,
            });
            return None;
        };

        let table = self.lookup_table(namespace, name);

        if table.is_none() {
            violations.push(Violation::UnknownTable {
                relationship: decl.name.clone(),
                table: format!("{namespace}.{name}"),
            });
        }

        table
    }

    /// Picks the name of the navigation property generated on the source
    /// entity.
    ///
    /// Prefers the prefix the referencing columns share once the referenced
    /// column names are stripped from their ends (`AuthorSSN` referencing
    /// `SSN` gives `Author`), then the target table name, then the
    /// relationship name. Candidates that collide with a column or an earlier
    /// navigation of the source entity are skipped.
    fn navigation_name(
        &self,
        source: &Table,
        target: &Table,
        columns: &[ForeignKeyColumn],
        relationship: &str,
    ) -> Name {
        let taken = |name: &Name| {
            source
                .columns
                .iter()
                .any(|column| column.property_name() == *name)
                || self
                    .relationships
                    .iter()
                    .any(|existing| existing.source == source.id && existing.navigation == *name)
        };

        shared_prefix(source, target, columns)
            .into_iter()
            .chain([target.name.clone(), relationship.to_string()])
            .filter(|candidate| Name::is_valid(candidate))
            .map(|candidate| Name::new(&candidate))
            .find(|name| !taken(name))
            .unwrap_or_else(|| Name::new(relationship))
    }
}

fn resolve_column(
    decl: &RelationshipDecl,
    table: &Table,
    column: &str,
    violations: &mut Vec<Violation>,
) -> Option<ColumnId> {
    let resolved = table.column_by_name(column).map(|column| column.id);

    if resolved.is_none() {
        violations.push(Violation::UnknownColumn {
            relationship: decl.name.clone(),
            table: table.qualified_name(),
            column: column.to_string(),
        });
    }

    resolved
}

/// Whether the referenced columns are the target's whole primary key or a
/// single unique column.
fn is_key(target: &Table, columns: &[ForeignKeyColumn]) -> bool {
    let mut referenced: Vec<_> = columns.iter().map(|fk| fk.target).collect();
    referenced.sort();
    referenced.dedup();

    if referenced.len() != columns.len() {
        return false;
    }

    let mut primary_key = target.primary_key.columns.clone();
    primary_key.sort();

    (!primary_key.is_empty() && referenced == primary_key)
        || (referenced.len() == 1 && target.column(referenced[0]).unique)
}

/// One-to-one when the referencing columns are themselves a key of the
/// source table.
fn cardinality(source: &Table, columns: &[ForeignKeyColumn]) -> Cardinality {
    let mut referencing: Vec<_> = columns.iter().map(|fk| fk.source).collect();
    referencing.sort();
    referencing.dedup();

    let mut primary_key = source.primary_key.columns.clone();
    primary_key.sort();

    let is_primary_key = !primary_key.is_empty() && referencing == primary_key;
    let is_unique = referencing.len() == 1 && source.column(referencing[0]).unique;

    if is_primary_key || is_unique {
        Cardinality::OneToOne
    } else {
        Cardinality::ManyToOne
    }
}

fn shared_prefix(source: &Table, target: &Table, columns: &[ForeignKeyColumn]) -> Option<String> {
    let mut shared: Option<&str> = None;

    for fk in columns {
        let from = &source.column(fk.source).name;
        let to = &target.column(fk.target).name;

        let prefix = from.strip_suffix(to.as_str())?;

        if prefix.is_empty() {
            return None;
        }

        match shared {
            None => shared = Some(prefix),
            Some(existing) if existing == prefix => {}
            Some(_) => return None,
        }
    }

    shared.map(str::to_string)
}
