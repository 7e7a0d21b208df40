use super::{Error, ErrorKind};
use crate::schema::Type;

/// A single schema invariant found violated while building a schema.
///
/// Tables are named `namespace.table` and columns `namespace.table.column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An item's identifier does not match its position in the schema.
    MisplacedId { kind: &'static str, name: String },

    /// Two tables share the same namespace and name.
    DuplicateTable { table: String },

    /// Two columns of one table share a name.
    DuplicateColumn { table: String, column: String },

    /// Two relationships share a name.
    DuplicateRelationship { relationship: String },

    /// A table declares no columns.
    EmptyTable { table: String },

    /// A table declares more than one identity column.
    MultipleIdentity { table: String, columns: Vec<String> },

    /// A table declares more than one row-version column.
    MultipleRowVersion { table: String, columns: Vec<String> },

    /// A primary-key column is nullable.
    NullablePrimaryKey { column: String },

    /// A namespace, table, column or relationship name cannot become an
    /// identifier in generated code.
    InvalidName { kind: &'static str, name: String },

    /// Two distinct names derive the same identifier in generated code.
    NameConflict {
        scope: String,
        ident: String,
        first: String,
        second: String,
    },

    /// A relationship lacks its `from` or `to` table.
    MissingEndpoint {
        relationship: String,
        side: &'static str,
    },

    /// A relationship has no column references.
    NoReferences { relationship: String },

    /// A relationship endpoint names a table that was never declared.
    UnknownTable { relationship: String, table: String },

    /// A relationship references a column missing from its table.
    UnknownColumn {
        relationship: String,
        table: String,
        column: String,
    },

    /// The referenced columns are neither the target's primary key nor a
    /// unique column.
    TargetNotKey { relationship: String, table: String },

    /// A referencing column and its referenced column differ in type.
    TypeMismatch {
        relationship: String,
        from: String,
        from_ty: Type,
        to: String,
        to_ty: Type,
    },

    /// `on_delete_set_null` on a relationship with a non-nullable column.
    SetNullOnRequiredColumn {
        relationship: String,
        column: String,
    },
}

impl Violation {
    /// Returns `true` if the violation comes from resolving a relationship
    /// endpoint against the declared tables.
    pub fn is_relationship_resolution(&self) -> bool {
        matches!(
            self,
            Violation::MissingEndpoint { .. }
                | Violation::UnknownTable { .. }
                | Violation::UnknownColumn { .. }
        )
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use Violation::*;

        match self {
            MisplacedId { kind, name } => write!(
                f,
                "{kind} `{name}` has an identifier that does not match its position"
            ),
            DuplicateTable { table } => write!(f, "table `{table}` is declared more than once"),
            DuplicateColumn { table, column } => write!(
                f,
                "table `{table}` declares column `{column}` more than once"
            ),
            DuplicateRelationship { relationship } => write!(
                f,
                "relationship `{relationship}` is declared more than once"
            ),
            EmptyTable { table } => write!(f, "table `{table}` has no columns"),
            MultipleIdentity { table, columns } => write!(
                f,
                "table `{table}` has more than one identity column ({})",
                columns.join(", ")
            ),
            MultipleRowVersion { table, columns } => write!(
                f,
                "table `{table}` has more than one row version column ({})",
                columns.join(", ")
            ),
            NullablePrimaryKey { column } => write!(f, "primary key column `{column}` is nullable"),
            InvalidName { kind, name } => {
                write!(f, "{kind} name `{name}` is not a valid identifier")
            }
            NameConflict {
                scope,
                ident,
                first,
                second,
            } => write!(
                f,
                "`{first}` and `{second}` both generate `{ident}` in `{scope}`"
            ),
            MissingEndpoint { relationship, side } => {
                write!(f, "relationship `{relationship}` has no `{side}` table")
            }
            NoReferences { relationship } => {
                write!(f, "relationship `{relationship}` references no columns")
            }
            UnknownTable {
                relationship,
                table,
            } => write!(
                f,
                "relationship `{relationship}` refers to undeclared table `{table}`"
            ),
            UnknownColumn {
                relationship,
                table,
                column,
            } => write!(
                f,
                "relationship `{relationship}` refers to undeclared column `{column}` of `{table}`"
            ),
            TargetNotKey {
                relationship,
                table,
            } => write!(
                f,
                "relationship `{relationship}` must reference the primary key or a unique column \
                 of `{table}`"
            ),
            TypeMismatch {
                relationship,
                from,
                from_ty,
                to,
                to_ty,
            } => write!(
                f,
                "relationship `{relationship}` pairs `{from}` ({from_ty}) with `{to}` ({to_ty})"
            ),
            SetNullOnRequiredColumn {
                relationship,
                column,
            } => write!(
                f,
                "relationship `{relationship}` sets `{column}` to null on delete, but the column \
                 is not nullable"
            ),
        }
    }
}

/// Error when a schema breaks one or more invariants.
///
/// Carries every violation found in one pass so callers can fix them all at
/// once.
#[derive(Debug)]
pub(super) struct SchemaValidationError {
    violations: Vec<Violation>,
}

impl std::error::Error for SchemaValidationError {}

impl core::fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.violations.len() {
            1 => f.write_str("schema validation failed: ")?,
            n => write!(f, "schema validation failed with {n} problems: ")?,
        }

        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a schema validation error carrying every violation found.
    pub fn schema_validation(violations: Vec<Violation>) -> Error {
        debug_assert!(!violations.is_empty());
        Error::from(ErrorKind::SchemaValidation(SchemaValidationError { violations }))
    }

    /// Returns `true` if this error is a schema validation error.
    pub fn is_schema_validation(&self) -> bool {
        self.violations().is_some()
    }

    /// The violations of a schema validation error.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self.kind() {
            ErrorKind::SchemaValidation(err) => Some(&err.violations[..]),
            _ => None,
        }
    }
}
