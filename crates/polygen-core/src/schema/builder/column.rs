use super::{RelationshipBuilder, SchemaBuilder, TableBuilder};
use crate::schema::{Column, ColumnId, Schema, Type};
use crate::{ConfigurationIssue, Error, Result};

/// Builds a single column specification.
///
/// Starts from the defaults of the column's type (`Char` columns are one
/// character long) and accumulates options. Options that do not apply to the
/// type, or that contradict each other, are not rejected when set: they are
/// all reported by [`ColumnSpecBuilder::build`].
///
/// Once `build` succeeds the builder is sealed and every further call fails
/// with a use-after-build error.
#[derive(Debug, Clone)]
pub struct ColumnSpecBuilder {
    name: String,
    ty: Type,
    nullable: bool,
    primary_key: bool,
    identity: bool,
    computed: bool,
    unique: bool,

    /// Explicitly requested length. Type defaults apply when `None`.
    max_length: Option<u32>,

    built: bool,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum Facet {
    Nullable,
    Computed,
    PrimaryKey,
    Identity,
    Unique,
    MaxLength(u32),
}

impl ColumnSpecBuilder {
    pub fn new(name: impl Into<String>, ty: Type) -> ColumnSpecBuilder {
        ColumnSpecBuilder {
            name: name.into(),
            ty,
            nullable: false,
            primary_key: false,
            identity: false,
            computed: false,
            unique: false,
            max_length: None,
            built: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn nullable(&mut self) -> Result<&mut Self> {
        self.set(Facet::Nullable)
    }

    pub fn computed(&mut self) -> Result<&mut Self> {
        self.set(Facet::Computed)
    }

    pub fn primary_key(&mut self) -> Result<&mut Self> {
        self.set(Facet::PrimaryKey)
    }

    /// Integer columns only.
    pub fn identity(&mut self) -> Result<&mut Self> {
        self.set(Facet::Identity)
    }

    pub fn unique(&mut self) -> Result<&mut Self> {
        self.set(Facet::Unique)
    }

    /// `String` and `Char` columns only; `len` must be positive.
    pub fn max_length(&mut self, len: u32) -> Result<&mut Self> {
        self.set(Facet::MaxLength(len))
    }

    /// Finalizes the column.
    pub fn build(&mut self) -> Result<Column> {
        self.ensure_not_built()?;
        let column = self.finish().map_err(Error::configuration)?;
        self.built = true;
        Ok(column)
    }

    fn set(&mut self, facet: Facet) -> Result<&mut Self> {
        self.ensure_not_built()?;
        self.apply(facet);
        Ok(self)
    }

    fn ensure_not_built(&self) -> Result<()> {
        if self.built {
            Err(Error::use_after_build(&self.name))
        } else {
            Ok(())
        }
    }

    pub(super) fn apply(&mut self, facet: Facet) {
        match facet {
            Facet::Nullable => self.nullable = true,
            Facet::Computed => self.computed = true,
            Facet::PrimaryKey => self.primary_key = true,
            Facet::Identity => self.identity = true,
            Facet::Unique => self.unique = true,
            Facet::MaxLength(len) => self.max_length = Some(len),
        }
    }

    /// Checks the accumulated options and produces the column, or every
    /// problem found with them.
    pub(super) fn finish(&self) -> std::result::Result<Column, Vec<ConfigurationIssue>> {
        let mut issues = vec![];
        let mut issue = |message: String| {
            issues.push(ConfigurationIssue::new(&self.name, message));
        };

        match self.max_length {
            Some(_) if !self.ty.is_textual() => issue(format!(
                "max_length applies to String and Char columns only, found {}",
                self.ty
            )),
            Some(0) => issue("max_length must be greater than zero".to_string()),
            None if self.ty.requires_max_length() => {
                issue("string column requires max_length".to_string())
            }
            _ => {}
        }

        if self.identity {
            if !self.ty.is_integer() {
                issue(format!("identity requires an integer column, found {}", self.ty));
            }

            if !self.primary_key {
                issue("identity column must be part of the primary key".to_string());
            }

            if self.computed {
                issue("a column cannot be both identity and computed".to_string());
            }
        }

        if self.nullable && self.primary_key {
            issue("primary key column cannot be nullable".to_string());
        }

        if self.ty == Type::RowVersion && self.primary_key {
            issue("row version column cannot be part of the primary key".to_string());
        }

        if self.unique && self.primary_key {
            issue("primary key column is already unique".to_string());
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let max_length = if self.ty.is_textual() {
            self.max_length.or(self.ty.default_max_length())
        } else {
            None
        };

        Ok(Column {
            id: ColumnId::placeholder(),
            name: self.name.clone(),
            ty: self.ty,
            nullable: self.nullable,
            primary_key: self.primary_key,
            identity: self.identity,
            computed: self.computed,
            unique: self.unique,
            max_length,
        })
    }
}

/// A column whose type has not been chosen yet.
#[derive(Debug)]
pub struct ColumnDeclaration {
    table: TableBuilder,
    name: String,
}

impl ColumnDeclaration {
    pub(super) fn new(table: TableBuilder, name: &str) -> ColumnDeclaration {
        ColumnDeclaration {
            table,
            name: name.to_string(),
        }
    }

    pub fn of_type(self, ty: Type) -> ColumnBuilder {
        ColumnBuilder {
            spec: ColumnSpecBuilder::new(self.name, ty),
            table: self.table,
        }
    }

    pub fn boolean(self) -> ColumnBuilder {
        self.of_type(Type::Boolean)
    }

    pub fn byte(self) -> ColumnBuilder {
        self.of_type(Type::Byte)
    }

    pub fn int16(self) -> ColumnBuilder {
        self.of_type(Type::Int16)
    }

    pub fn int32(self) -> ColumnBuilder {
        self.of_type(Type::Int32)
    }

    pub fn int64(self) -> ColumnBuilder {
        self.of_type(Type::Int64)
    }

    pub fn double(self) -> ColumnBuilder {
        self.of_type(Type::Double)
    }

    pub fn string(self) -> ColumnBuilder {
        self.of_type(Type::String)
    }

    pub fn char(self) -> ColumnBuilder {
        self.of_type(Type::Char)
    }

    pub fn date(self) -> ColumnBuilder {
        self.of_type(Type::Date)
    }

    pub fn date_time(self) -> ColumnBuilder {
        self.of_type(Type::DateTime)
    }

    pub fn binary(self) -> ColumnBuilder {
        self.of_type(Type::Binary)
    }

    /// The table's optimistic concurrency token.
    pub fn row_version(self) -> ColumnBuilder {
        self.of_type(Type::RowVersion)
    }
}

/// Configures a typed column within the fluent chain.
///
/// Declaring the next column, table or relationship finishes this one.
#[derive(Debug)]
pub struct ColumnBuilder {
    table: TableBuilder,
    spec: ColumnSpecBuilder,
}

impl ColumnBuilder {
    pub fn nullable(self) -> Self {
        self.with(Facet::Nullable)
    }

    pub fn computed(self) -> Self {
        self.with(Facet::Computed)
    }

    pub fn primary_key(self) -> Self {
        self.with(Facet::PrimaryKey)
    }

    pub fn identity(self) -> Self {
        self.with(Facet::Identity)
    }

    pub fn unique(self) -> Self {
        self.with(Facet::Unique)
    }

    pub fn max_length(self, len: u32) -> Self {
        self.with(Facet::MaxLength(len))
    }

    pub fn column(self, name: &str) -> ColumnDeclaration {
        self.finish().column(name)
    }

    pub fn table(self, namespace: &str, name: &str) -> TableBuilder {
        self.finish().table(namespace, name)
    }

    pub fn relationship(self, name: &str) -> RelationshipBuilder {
        self.finish().relationship(name)
    }

    pub fn build(self) -> Result<Schema> {
        self.finish().build()
    }

    /// Returns to the schema level without declaring anything else.
    pub fn done(self) -> SchemaBuilder {
        self.finish().done()
    }

    fn with(mut self, facet: Facet) -> Self {
        self.spec.apply(facet);
        self
    }

    fn finish(self) -> TableBuilder {
        let ColumnBuilder { mut table, spec } = self;
        table.push_column(&spec);
        table
    }
}
