use super::*;

use indexmap::IndexMap;

/// Modules generated next to the namespace modules.
const SUPPORT_MODULE: &str = "support";

/// Inherent methods every entity carries.
const ENTITY_METHODS: &[&str] = &["from_row"];

/// Identifiers declared in one scope of the generated code, each with the
/// schema name it was derived from.
struct Scope {
    name: String,
    idents: IndexMap<String, String>,
}

impl Scope {
    fn new(name: impl Into<String>) -> Scope {
        Scope {
            name: name.into(),
            idents: IndexMap::new(),
        }
    }

    /// Declares `ident`, reporting a conflict when a different schema name
    /// already produced it.
    fn declare(&mut self, ident: String, origin: String, violations: &mut Vec<Violation>) {
        match self.idents.get(&ident) {
            Some(first) if *first != origin => violations.push(Violation::NameConflict {
                scope: self.name.clone(),
                ident,
                first: first.clone(),
                second: origin,
            }),
            Some(_) => {}
            None => {
                self.idents.insert(ident, origin);
            }
        }
    }
}

impl Verify<'_> {
    /// Distinct schema names must derive distinct identifiers wherever the
    /// generated code declares them side by side.
    pub(super) fn verify_generated_names_are_distinct(&mut self) {
        let schema = self.schema;
        let mut modules = Scope::new("crate");

        modules.declare(
            SUPPORT_MODULE.to_string(),
            "generated support module".to_string(),
            &mut self.violations,
        );

        for namespace in schema.namespaces() {
            modules.declare(
                Name::new(namespace).snake_case(),
                namespace.to_string(),
                &mut self.violations,
            );

            self.verify_namespace(namespace);
        }

        for table in &schema.tables {
            self.verify_entity(table);
        }
    }

    fn verify_namespace(&mut self, namespace: &str) {
        let schema = self.schema;
        let mut types = Scope::new(namespace);

        for table in schema.tables_in(namespace) {
            let entity = table.entity_name().upper_camel_case();
            let origin = table.qualified_name();

            let insert = format!("New{entity}");
            types.declare(insert, origin.clone(), &mut self.violations);
            types.declare(entity, origin, &mut self.violations);
        }
    }

    fn verify_entity(&mut self, table: &Table) {
        let schema = self.schema;
        let qualified = table.qualified_name();

        let mut fields = Scope::new(&qualified);
        let mut methods = Scope::new(&qualified);

        for method in ENTITY_METHODS {
            methods.declare(
                method.to_string(),
                "generated constructor".to_string(),
                &mut self.violations,
            );
        }

        for column in &table.columns {
            let ident = column.property_name().snake_case();
            let origin = format!("{qualified}.{}", column.name);

            if column.is_store_generated() {
                methods.declare(ident.clone(), origin.clone(), &mut self.violations);
            }

            fields.declare(ident, origin, &mut self.violations);
        }

        for relationship in schema.relationships_from(table) {
            let ident = relationship.navigation.snake_case();
            let origin = format!("relationship {}", relationship.name);

            let setter = format!("set_{ident}");
            fields.declare(ident.clone(), origin.clone(), &mut self.violations);
            methods.declare(setter, origin.clone(), &mut self.violations);
            methods.declare(ident, origin, &mut self.violations);
        }
    }
}
