use polygen_core::schema::{Cardinality, DeleteAction, Type};
use polygen_core::Schema;

fn blogging() -> Schema {
    Schema::builder()
        .table("blogging", "Blog")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("Title")
        .string()
        .max_length(200)
        .column("RowVersion")
        .row_version()
        .table("blogging", "Post")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("BlogId")
        .int32()
        .column("Title")
        .string()
        .max_length(200)
        .column("Rating")
        .byte()
        .nullable()
        .relationship("FK_Blog_Posts")
        .from("blogging", "Post")
        .to("blogging", "Blog")
        .reference("BlogId", "Id")
        .on_delete_cascade()
        .build()
        .unwrap()
}

fn column_names(schema: &Schema, namespace: &str, table: &str) -> Vec<String> {
    schema
        .table_by_name(namespace, table)
        .unwrap()
        .columns
        .iter()
        .map(|column| column.name.clone())
        .collect()
}

#[test]
fn tables_and_columns_keep_declaration_order() {
    let schema = blogging();

    let tables: Vec<_> = schema
        .tables
        .iter()
        .map(|table| table.name.as_str())
        .collect();
    assert_eq!(tables, ["Blog", "Post"]);

    assert_eq!(
        column_names(&schema, "blogging", "Post"),
        ["Id", "BlogId", "Title", "Rating"]
    );
    assert_eq!(schema.namespaces(), ["blogging"]);
}

#[test]
fn column_facets_are_recorded() {
    let schema = blogging();
    let blog = schema.table_by_name("blogging", "Blog").unwrap();

    let id = blog.column_by_name("Id").unwrap();
    assert!(id.primary_key);
    assert!(id.identity);
    assert!(id.is_store_generated());
    assert!(!id.is_settable());

    let title = blog.column_by_name("Title").unwrap();
    assert_eq!(title.ty, Type::String);
    assert_eq!(title.max_length, Some(200));
    assert!(title.is_settable());

    let row_version = blog.concurrency_token().unwrap();
    assert_eq!(row_version.name, "RowVersion");
    assert!(!row_version.is_settable());

    assert_eq!(blog.identity_column().map(|column| column.id), Some(id.id));
}

#[test]
fn relationship_is_resolved() {
    let schema = blogging();
    let post = schema.table_by_name("blogging", "Post").unwrap();
    let blog = schema.table_by_name("blogging", "Blog").unwrap();

    let relationships: Vec<_> = schema.relationships_from(post).collect();
    assert_eq!(relationships.len(), 1);

    let relationship = relationships[0];
    assert_eq!(relationship.name, "FK_Blog_Posts");
    assert_eq!(relationship.target(&schema).id, blog.id);
    assert_eq!(relationship.on_delete, DeleteAction::Cascade);
    assert_eq!(relationship.cardinality, Cardinality::ManyToOne);
    assert_eq!(relationship.navigation.snake_case(), "blog");

    let from: Vec<_> = relationship
        .source_columns()
        .map(|id| schema.column(id).name.as_str())
        .collect();
    assert_eq!(from, ["BlogId"]);

    let to: Vec<_> = relationship
        .target_columns()
        .map(|id| schema.column(id).name.as_str())
        .collect();
    assert_eq!(to, ["Id"]);

    assert_eq!(schema.relationships_from(blog).count(), 0);
}

#[test]
fn delete_action_defaults_to_no_action() {
    let schema = Schema::builder()
        .table("blogging", "Blog")
        .column("Id")
        .int32()
        .primary_key()
        .table("blogging", "Post")
        .column("Id")
        .int32()
        .primary_key()
        .column("BlogId")
        .int32()
        .relationship("FK_Blog_Posts")
        .from("blogging", "Post")
        .to("blogging", "Blog")
        .reference("BlogId", "Id")
        .build()
        .unwrap();

    assert_eq!(schema.relationships[0].on_delete, DeleteAction::NoAction);
}

#[test]
fn composite_primary_key_keeps_declaration_order() {
    let schema = Schema::builder()
        .table("user", "Person")
        .column("SSN")
        .string()
        .max_length(9)
        .primary_key()
        .column("FirstName")
        .string()
        .max_length(50)
        .primary_key()
        .column("MiddleName")
        .string()
        .max_length(50)
        .nullable()
        .column("LastName")
        .string()
        .max_length(50)
        .primary_key()
        .build()
        .unwrap();

    let person = schema.table_by_name("user", "Person").unwrap();
    let key: Vec<_> = person
        .primary_key_columns()
        .map(|column| column.name.as_str())
        .collect();

    assert_eq!(key, ["SSN", "FirstName", "LastName"]);
}

#[test]
fn char_columns_default_to_one_character() {
    let schema = Schema::builder()
        .table("user", "Person")
        .column("Id")
        .int64()
        .primary_key()
        .identity()
        .column("Initial")
        .char()
        .column("Code")
        .char()
        .max_length(3)
        .column("Age")
        .int16()
        .build()
        .unwrap();

    let person = schema.table_by_name("user", "Person").unwrap();
    let initial = person.column_by_name("Initial").unwrap();
    assert_eq!(initial.max_length, Some(1));
    assert_eq!(person.column_by_name("Code").unwrap().max_length, Some(3));
    assert_eq!(person.column_by_name("Age").unwrap().max_length, None);
}

#[test]
fn nullable_computed_column_is_read_only() {
    let schema = Schema::builder()
        .table("blogging", "Blog")
        .column("Id")
        .int32()
        .primary_key()
        .column("PostCount")
        .int32()
        .nullable()
        .computed()
        .build()
        .unwrap();

    let column = schema
        .table_by_name("blogging", "Blog")
        .unwrap()
        .column_by_name("PostCount")
        .unwrap();

    assert!(column.nullable);
    assert!(column.computed);
    assert!(!column.is_settable());
}

#[test]
fn built_schema_passes_validation_again() {
    let schema = blogging();
    schema.validate().unwrap();
}

#[test]
fn tables_may_be_declared_in_several_namespaces() {
    let schema = Schema::builder()
        .table("user", "Person")
        .column("Id")
        .int32()
        .primary_key()
        .table("blogging", "Blog")
        .column("Id")
        .int32()
        .primary_key()
        .table("user", "Address")
        .column("Id")
        .int32()
        .primary_key()
        .build()
        .unwrap();

    assert_eq!(schema.namespaces(), ["user", "blogging"]);

    let users: Vec<_> = schema
        .tables_in("user")
        .map(|table| table.name.as_str())
        .collect();
    assert_eq!(users, ["Person", "Address"]);
}
