use polygen_core::schema::{ColumnSpecBuilder, Type};

#[test]
fn builds_a_column() {
    let mut builder = ColumnSpecBuilder::new("Title", Type::String);
    builder.max_length(200).unwrap().nullable().unwrap();

    let column = builder.build().unwrap();

    assert_eq!(column.name, "Title");
    assert_eq!(column.ty, Type::String);
    assert_eq!(column.max_length, Some(200));
    assert!(column.nullable);
    assert!(!column.primary_key);
}

#[test]
fn mutating_after_build_fails() {
    let mut builder = ColumnSpecBuilder::new("Title", Type::String);
    builder.max_length(200).unwrap();
    builder.build().unwrap();

    let err = builder.nullable().unwrap_err();
    assert!(err.is_use_after_build());
    assert_eq!(
        err.to_string(),
        "column builder `Title` was used after build"
    );

    assert!(builder.max_length(10).unwrap_err().is_use_after_build());
    assert!(builder.build().unwrap_err().is_use_after_build());
}

#[test]
fn failed_build_does_not_seal_the_builder() {
    let mut builder = ColumnSpecBuilder::new("Title", Type::String);

    let err = builder.build().unwrap_err();
    assert!(err.is_configuration());
    assert!(!err.is_use_after_build());

    builder.max_length(80).unwrap();
    assert_eq!(builder.build().unwrap().max_length, Some(80));
}

#[test]
fn issues_name_the_unqualified_column() {
    let mut builder = ColumnSpecBuilder::new("Id", Type::Boolean);
    builder.primary_key().unwrap().identity().unwrap();

    let err = builder.build().unwrap_err();
    let issues = err.configuration_issues().unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].column, "Id");
    assert_eq!(
        issues[0].message,
        "identity requires an integer column, found Boolean"
    );
}
