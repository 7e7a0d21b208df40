use tests::*;

use pretty_assertions::assert_eq;

#[test]
fn source_is_deterministic() {
    let schema = blogging();

    assert_eq!(
        schema.generate_code_as_string(),
        schema.generate_code_as_string()
    );
    assert_eq!(
        schema.generate_code_as_string(),
        blogging().generate_code_as_string()
    );
}

#[test]
fn artifact_is_deterministic() {
    let first = blogging().generate_code();
    let second = blogging().generate_code();

    assert!(first.success());
    assert_eq!(first, second);
}
