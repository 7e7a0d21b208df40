use tests::*;

use pretty_assertions::assert_eq;

#[test]
fn sample_schema_compiles() {
    let artifact = blogging().generate_code();

    assert!(artifact.success(), "{:#?}", artifact.diagnostics());
    assert!(artifact.diagnostics().is_empty());
    assert_eq!(artifact.images().len(), 3);
}

#[test]
fn every_namespace_is_a_unit() {
    let artifact = blogging().generate_code();
    let manifest = Manifest::decode(artifact.binary_image.as_ref().unwrap()).unwrap();

    let units: Vec<_> = manifest.units.iter().map(|unit| &unit.name[..]).collect();
    assert_eq!(units, ["lib.rs", "support.rs", "user.rs", "blogging.rs"]);
}

#[test]
fn navigations_are_named_after_their_keys() {
    let source = blogging().generate_code_as_string();

    for setter in [
        "pub fn set_author(&mut self, value: crate::user::Person)",
        "pub fn set_blog(&mut self, value: crate::blogging::Blog)",
        "pub fn set_editor(&mut self, value: crate::user::Person)",
        "pub fn set_post(&mut self, value: crate::blogging::Post)",
        "pub fn set_tag(&mut self, value: crate::blogging::Tag)",
    ] {
        assert!(source.contains(setter), "missing `{setter}`");
    }
}

#[test]
fn every_type_compiles() {
    let artifact = every_type().generate_code();

    assert!(artifact.success(), "{:#?}", artifact.diagnostics());

    let docs = DocIndex::decode(artifact.doc_image.as_ref().unwrap()).unwrap();
    assert_eq!(
        docs.get("polygen_generated::types::Sample::version"),
        Some("Column `Version`, the row's concurrency token.")
    );
}
