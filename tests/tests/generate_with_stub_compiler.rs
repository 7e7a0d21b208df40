use tests::*;

use pretty_assertions::assert_eq;

#[test]
fn stub_receives_the_synthesized_units() {
    let stub = Recording::new(Output::succeeded(
        Images {
            binary: b"bin".to_vec(),
            debug: b"dbg".to_vec(),
            documentation: b"doc".to_vec(),
        },
        vec![],
    ));

    let artifact = Generator::builder()
        .compiler(stub.clone())
        .build()
        .generate(&blog_post());

    assert!(artifact.success());
    assert_eq!(artifact.binary_image.as_deref(), Some(&b"bin"[..]));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].crate_name, "polygen_generated");

    let units: Vec<_> = requests[0].units.keys().map(String::as_str).collect();
    assert_eq!(units, ["lib.rs", "support.rs", "blogging.rs"]);
}

#[test]
fn failed_compilation_yields_a_failed_artifact() {
    let error = Diagnostic::error("expected `;`").at("blogging.rs", 12, 4);
    let stub = Recording::new(Output::failed(vec![error.clone()]));

    let artifact = Generator::builder()
        .compiler(stub)
        .build()
        .generate(&blog_post());

    assert!(!artifact.success());
    assert_eq!(artifact.diagnostics(), [error]);
    assert!(artifact.images().is_empty());
    assert_eq!(
        artifact.diagnostics()[0].to_string(),
        "error: blogging.rs:12:4: expected `;`"
    );
}
