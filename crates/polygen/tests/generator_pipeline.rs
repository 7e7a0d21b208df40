use polygen::compiler::{Diagnostic, Images, Output, Request};
use polygen::{Compiler, Config, GenerateCode, Generator, Schema};

use polygen_compiler_syn::Manifest;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

fn schema() -> Schema {
    Schema::builder()
        .table("blogging", "Blog")
        .column("BlogId")
        .int32()
        .identity()
        .primary_key()
        .column("Name")
        .string()
        .max_length(200)
        .build()
        .unwrap()
}

/// Records every request and answers with a fixed output.
#[derive(Clone)]
struct Stub {
    output: Output,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl Stub {
    fn new(output: Output) -> Stub {
        Stub {
            output,
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Compiler for Stub {
    fn compile(&self, request: &Request) -> Output {
        self.requests.lock().unwrap().push(request.clone());
        self.output.clone()
    }
}

fn images() -> Images {
    Images {
        binary: vec![1],
        debug: vec![2],
        documentation: vec![3],
    }
}

fn generate_with(stub: &Stub) -> polygen::Artifact {
    Generator::builder()
        .compiler(stub.clone())
        .build()
        .generate(&schema())
}

#[test]
fn default_generator_compiles_with_syn() {
    let artifact = schema().generate_code();

    assert!(artifact.success(), "{:#?}", artifact.diagnostics());

    let manifest = Manifest::decode(artifact.binary_image.as_ref().unwrap()).unwrap();
    assert_eq!(manifest.crate_name, "polygen_generated");

    let units: Vec<_> = manifest.units.iter().map(|unit| &unit.name[..]).collect();
    assert_eq!(units, ["lib.rs", "support.rs", "blogging.rs"]);
}

#[test]
fn configured_crate_name_reaches_the_compiler() {
    let stub = Stub::new(Output::succeeded(images(), vec![]));

    Generator::builder()
        .config(Config::new().crate_name("blog_data"))
        .compiler(stub.clone())
        .build()
        .generate(&schema());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].crate_name, "blog_data");
    assert_eq!(requests[0].units, polygen::synthesize(&schema()).units());
}

#[test]
fn successful_output_carries_images() {
    let warning = Diagnostic::warning("unused");
    let stub = Stub::new(Output::succeeded(images(), vec![warning.clone()]));
    let artifact = generate_with(&stub);

    assert!(artifact.success());
    assert_eq!(artifact.diagnostics(), [warning]);
    assert_eq!(artifact.binary_image, Some(vec![1]));
    assert_eq!(artifact.debug_image, Some(vec![2]));
    assert_eq!(artifact.doc_image, Some(vec![3]));

    let images: Vec<_> = artifact
        .images()
        .into_iter()
        .map(|image| (image.name, image.extension, image.bytes))
        .collect();
    assert_eq!(
        images,
        [
            ("binary", "bin", &[1][..]),
            ("debug", "debug.json", &[2][..]),
            ("doc", "doc.json", &[3][..]),
        ]
    );
}

#[test]
fn failed_output_has_no_images() {
    let error = Diagnostic::error("broken").at("lib.rs", 1, 0);
    let stub = Stub::new(Output::failed(vec![error.clone()]));
    let artifact = generate_with(&stub);

    assert!(!artifact.success());
    assert_eq!(artifact.diagnostics(), [error]);
    assert_eq!(artifact.binary_image, None);
    assert_eq!(artifact.debug_image, None);
    assert_eq!(artifact.doc_image, None);
    assert!(artifact.images().is_empty());
}

#[test]
fn images_on_a_failed_output_are_dropped() {
    let stub = Stub::new(Output {
        success: false,
        diagnostics: vec![],
        images: Some(images()),
    });
    let artifact = generate_with(&stub);

    assert!(!artifact.success());
    assert!(artifact.images().is_empty());
}

#[test]
fn success_without_images_is_a_failure() {
    let stub = Stub::new(Output {
        success: true,
        diagnostics: vec![],
        images: None,
    });
    let artifact = generate_with(&stub);

    assert!(!artifact.success());
    assert_eq!(
        artifact.diagnostics(),
        [Diagnostic::error(
            "compiler reported success without producing images"
        )]
    );
}

#[test]
fn empty_image_is_a_failure() {
    let stub = Stub::new(Output::succeeded(
        Images {
            debug: vec![],
            ..images()
        },
        vec![],
    ));
    let artifact = generate_with(&stub);

    assert!(!artifact.success());
    assert_eq!(
        artifact.diagnostics(),
        [Diagnostic::error("compiler produced an empty debug image")]
    );
    assert_eq!(artifact.binary_image, None);
}

#[test]
fn compile_timeout_fails_the_artifact() {
    struct Slow;

    impl Compiler for Slow {
        fn compile(&self, _: &Request) -> Output {
            thread::sleep(Duration::from_secs(5));
            Output::succeeded(images(), vec![])
        }
    }

    let artifact = Generator::builder()
        .config(Config::new().compile_timeout(Duration::from_millis(20)))
        .compiler(Slow)
        .build()
        .generate(&schema());

    assert!(!artifact.success());
    assert_eq!(
        artifact.diagnostics(),
        [Diagnostic::error("compilation timed out after 20 ms")]
    );
}

#[test]
fn generate_as_string_does_not_compile() {
    let stub = Stub::new(Output::failed(vec![]));
    let generator = Generator::builder().compiler(stub.clone()).build();

    let source = generator.generate_as_string(&schema());

    assert_eq!(source, schema().generate_code_as_string());
    assert!(source.contains("pub mod blogging {"));
    assert!(stub.requests().is_empty());
}

#[test]
fn default_config() {
    let config = Config::default();

    assert_eq!(config.crate_name, "polygen_generated");
    assert_eq!(config.compile_timeout, None);
    assert_eq!(Generator::default().config(), &config);
}
