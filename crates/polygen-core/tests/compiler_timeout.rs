use polygen_core::compiler::{Diagnostic, Images, Output, Request, Severity, Timeout};
use polygen_core::Compiler;

use std::thread;
use std::time::Duration;

/// Succeeds after sleeping for the given time.
struct Slow(Duration);

impl Compiler for Slow {
    fn compile(&self, request: &Request) -> Output {
        thread::sleep(self.0);
        Output::succeeded(
            Images {
                binary: request.crate_name.as_bytes().to_vec(),
                debug: b"{}".to_vec(),
                documentation: b"{}".to_vec(),
            },
            vec![],
        )
    }
}

struct Panics;

impl Compiler for Panics {
    fn compile(&self, _: &Request) -> Output {
        panic!("compiler crashed");
    }
}

fn request() -> Request {
    Request::new("blogging").unit("lib.rs", "pub mod blogging;")
}

#[test]
fn fast_compiler_output_passes_through() {
    let compiler = Timeout::new(Slow(Duration::ZERO), Duration::from_secs(10));
    let output = compiler.compile(&request());

    assert!(output.success);
    assert_eq!(output.images.unwrap().binary, b"blogging");
}

#[test]
fn slow_compiler_fails_with_a_diagnostic() {
    let compiler = Timeout::new(Slow(Duration::from_secs(5)), Duration::from_millis(20));
    let output = compiler.compile(&request());

    assert!(!output.success);
    assert!(output.images.is_none());
    assert_eq!(
        output.diagnostics,
        [Diagnostic::error("compilation timed out after 20 ms")]
    );
}

#[test]
fn crashed_compiler_fails_with_a_diagnostic() {
    let compiler = Timeout::new(Panics, Duration::from_secs(10));
    let output = compiler.compile(&request());

    assert!(!output.success);

    let errors: Vec<_> = output.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, Severity::Error);
    assert_eq!(
        errors[0].message,
        "compiler stopped without producing output"
    );
}

#[test]
fn diagnostics_display_their_location() {
    let diagnostic = Diagnostic::error("expected `;`").at("blogging.rs", 12, 4);
    assert_eq!(
        diagnostic.to_string(),
        "error: blogging.rs:12:4: expected `;`"
    );

    assert_eq!(
        Diagnostic::warning("unit is empty").to_string(),
        "warning: unit is empty"
    );
}
