use polygen_core::compiler::{Diagnostic, Output, Severity};

/// Outcome of one generation request.
///
/// The three images are present, and non-empty, exactly when
/// `emit_result.success` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub emit_result: EmitResult,
    pub binary_image: Option<Vec<u8>>,
    pub debug_image: Option<Vec<u8>>,
    pub doc_image: Option<Vec<u8>>,
}

/// One image of a successful artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image<'a> {
    /// `binary`, `debug` or `doc`
    pub name: &'static str,

    /// File extension the image is conventionally written with
    pub extension: &'static str,

    pub bytes: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitResult {
    pub success: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl Artifact {
    pub fn success(&self) -> bool {
        self.emit_result.success
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.emit_result.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics()
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }

    /// Images in the order `binary`, `debug`, `doc`. Empty unless the
    /// artifact is successful.
    pub fn images(&self) -> Vec<Image<'_>> {
        [
            ("binary", "bin", &self.binary_image),
            ("debug", "debug.json", &self.debug_image),
            ("doc", "doc.json", &self.doc_image),
        ]
        .into_iter()
        .filter_map(|(name, extension, bytes)| {
            Some(Image {
                name,
                extension,
                bytes: bytes.as_deref()?,
            })
        })
        .collect()
    }

    pub(crate) fn from_output(output: Output) -> Artifact {
        let Output {
            success,
            mut diagnostics,
            images,
        } = output;

        let images = match images {
            Some(images) if success => images,
            Some(_) => return Artifact::failed(diagnostics),
            None if success => {
                diagnostics.push(Diagnostic::error(
                    "compiler reported success without producing images",
                ));
                return Artifact::failed(diagnostics);
            }
            None => return Artifact::failed(diagnostics),
        };

        for (name, image) in [
            ("binary", &images.binary),
            ("debug", &images.debug),
            ("documentation", &images.documentation),
        ] {
            if image.is_empty() {
                diagnostics.push(Diagnostic::error(format!(
                    "compiler produced an empty {name} image"
                )));
            }
        }

        if diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
        {
            return Artifact::failed(diagnostics);
        }

        Artifact {
            emit_result: EmitResult {
                success: true,
                diagnostics,
            },
            binary_image: Some(images.binary),
            debug_image: Some(images.debug),
            doc_image: Some(images.documentation),
        }
    }

    fn failed(diagnostics: Vec<Diagnostic>) -> Artifact {
        Artifact {
            emit_result: EmitResult {
                success: false,
                diagnostics,
            },
            binary_image: None,
            debug_image: None,
            doc_image: None,
        }
    }
}
