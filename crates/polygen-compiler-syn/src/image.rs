//! Formats of the emitted images.
//!
//! The binary image is a `bincode` encoded [`Manifest`]. The debug and
//! documentation images are JSON documents, a [`LineTable`] and a
//! [`DocIndex`].

use crate::walk::UnitItems;

use polygen_core::compiler::{Diagnostic, Images};
use quote::ToTokens;
use serde::{Deserialize, Serialize};

/// Version of the binary image layout.
pub const FORMAT_VERSION: u32 = 1;

/// Contents of the binary image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub crate_name: String,
    pub format_version: u32,
    pub units: Vec<UnitManifest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitManifest {
    pub name: String,
    pub module: String,
    pub items: Vec<ItemEntry>,

    /// The unit's tokens, whitespace and comments normalized away
    pub tokens: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub path: String,
    pub kind: String,
}

/// Contents of the debug image: where each item is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTable {
    pub crate_name: String,
    pub entries: Vec<LineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    pub path: String,
    pub unit: String,
    pub line: usize,
    pub column: usize,
}

/// Contents of the documentation image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocIndex {
    pub crate_name: String,
    pub entries: Vec<DocEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub path: String,
    pub doc: String,
}

impl Manifest {
    pub fn decode(bytes: &[u8]) -> bincode::Result<Manifest> {
        bincode::deserialize(bytes)
    }

    /// Looks up a unit by file name.
    pub fn unit(&self, name: &str) -> Option<&UnitManifest> {
        self.units.iter().find(|unit| unit.name == name)
    }
}

impl LineTable {
    pub fn decode(bytes: &[u8]) -> serde_json::Result<LineTable> {
        serde_json::from_slice(bytes)
    }

    pub fn get(&self, path: &str) -> Option<&LineEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}

impl DocIndex {
    pub fn decode(bytes: &[u8]) -> serde_json::Result<DocIndex> {
        serde_json::from_slice(bytes)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.doc.as_str())
    }
}

/// Encodes the three images of a successful compilation.
pub(crate) fn emit(
    crate_name: &str,
    units: &[(UnitItems, &syn::File)],
) -> Result<Images, Diagnostic> {
    let manifest = Manifest {
        crate_name: crate_name.to_string(),
        format_version: FORMAT_VERSION,
        units: units
            .iter()
            .map(|(unit, file)| UnitManifest {
                name: unit.unit.clone(),
                module: unit.module.clone(),
                items: unit
                    .items
                    .iter()
                    .map(|item| ItemEntry {
                        path: item.path(),
                        kind: item.kind.to_string(),
                    })
                    .collect(),
                tokens: file.to_token_stream().to_string(),
            })
            .collect(),
    };

    let line_table = LineTable {
        crate_name: crate_name.to_string(),
        entries: units
            .iter()
            .flat_map(|(unit, _)| {
                unit.items.iter().map(|item| LineEntry {
                    path: item.path(),
                    unit: unit.unit.clone(),
                    line: item.line,
                    column: item.column,
                })
            })
            .collect(),
    };

    let mut docs = vec![];

    for (unit, _) in units {
        if let Some(doc) = &unit.doc {
            docs.push(DocEntry {
                path: unit.module.clone(),
                doc: doc.clone(),
            });
        }

        for item in &unit.items {
            if let Some(doc) = &item.doc {
                docs.push(DocEntry {
                    path: item.path(),
                    doc: doc.clone(),
                });
            }
        }
    }

    let doc_index = DocIndex {
        crate_name: crate_name.to_string(),
        entries: docs,
    };

    let binary = bincode::serialize(&manifest)
        .map_err(|err| Diagnostic::error(format!("failed to encode binary image: {err}")))?;
    let debug = serde_json::to_vec_pretty(&line_table)
        .map_err(|err| Diagnostic::error(format!("failed to encode debug image: {err}")))?;
    let documentation = serde_json::to_vec_pretty(&doc_index)
        .map_err(|err| Diagnostic::error(format!("failed to encode documentation image: {err}")))?;

    Ok(Images {
        binary,
        debug,
        documentation,
    })
}
