use crate::walk::{Namespace, UnitItems};

use polygen_core::compiler::{Diagnostic, Request, ROOT_UNIT};
use std::collections::HashMap;
use syn::ext::IdentExt;

/// Parses a unit, turning every syntax error into a located diagnostic.
pub(crate) fn parse(unit: &str, source: &str) -> Result<syn::File, Vec<Diagnostic>> {
    syn::parse_file(source).map_err(|err| {
        err.into_iter()
            .map(|err| {
                let start = err.span().start();
                Diagnostic::error(err.to_string()).at(unit, start.line, start.column)
            })
            .collect()
    })
}

/// Checks that the root unit declares exactly the other units as modules.
pub(crate) fn modules(request: &Request, root: Option<&syn::File>) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    if !request.units.contains_key(ROOT_UNIT) {
        diagnostics.push(Diagnostic::error(format!(
            "request has no `{ROOT_UNIT}` unit"
        )));
        return diagnostics;
    }

    // The root failed to parse; that is already reported.
    let Some(root) = root else {
        return diagnostics;
    };

    let mut declared = vec![];

    for item in &root.items {
        let syn::Item::Mod(module) = item else {
            continue;
        };

        if module.content.is_some() {
            continue;
        }

        let unit = format!("{}.rs", module.ident.unraw());

        if !request.units.contains_key(&unit) {
            let start = module.ident.span().start();
            diagnostics.push(
                Diagnostic::error(format!(
                    "module `{}` has no source unit `{unit}`",
                    module.ident.unraw()
                ))
                .at(ROOT_UNIT, start.line, start.column),
            );
        }

        declared.push(unit);
    }

    for unit in request.units.keys() {
        if unit != ROOT_UNIT && !declared.contains(unit) {
            diagnostics.push(Diagnostic::warning(format!(
                "unit `{unit}` is not declared as a module of `{ROOT_UNIT}`"
            )));
        }
    }

    diagnostics
}

/// Checks a unit for items declared twice in the same scope.
pub(crate) fn duplicates(unit: &UnitItems) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    let mut seen: HashMap<(&str, Namespace, &str), usize> = HashMap::new();

    for item in &unit.items {
        let Some(namespace) = item.namespace else {
            continue;
        };

        let key = (item.scope.as_str(), namespace, item.name.as_str());

        if let Some(first_line) = seen.get(&key) {
            diagnostics.push(
                Diagnostic::error(format!(
                    "`{}` is defined more than once in `{}` (first defined on line {first_line})",
                    item.name, item.scope
                ))
                .at(&unit.unit, item.line, item.column),
            );
        } else {
            seen.insert(key, item.line);
        }
    }

    diagnostics
}

pub(crate) fn empty(unit: &UnitItems) -> Option<Diagnostic> {
    if unit.items.is_empty() {
        Some(Diagnostic::warning(format!(
            "unit `{}` declares no items",
            unit.unit
        )))
    } else {
        None
    }
}
