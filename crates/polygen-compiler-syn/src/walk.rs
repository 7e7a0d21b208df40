use quote::ToTokens;
use syn::ext::IdentExt;

/// Every item of one parsed unit, with its location and documentation.
#[derive(Debug)]
pub(crate) struct UnitItems {
    pub(crate) unit: String,

    /// Module path of the unit, starting with the crate name
    pub(crate) module: String,

    /// Inner documentation of the unit
    pub(crate) doc: Option<String>,

    pub(crate) items: Vec<ItemRecord>,
}

#[derive(Debug)]
pub(crate) struct ItemRecord {
    /// Path of the module or type declaring the item
    pub(crate) scope: String,
    pub(crate) name: String,
    pub(crate) kind: &'static str,

    /// `None` for associated items, which cannot clash at module level
    pub(crate) namespace: Option<Namespace>,

    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) doc: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Namespace {
    Type,
    Value,
}

impl ItemRecord {
    pub(crate) fn path(&self) -> String {
        format!("{}::{}", self.scope, self.name)
    }
}

/// Module path of a unit: the crate root for `root`, otherwise the crate
/// root followed by the unit's file stem.
pub(crate) fn module_path(crate_name: &str, unit: &str, root: &str) -> String {
    if unit == root {
        crate_name.to_string()
    } else {
        let stem = unit.strip_suffix(".rs").unwrap_or(unit);
        format!("{crate_name}::{stem}")
    }
}

pub(crate) fn unit(unit: &str, module: String, file: &syn::File) -> UnitItems {
    let mut items = vec![];
    walk_items(&file.items, &module, &mut items);

    UnitItems {
        unit: unit.to_string(),
        doc: doc(&file.attrs),
        module,
        items,
    }
}

fn walk_items(items: &[syn::Item], scope: &str, out: &mut Vec<ItemRecord>) {
    use Namespace::*;

    for item in items {
        let (ident, kind, namespace, attrs) = match item {
            syn::Item::Struct(item) => (&item.ident, "struct", Type, &item.attrs),
            syn::Item::Enum(item) => (&item.ident, "enum", Type, &item.attrs),
            syn::Item::Union(item) => (&item.ident, "union", Type, &item.attrs),
            syn::Item::Trait(item) => (&item.ident, "trait", Type, &item.attrs),
            syn::Item::Type(item) => (&item.ident, "type", Type, &item.attrs),
            syn::Item::Fn(item) => (&item.sig.ident, "fn", Value, &item.attrs),
            syn::Item::Const(item) => (&item.ident, "const", Value, &item.attrs),
            syn::Item::Static(item) => (&item.ident, "static", Value, &item.attrs),
            syn::Item::Mod(item) => (&item.ident, "mod", Type, &item.attrs),
            syn::Item::Impl(item) => {
                walk_impl(item, scope, out);
                continue;
            }
            _ => continue,
        };

        out.push(record(scope, ident, kind, Some(namespace), attrs));

        if let syn::Item::Mod(module) = item {
            if let Some((_, content)) = &module.content {
                let scope = format!("{scope}::{}", module.ident.unraw());
                walk_items(content, &scope, out);
            }
        }
    }
}

fn walk_impl(item: &syn::ItemImpl, scope: &str, out: &mut Vec<ItemRecord>) {
    let self_ty = item.self_ty.to_token_stream().to_string().replace(' ', "");
    let scope = format!("{scope}::{self_ty}");

    for member in &item.items {
        let (ident, kind, attrs) = match member {
            syn::ImplItem::Fn(member) => (&member.sig.ident, "method", &member.attrs),
            syn::ImplItem::Const(member) => (&member.ident, "associated const", &member.attrs),
            syn::ImplItem::Type(member) => (&member.ident, "associated type", &member.attrs),
            _ => continue,
        };

        out.push(record(&scope, ident, kind, None, attrs));
    }
}

fn record(
    scope: &str,
    ident: &syn::Ident,
    kind: &'static str,
    namespace: Option<Namespace>,
    attrs: &[syn::Attribute],
) -> ItemRecord {
    let start = ident.span().start();

    ItemRecord {
        scope: scope.to_string(),
        name: ident.unraw().to_string(),
        kind,
        namespace,
        line: start.line,
        column: start.column,
        doc: doc(attrs),
    }
}

/// Joined text of the `doc` attributes, one line each.
fn doc(attrs: &[syn::Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(text),
                        ..
                    }),
                ..
            }) => Some(text.value()),
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
