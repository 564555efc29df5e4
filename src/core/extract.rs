//! Recognition of `StyleSheet.create` declarations and usage counting.
//!
//! Two declaration shapes are recognized among top-level variable
//! declarations:
//!
//! - plain: `const styles = StyleSheet.create({...})`
//! - factory: `const styles = (width) => StyleSheet.create({...})`,
//!   referenced elsewhere as `styles(WIDTH).entry`
//!
//! Anything else is skipped, not an error. Usage counts are textual: each
//! entry's pattern is scanned against the full source, so unrelated identical
//! substrings over-count and computed member access under-counts. That
//! tradeoff is inherited behavior and must stay.

use regex::Regex;
use swc_common::{SourceMap, Spanned};
use swc_ecma_ast::{
    BlockStmtOrExpr, CallExpr, Callee, Decl, Expr, MemberProp, Module, ModuleItem, ObjectLit,
    Pat, Prop, PropName, PropOrSpread, Stmt, VarDeclarator,
};

use crate::core::error::StyleError;
use crate::core::model::{Position, Span, StyleEntry, StyleGroup, StyleKind};
use crate::core::parser::parse_source;

/// Parse a source buffer and return every recognized stylesheet with
/// per-entry usage counts.
///
/// Fails only when the source cannot be parsed; a parseable file with no
/// stylesheets yields an empty list.
pub fn extract_styles(text: &str) -> Result<Vec<StyleGroup>, StyleError> {
    let parsed = parse_source(text)?;
    let mut groups = collect_groups(&parsed.module, &parsed.source_map);
    for group in &mut groups {
        for entry in &mut group.entries {
            let pattern = usage_pattern(&group.root_name, group.kind, &entry.name);
            entry.usage_count = pattern.find_iter(text).count();
        }
    }
    Ok(groups)
}

/// Build the textual match pattern for one style entry.
///
/// Plain groups match the literal `root.entry`; factory groups match
/// `root(<args>).entry` where `<args>` is any non-empty run up to the first
/// closing parenthesis.
pub(crate) fn usage_pattern(root_name: &str, kind: StyleKind, entry_name: &str) -> Regex {
    let pattern = match kind {
        StyleKind::Plain => format!(
            r"{}\.{}",
            regex::escape(root_name),
            regex::escape(entry_name)
        ),
        StyleKind::Factory => format!(
            r"{}\([^)]+\)\.{}",
            regex::escape(root_name),
            regex::escape(entry_name)
        ),
    };
    Regex::new(&pattern).expect("escaped identifiers always form a valid pattern")
}

fn collect_groups(module: &Module, source_map: &SourceMap) -> Vec<StyleGroup> {
    let mut groups = Vec::new();
    for item in &module.body {
        let ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) = item else {
            continue;
        };
        // Only single-binding declarators are considered.
        let [decl] = var.decls.as_slice() else {
            continue;
        };
        if let Some(group) = group_from_declarator(decl, var.span, source_map) {
            groups.push(group);
        }
    }
    groups
}

fn group_from_declarator(
    decl: &VarDeclarator,
    decl_span: swc_common::Span,
    source_map: &SourceMap,
) -> Option<StyleGroup> {
    let Pat::Ident(binding) = &decl.name else {
        return None;
    };
    let init = decl.init.as_deref()?;

    let (object, kind) = match init {
        Expr::Call(call) => (style_sheet_create_arg(call)?, StyleKind::Plain),
        Expr::Arrow(arrow) => {
            let BlockStmtOrExpr::Expr(body) = &*arrow.body else {
                return None;
            };
            let Expr::Call(call) = &**body else {
                return None;
            };
            (style_sheet_create_arg(call)?, StyleKind::Factory)
        }
        _ => return None,
    };

    Some(StyleGroup {
        root_name: binding.id.sym.to_string(),
        kind,
        location: span_from(source_map, decl_span),
        entries: entries_from_object(object, source_map),
    })
}

/// The object literal argument of a `StyleSheet.create(...)` call, if the
/// call has exactly that callee shape.
fn style_sheet_create_arg(call: &CallExpr) -> Option<&ObjectLit> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Member(member) = &**callee else {
        return None;
    };
    let Expr::Ident(object) = &*member.obj else {
        return None;
    };
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    if object.sym != "StyleSheet" || prop.sym != "create" {
        return None;
    }
    let arg = call.args.first()?;
    if arg.spread.is_some() {
        return None;
    }
    match &*arg.expr {
        Expr::Object(object) => Some(object),
        _ => None,
    }
}

fn entries_from_object(object: &ObjectLit, source_map: &SourceMap) -> Vec<StyleEntry> {
    let mut entries = Vec::new();
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        let Prop::KeyValue(kv) = &**prop else {
            continue;
        };
        let name = match &kv.key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => s.value.to_string_lossy().into_owned(),
            _ => continue,
        };
        entries.push(StyleEntry {
            name,
            usage_count: 0,
            location: span_from(source_map, prop.span()),
        });
    }
    entries
}

fn span_from(source_map: &SourceMap, span: swc_common::Span) -> Span {
    let lo = source_map.lookup_char_pos(span.lo);
    let hi = source_map.lookup_char_pos(span.hi);
    Span::new(
        Position::new(lo.line, lo.col_display),
        Position::new(hi.line, hi.col_display),
    )
}
