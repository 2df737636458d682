//! Call-site recognition and key/value extraction.
//!
//! Two call shapes mark user-visible strings as translatable. Each is a
//! variant of [`CallPattern`] with its own matcher and extractor behind a
//! uniform `try_extract` contract, so adding a third shape stays cheap and
//! each one is testable in isolation.
//!
//! - `nls.localize(key, defaultValue)` — one mandatory pair.
//! - `Command.toLocalizedCommand({ id, label, category }, labelKey?,
//!   categoryKey?)` — a mandatory label pair plus an optional category
//!   pair.
//!
//! Extraction errors are plain messages; the caller attaches the call
//! site's location.

pub mod literal;
#[cfg(test)]
mod tests;

use swc_common::Spanned;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit, MemberProp, Prop, PropName, PropOrSpread, Str};

use crate::core::parse::ParsedSource;

/// Callee text of the direct localize pattern.
pub const LOCALIZE_CALLEE: &str = "nls.localize";
/// Callee text of the localized-command wrapper pattern.
pub const LOCALIZED_COMMAND_CALLEE: &str = "Command.toLocalizedCommand";

/// One (key, default value) pair extracted from a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPair {
    pub key: String,
    pub value: String,
}

/// The closed set of recognized call shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPattern {
    /// `nls.localize(key, defaultValue)`
    DirectLocalize,
    /// `Command.toLocalizedCommand({ id, label, category }, labelKey?, categoryKey?)`
    LocalizedCommand,
}

impl CallPattern {
    pub const ALL: [CallPattern; 2] = [CallPattern::DirectLocalize, CallPattern::LocalizedCommand];

    fn callee_name(self) -> &'static str {
        match self {
            CallPattern::DirectLocalize => LOCALIZE_CALLEE,
            CallPattern::LocalizedCommand => LOCALIZED_COMMAND_CALLEE,
        }
    }

    /// True if the call's invoked expression spells this pattern's
    /// qualified name.
    pub fn matches(self, call: &CallExpr) -> bool {
        let Callee::Expr(expr) = &call.callee else {
            return false;
        };
        callee_text(expr).as_deref() == Some(self.callee_name())
    }

    /// Extract this pattern's pairs from a matched call. An error message
    /// means the whole call site is skipped.
    pub fn try_extract(
        self,
        call: &CallExpr,
        source: &ParsedSource,
    ) -> Result<Vec<ExtractedPair>, String> {
        match self {
            CallPattern::DirectLocalize => extract_localize_call(call, source),
            CallPattern::LocalizedCommand => extract_localized_command_call(call, source),
        }
    }
}

/// Reconstruct the dotted text of an identifier or member chain.
/// Computed members and anything else yield `None`.
fn callee_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => {
            let MemberProp::Ident(prop) = &member.prop else {
                return None;
            };
            Some(format!("{}.{}", callee_text(&member.obj)?, prop.sym))
        }
        _ => None,
    }
}

fn string_literal(expr: &Expr) -> Option<&Str> {
    match expr {
        Expr::Lit(Lit::Str(lit)) => Some(lit),
        _ => None,
    }
}

/// Require a string literal, naming the offending source text otherwise.
fn require_string<'a>(expr: &'a Expr, source: &ParsedSource) -> Result<&'a Str, String> {
    string_literal(expr).ok_or_else(|| {
        format!(
            "expected a string literal, found '{}'",
            source.snippet(expr.span())
        )
    })
}

fn extract_localize_call(
    call: &CallExpr,
    source: &ParsedSource,
) -> Result<Vec<ExtractedPair>, String> {
    if call.args.len() < 2 {
        return Err(format!(
            "expected at least two arguments to {}(key, defaultValue)",
            LOCALIZE_CALLEE
        ));
    }
    let key = literal::text(require_string(&call.args[0].expr, source)?);
    let value = literal::decode(require_string(&call.args[1].expr, source)?);
    Ok(vec![ExtractedPair { key, value }])
}

fn extract_localized_command_call(
    call: &CallExpr,
    source: &ParsedSource,
) -> Result<Vec<ExtractedPair>, String> {
    let Some(first) = call.args.first() else {
        return Err(format!(
            "expected a command object as the first argument to {}",
            LOCALIZED_COMMAND_CALLEE
        ));
    };
    let Expr::Object(object) = &*first.expr else {
        return Err(format!(
            "expected an object literal, found '{}'",
            source.snippet(first.expr.span())
        ));
    };

    let mut id = None;
    let mut label = None;
    let mut category = None;
    for member in &object.props {
        let PropOrSpread::Prop(prop) = member else {
            return Err("expected only property assignments in the command object".to_string());
        };
        let Prop::KeyValue(assignment) = &**prop else {
            return Err("expected only property assignments in the command object".to_string());
        };
        let PropName::Ident(name) = &assignment.key else {
            return Err(format!(
                "expected an identifier property name, found '{}'",
                source.snippet(assignment.key.span())
            ));
        };
        match name.sym.as_str() {
            "id" => id = string_literal(&assignment.value).map(literal::text),
            "label" => label = string_literal(&assignment.value).map(literal::decode),
            "category" => category = string_literal(&assignment.value).map(literal::decode),
            // Other command properties are not localization-relevant.
            _ => {}
        }
    }

    let explicit_label_key = match call.args.get(1) {
        Some(arg) => Some(literal::text(require_string(&arg.expr, source)?)),
        None => None,
    };
    // Falsy coalescing: an explicit empty-string key still falls back to
    // the command id.
    let label_key = match explicit_label_key {
        Some(key) if !key.is_empty() => Some(key),
        _ => id,
    };
    let Some(label_key) = label_key else {
        return Err(
            "unable to determine a label key: no explicit key argument and no 'id' property"
                .to_string(),
        );
    };
    let Some(label) = label else {
        return Err("expected a 'label' property with a string literal value".to_string());
    };

    let category_key = match call.args.get(2) {
        Some(arg) => Some(literal::text(require_string(&arg.expr, source)?)),
        None => None,
    };

    let mut pairs = vec![ExtractedPair {
        key: label_key,
        value: label,
    }];
    // The category pair needs both halves; a lone key or a lone value is
    // silently omitted.
    if let (Some(key), Some(value)) = (category_key, category) {
        pairs.push(ExtractedPair { key, value });
    }
    Ok(pairs)
}
