use tracing::{debug, trace};

use crate::dataset::Dataset;
use crate::errors::{FormulaError, Result};
use crate::marker::{self, MarkerKind, Segment};
use crate::{expression, validate};

/// =========================
/// Public API (Templates)
/// =========================

/// Replace every `{key}` marker whose key is in `dataset` with the value.
///
/// Markers naming absent keys, `{}`, unterminated braces and `{{key}}` are
/// left byte-for-byte unchanged. Substituted values are not scanned again.
pub fn substitute_keys(text: &str, dataset: Option<&Dataset>) -> String {
    let Some(dataset) = dataset else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    for segment in marker::segments(text) {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Marker { raw, inner } => match marker::lookup(inner, dataset) {
                Some(value) => out.push_str(&value.to_string()),
                None => {
                    trace!(marker = raw, "no dataset entry, marker kept");
                    out.push_str(raw);
                }
            },
        }
    }
    out
}

/// =========================
/// Public API (Formulas)
/// =========================

/// Evaluate a formula such as `{price} * {quantity}` or
/// `{price * quantity * (1 - discount)}` against `dataset`.
///
/// Compound markers are wrapped in parentheses before splicing, so
/// `2 * {a + b}` multiplies the whole sum.
pub fn evaluate_formula(formula: &str, dataset: &Dataset) -> Result<f64> {
    if formula.trim().is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    let mut processed = String::with_capacity(formula.len());
    for segment in marker::segments(formula) {
        match segment {
            Segment::Text(t) => processed.push_str(t),
            Segment::Marker { inner, .. } => match marker::classify(inner, dataset) {
                MarkerKind::Key(key) => {
                    let value = marker::lookup(key, dataset).ok_or_else(|| {
                        debug!(key, "formula references unknown key");
                        let trimmed = key.trim();
                        // a blank marker reports its raw text
                        let name = if trimmed.is_empty() { key } else { trimmed };
                        FormulaError::UnknownKey(name.to_string())
                    })?;
                    processed.push_str(&value.to_string());
                }
                MarkerKind::Compound(expr) => {
                    let sub = marker::substitute_identifiers(expr, dataset);
                    if let Some(key) = sub.unresolved {
                        return Err(FormulaError::UnknownKey(key));
                    }
                    processed.push('(');
                    processed.push_str(&sub.text);
                    processed.push(')');
                }
            },
        }
    }
    trace!(formula, substituted = %processed, "formula substituted");

    validate::check_formula(&processed)?;
    let ast = expression::parse_expr(&processed)?;
    trace!(ast = %ast, "formula parsed");
    let result = expression::eval_ast(&ast);
    debug!(formula, ?result, "formula evaluated");
    result
}

/// =========================
/// Public API (Display)
/// =========================

/// Substitute values into `formula` without evaluating it, for showing the
/// formula next to its result: `{price * quantity}` renders as `100 * 3`.
///
/// Never fails. Unknown identifiers inside compound markers stay as written
/// and unresolvable key markers stay as `{key}`.
pub fn format_display(formula: &str, dataset: &Dataset) -> String {
    let mut out = String::with_capacity(formula.len());
    for segment in marker::segments(formula) {
        match segment {
            Segment::Text(t) => out.push_str(t),
            Segment::Marker { raw, inner } => match marker::classify(inner, dataset) {
                MarkerKind::Key(key) => match marker::lookup(key, dataset) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(raw),
                },
                MarkerKind::Compound(expr) => {
                    out.push_str(&marker::substitute_identifiers(expr, dataset).text);
                }
            },
        }
    }
    out
}
