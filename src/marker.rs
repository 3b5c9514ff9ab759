//! `{...}` marker scanning and identifier substitution.
//!
//! A marker runs from `{` to the first `}` after it, so `{{price}}` yields
//! the inner text `{price` and never matches a key. `{}` and unterminated
//! braces are plain text.

use crate::dataset::{Dataset, Scalar};
use crate::parser::Parser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Marker { raw: &'a str, inner: &'a str },
}

/// Split `input` into text and markers, left to right, in a single pass.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut p = Parser::new(input);
    loop {
        let text = p.take_while(|c| c != '{');
        if !text.is_empty() {
            out.push(Segment::Text(text));
        }
        let open = p.pos();
        if !p.consume_char('{') {
            break;
        }
        match p.capture_until('}') {
            Ok("") => out.push(Segment::Text(&input[open..p.pos()])),
            Ok(inner) => {
                p.consume_char('}');
                out.push(Segment::Marker { raw: &input[open..p.pos()], inner });
            }
            Err(_) => {
                out.push(Segment::Text(&input[open..]));
                break;
            }
        }
    }
    out
}

/// How a marker's inner text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind<'a> {
    /// Looked up as a whole; `{key-with-dash}` stays a key when the dataset has it.
    Key(&'a str),
    Compound(&'a str),
}

pub fn classify<'a>(inner: &'a str, dataset: &Dataset) -> MarkerKind<'a> {
    if lookup(inner, dataset).is_none() && has_operator(inner) {
        MarkerKind::Compound(inner)
    } else {
        MarkerKind::Key(inner)
    }
}

pub fn has_operator(s: &str) -> bool {
    s.contains(['+', '-', '*', '/'])
}

/// Exact key first, then the whitespace-trimmed key. A blank key never matches.
pub fn lookup<'d>(key: &str, dataset: &'d Dataset) -> Option<&'d Scalar> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return None;
    }
    dataset.get(key).or_else(|| dataset.get(trimmed))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// First letter-led identifier left in `text`: a key the dataset lacks,
    /// or a word spliced in from a string or boolean value.
    pub unresolved: Option<String>,
}

/// Replace every whole identifier in `expr` that names a dataset key.
///
/// A run such as `key-with-dash` is looked up whole first. If that misses it
/// is split at hyphens and each piece is looked up on its own, the hyphens
/// staying behind as minus signs, so `price-quantity` becomes `100-3`.
/// Runs that start with a digit (`2x`, `1e5`) are literals and left alone.
pub fn substitute_identifiers(expr: &str, dataset: &Dataset) -> Substituted {
    let mut out = Substituted { text: String::with_capacity(expr.len()), unresolved: None };
    let mut p = Parser::new(expr);
    while let Some(c) = p.peek_char() {
        if c.is_ascii_digit() || c == '.' {
            out.text.push_str(p.take_while(|c| c == '.' || c == '_' || c.is_alphanumeric()));
        } else if let Ok(run) = p.parse_identifier() {
            out.push_run(run, dataset);
        } else if let Some(c) = p.bump() {
            out.text.push(c);
        }
    }
    out.unresolved = first_identifier(&out.text).map(str::to_string);
    if let Some(identifier) = &out.unresolved {
        tracing::debug!(identifier, "identifier left after substitution");
    }
    out
}

/// First letter- or underscore-led word in `text`, cut at any hyphen.
/// Words glued to a digit (`2x`) are part of a literal and skipped.
pub fn first_identifier(text: &str) -> Option<&str> {
    let mut p = Parser::new(text);
    while let Some(c) = p.peek_char() {
        if c.is_ascii_digit() || c == '.' {
            p.take_while(|c| c == '.' || c == '_' || c.is_alphanumeric());
        } else if let Ok(run) = p.parse_identifier() {
            return run.split('-').find(|piece| !piece.is_empty());
        } else {
            p.bump();
        }
    }
    None
}

impl Substituted {
    fn push_run(&mut self, run: &str, dataset: &Dataset) {
        if let Some(value) = dataset.get(run) {
            self.push_value(value);
            return;
        }
        for (idx, piece) in run.split('-').enumerate() {
            if idx > 0 {
                self.text.push('-');
            }
            let leads_with_digit = piece.chars().next().is_some_and(|c| c.is_ascii_digit());
            match dataset.get(piece) {
                Some(value) if !leads_with_digit => self.push_value(value),
                _ => self.text.push_str(piece),
            }
        }
    }

    fn push_value(&mut self, value: &Scalar) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.text, "{value}");
    }
}
