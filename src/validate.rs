use crate::errors::{FormulaError, Result};

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Gate a substituted formula before it is parsed.
///
/// Checks run in order: character set, doubled operators, presence of a digit.
pub fn check_formula(formula: &str) -> Result<()> {
    if !formula.chars().all(is_safe_char) {
        return Err(FormulaError::UnsafeCharacters);
    }
    if has_doubled_operator(formula) {
        return Err(FormulaError::InvalidOperatorSequence);
    }
    if !formula.chars().any(|c| c.is_ascii_digit()) {
        return Err(FormulaError::UnsafeCharacters);
    }
    Ok(())
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}

/// `++`, `--`, `**`, `//` with any whitespace between the pair. Mixed pairs
/// such as `+ -` or `* -` are allowed.
fn has_doubled_operator(formula: &str) -> bool {
    let mut prev = None;
    for c in formula.chars().filter(|c| !c.is_whitespace()) {
        if OPERATORS.contains(&c) && prev == Some(c) {
            return true;
        }
        prev = Some(c);
    }
    false
}
