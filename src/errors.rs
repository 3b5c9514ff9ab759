use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Failures of `evaluate_formula`, listed in the order the pipeline checks them.
// The `Display` text is what a UI shows next to the broken field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    // Formula is empty or whitespace only
    #[error("Formula is empty")]
    EmptyFormula,

    // A marker or compound expression references a key the dataset lacks
    #[error("Dataset key '{0}' not found")]
    UnknownKey(String),

    // Substituted text holds something other than digits, operators, parentheses, whitespace
    #[error("Formula contains unsafe characters")]
    UnsafeCharacters,

    // `++`, `--`, `**` or `//`, whitespace between them ignored
    #[error("Formula contains invalid operator sequences")]
    InvalidOperatorSequence,

    // Safe characters that still do not form an arithmetic expression
    #[error("Invalid formula: {0}")]
    InvalidSyntax(String),

    // Division by zero or a non-finite result
    #[error("Formula result is not a valid number")]
    NotANumber,
}

// Rejections raised while turning JSON input into a `Dataset`
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset must be a valid JSON object")]
    NotAnObject,

    #[error("Dataset key '{key}' holds {kind}; only numbers, strings and booleans are supported")]
    UnsupportedValue { key: String, kind: &'static str },
}

// Type alias for results that default to `FormulaError` as the error type
pub type Result<T, E = FormulaError> = std::result::Result<T, E>;
