//! Bind dataset values into text labels and arithmetic formulas.
//!
//! ```
//! use dataset_formula::{evaluate_formula, format_display, substitute_keys, Dataset};
//!
//! let ds = Dataset::from_json(r#"{"price": 100, "quantity": 3}"#).unwrap();
//! assert_eq!(substitute_keys("Price: {price}", Some(&ds)), "Price: 100");
//! assert_eq!(evaluate_formula("{price * quantity}", &ds), Ok(300.0));
//! assert_eq!(format_display("{price * quantity}", &ds), "100 * 3");
//! ```

pub mod dataset;
pub mod engine;
pub mod errors;
mod expression;
mod marker;
mod parser;
mod validate;

pub use dataset::{Dataset, Scalar};
pub use engine::{evaluate_formula, format_display, substitute_keys};
pub use errors::{DatasetError, FormulaError, Result};
