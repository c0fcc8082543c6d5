//! Validation layer - primitive rules, field validators, and the result contract
//!
//! Record validators live next to their candidate types in [`crate::candidates`].

pub mod fields;
mod result;
pub mod rules;

pub use result::{ErrorKind, FieldError, FieldPath, ValidationErrors, ValidationResult};
pub use rules::{Check, NumericRule, Rejected, Rule, RuleOutcome, TextRule};
